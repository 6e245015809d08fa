use crate::picker::Field;

/// Which control of the host form receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// The picker input named by the picker's focused field
    #[default]
    Picker,
    Submit,
    Reset,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Host form
    SetFieldValue { field: Field, value: String },
    SubmitForm,
    ResetForm,

    // Focus
    Focus(FocusTarget),
    FocusNext,
    FocusPrevious,

    // UI operations
    ToggleDebug,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
