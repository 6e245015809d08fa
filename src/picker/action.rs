use chrono::NaiveDate;

use super::state::Field;

/// Every transition the picker state machine understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    // Selection
    Reset,
    SelectStartDate(NaiveDate),
    SelectEndDate(NaiveDate),

    // Focus and visibility
    FocusStart,
    FocusEnd,
    Blur,

    // Typed text
    ChangeStartText(String),
    ChangeEndText(String),

    // Month navigation
    GoToPrevMonth,
    GoToNextMonth,

    None,
}

impl PickerAction {
    pub fn focus(field: Field) -> Self {
        match field {
            Field::Start => PickerAction::FocusStart,
            Field::End => PickerAction::FocusEnd,
        }
    }

    pub fn change_text(field: Field, value: String) -> Self {
        match field {
            Field::Start => PickerAction::ChangeStartText(value),
            Field::End => PickerAction::ChangeEndText(value),
        }
    }

    pub fn select_date(field: Field, date: NaiveDate) -> Self {
        match field {
            Field::Start => PickerAction::SelectStartDate(date),
            Field::End => PickerAction::SelectEndDate(date),
        }
    }
}
