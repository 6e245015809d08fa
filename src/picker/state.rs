//! Picker state record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the picker edits one date or a start/end pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    Single,
    #[default]
    Range,
}

/// One of the two text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Start,
    End,
}

impl Field {
    /// Name of the host form field bound to this input
    pub fn name(self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::End => "end",
        }
    }
}

/// Raw text currently shown in the inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextValue {
    pub start: String,
    pub end: Option<String>,
}

/// Dates successfully parsed or picked so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectedDate {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Caller supplied initial values for a picker instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerDefaults {
    pub text_value: TextValue,
    pub selected_date: SelectedDate,
    pub month_count: usize,
    pub is_open: bool,
}

impl Default for PickerDefaults {
    fn default() -> Self {
        Self {
            text_value: TextValue::default(),
            selected_date: SelectedDate::default(),
            month_count: 1,
            is_open: false,
        }
    }
}

/// Complete state of one mounted picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub mode: PickerMode,
    pub text_value: TextValue,
    pub selected_date: SelectedDate,
    pub is_open: bool,
    pub focused_field: Field,
    pub month_count: usize,
    /// First day of every displayed month, `month_count` entries
    pub visible_month_starts: Vec<NaiveDate>,
}

impl PickerState {
    /// Build the initial state; `visible_month_starts` is supplied by the caller
    /// since it depends on the date-math collaborator.
    pub fn new(mode: PickerMode, defaults: PickerDefaults, visible_month_starts: Vec<NaiveDate>) -> Self {
        Self {
            mode,
            text_value: defaults.text_value,
            selected_date: defaults.selected_date,
            is_open: defaults.is_open,
            focused_field: Field::Start,
            month_count: defaults.month_count,
            visible_month_starts,
        }
    }

    /// Text shown in the given input
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Start => &self.text_value.start,
            Field::End => self.text_value.end.as_deref().unwrap_or(""),
        }
    }

    pub fn selected(&self, field: Field) -> Option<NaiveDate> {
        match field {
            Field::Start => self.selected_date.start,
            Field::End => self.selected_date.end,
        }
    }

    /// First displayed month, if any month is displayed
    pub fn first_visible_month(&self) -> Option<NaiveDate> {
        self.visible_month_starts.first().copied()
    }
}
