//! The picker state machine

use chrono::NaiveDate;
use std::rc::Rc;

use super::action::PickerAction;
use super::months::month_starts;
use super::state::{Field, PickerMode, PickerState, SelectedDate, TextValue};
use crate::utils::datetime::{ChronoDateMath, DateMath, DEFAULT_DATE_FORMAT};

/// Collaborators the reducer needs besides the state itself
#[derive(Clone)]
pub struct PickerEnv {
    pub dates: Rc<dyn DateMath>,
    /// Pattern used to parse typed text and to mirror picked dates into the inputs
    pub date_format: String,
}

impl PickerEnv {
    pub fn new(dates: Rc<dyn DateMath>, date_format: impl Into<String>) -> Self {
        Self {
            dates,
            date_format: date_format.into(),
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        self.dates.format(date, &self.date_format)
    }

    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        match self.dates.parse_strict(text, &self.date_format) {
            Ok(date) => Some(date),
            Err(e) => {
                log::trace!("Ignoring date text: {}", e);
                None
            }
        }
    }
}

impl Default for PickerEnv {
    fn default() -> Self {
        Self::new(Rc::new(ChronoDateMath::default()), DEFAULT_DATE_FORMAT)
    }
}

impl std::fmt::Debug for PickerEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerEnv")
            .field("date_format", &self.date_format)
            .finish_non_exhaustive()
    }
}

/// Apply one action, returning the next state. Never fails: malformed text is
/// tolerated and the last valid selection is kept.
pub fn reduce(state: &PickerState, action: &PickerAction, env: &PickerEnv) -> PickerState {
    match action {
        PickerAction::Reset => PickerState {
            text_value: TextValue {
                start: String::new(),
                end: Some(String::new()),
            },
            selected_date: SelectedDate::default(),
            ..state.clone()
        },
        PickerAction::FocusStart => PickerState {
            is_open: true,
            focused_field: Field::Start,
            ..state.clone()
        },
        PickerAction::FocusEnd => PickerState {
            is_open: true,
            focused_field: Field::End,
            ..state.clone()
        },
        PickerAction::Blur => PickerState {
            is_open: false,
            ..state.clone()
        },
        PickerAction::ChangeStartText(value) => change_start_text(state, value, env),
        PickerAction::ChangeEndText(value) => change_end_text(state, value, env),
        PickerAction::SelectStartDate(date) => {
            let mut next = state.clone();
            next.is_open = state.mode != PickerMode::Single;
            next.text_value.start = env.format(*date);
            next.selected_date.start = Some(*date);
            next
        }
        PickerAction::SelectEndDate(date) => {
            let mut next = state.clone();
            next.is_open = false;
            next.text_value.end = Some(env.format(*date));
            next.selected_date.end = Some(*date);
            next
        }
        PickerAction::GoToPrevMonth => shift_months(state, -1, env),
        PickerAction::GoToNextMonth => shift_months(state, 1, env),
        PickerAction::None => state.clone(),
    }
}

fn change_start_text(state: &PickerState, value: &str, env: &PickerEnv) -> PickerState {
    let mut next = state.clone();
    next.text_value.start = value.to_string();

    if let Some(date) = env.parse(value) {
        next.selected_date.start = Some(date);
        next.visible_month_starts = month_starts(state.month_count, Some(date), env.dates.as_ref());
    }

    next
}

/// Unlike the start input, unreadable end text falls back to the start date and
/// the months follow it (today when no start date is known).
fn change_end_text(state: &PickerState, value: &str, env: &PickerEnv) -> PickerState {
    let mut next = state.clone();
    next.text_value.end = Some(value.to_string());

    let end = env.parse(value).or(state.selected_date.start);
    next.selected_date.end = end;
    next.visible_month_starts = month_starts(state.month_count, end, env.dates.as_ref());

    next
}

fn shift_months(state: &PickerState, delta: i32, env: &PickerEnv) -> PickerState {
    let current = state.first_visible_month().unwrap_or_else(|| env.dates.today());
    let anchor = env.dates.add_months(current, delta);

    PickerState {
        visible_month_starts: month_starts(state.month_count, Some(anchor), env.dates.as_ref()),
        ..state.clone()
    }
}
