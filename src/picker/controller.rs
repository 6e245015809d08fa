//! Picker controller: named operations over the store plus the reactions that
//! follow a state change (focus auto-advance, host form clearing).

use chrono::NaiveDate;
use std::cell::Ref;

use super::action::PickerAction;
use super::click_outside::{ClickOutside, PointerDocument, RegionHandle};
use super::months::{calendar_days, CalendarDay};
use super::reducer::PickerEnv;
use super::state::{Field, PickerMode, PickerState};
use super::store::PickerStore;
use crate::form::FormValues;

/// Region handles the presentation layer fills in while rendering
#[derive(Debug, Clone, Default)]
pub struct PickerRegions {
    pub start_input: RegionHandle,
    pub end_input: RegionHandle,
    pub calendar: RegionHandle,
}

impl PickerRegions {
    pub fn all(&self) -> Vec<RegionHandle> {
        vec![self.start_input.clone(), self.end_input.clone(), self.calendar.clone()]
    }
}

pub struct PickerController {
    store: PickerStore,
    env: PickerEnv,
    regions: PickerRegions,
    /// State as of the last `settle`
    previous: PickerState,
    /// Host form values as of the last `observe_form`
    observed_form: Option<FormValues>,
    _click_outside: ClickOutside,
}

impl PickerController {
    /// Wire a controller to its store and install the outside-click listener
    pub fn new(store: PickerStore, document: &PointerDocument) -> Self {
        let regions = PickerRegions::default();
        let blur_store = store.clone();
        let click_outside = ClickOutside::install(document, regions.all(), move || {
            blur_store.dispatch(PickerAction::Blur);
        });

        Self {
            env: store.env(),
            previous: store.snapshot(),
            store,
            regions,
            observed_form: None,
            _click_outside: click_outside,
        }
    }

    pub fn store(&self) -> &PickerStore {
        &self.store
    }

    pub fn state(&self) -> Ref<'_, PickerState> {
        self.store.state()
    }

    pub fn env(&self) -> &PickerEnv {
        &self.env
    }

    pub fn regions(&self) -> &PickerRegions {
        &self.regions
    }

    pub fn handle_reset(&mut self) {
        self.dispatch(PickerAction::Reset);
    }

    pub fn handle_focus_start(&mut self) {
        self.dispatch(PickerAction::FocusStart);
    }

    pub fn handle_focus_end(&mut self) {
        self.dispatch(PickerAction::FocusEnd);
    }

    pub fn handle_focus(&mut self, field: Field) {
        self.dispatch(PickerAction::focus(field));
    }

    pub fn handle_blur(&mut self) {
        self.dispatch(PickerAction::Blur);
    }

    pub fn handle_change_text(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(PickerAction::change_text(field, value.into()));
    }

    /// Select `date` for whichever input is focused; returns that input
    pub fn handle_select_date(&mut self, date: NaiveDate) -> Field {
        let field = self.store.state().focused_field;
        self.dispatch(PickerAction::select_date(field, date));
        field
    }

    pub fn handle_go_to_prev_month(&mut self) {
        self.dispatch(PickerAction::GoToPrevMonth);
    }

    pub fn handle_go_to_next_month(&mut self) {
        self.dispatch(PickerAction::GoToNextMonth);
    }

    /// Whole-week day list for one displayed month
    pub fn month_days(&self, first: NaiveDate) -> Vec<CalendarDay> {
        calendar_days(first, self.env.dates.as_ref())
    }

    /// First displayed month, or today when no month is displayed
    pub fn first_month_date(&self) -> NaiveDate {
        self.store
            .state()
            .first_visible_month()
            .unwrap_or_else(|| self.env.dates.today())
    }

    /// Canonical text for a date
    pub fn format(&self, date: NaiveDate, pattern: &str) -> String {
        self.env.dates.format(date, pattern)
    }

    /// React to the transition since the previous settle.
    ///
    /// In range mode, a newly selected valid start date moves focus to the end
    /// input. Returns true when focus was advanced.
    pub fn settle(&mut self) -> bool {
        let current = self.store.snapshot();
        let advance = self.should_advance(&self.previous, &current);

        if advance {
            log::info!("Start date set to {:?}, moving focus to end input", current.selected_date.start);
            self.store.dispatch(PickerAction::FocusEnd);
            self.previous = self.store.snapshot();
        } else {
            self.previous = current;
        }

        advance
    }

    fn should_advance(&self, previous: &PickerState, current: &PickerState) -> bool {
        current.mode == PickerMode::Range
            && current.selected_date.start != previous.selected_date.start
            && self
                .env
                .dates
                .is_valid_date(&current.text_value.start, &self.env.date_format)
    }

    /// Watch the host form; clearing either field resets the picker.
    ///
    /// The first observation counts as a change. Returns true when a reset ran.
    pub fn observe_form(&mut self, values: &FormValues) -> bool {
        let previous = self.observed_form.replace(values.clone());
        let start_changed = previous.as_ref().map_or(true, |p| p.start != values.start);
        let end_changed = previous.as_ref().map_or(true, |p| p.end != values.end);

        let cleared = (start_changed && values.start.is_empty()) || (end_changed && values.end.is_empty());
        if cleared {
            log::debug!("Host form field cleared, resetting picker");
            self.handle_reset();
        }
        cleared
    }

    fn dispatch(&mut self, action: PickerAction) {
        self.store.dispatch(action);
        self.settle();
    }
}
