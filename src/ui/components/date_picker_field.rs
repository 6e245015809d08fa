//! Date picker field: the text inputs plus the calendar popover.
//!
//! This component forwards key presses and pointer presses into the
//! [`PickerController`] and reports new input text to the host form through
//! [`Action::SetFieldValue`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::calendar_popover::{CalendarHit, CalendarPopover};
use super::date_input::DateInput;
use crate::constants::{INPUT_HEIGHT, INPUT_WIDTH, TITLE_DATE_INPUT, TITLE_END_INPUT, TITLE_START_INPUT};
use crate::form::FormValues;
use crate::picker::{Field, PickerController, PickerMode, PointerDocument, PointerPress, PickerStore};
use crate::ui::core::{actions::Action, Component, FocusTarget};

pub struct DatePickerField {
    controller: PickerController,
    popover: CalendarPopover,
    /// Whether the host form routes key presses here
    has_focus: bool,
}

impl DatePickerField {
    pub fn new(store: PickerStore, document: &PointerDocument) -> Self {
        Self {
            controller: PickerController::new(store, document),
            popover: CalendarPopover::new(),
            has_focus: true,
        }
    }

    pub fn controller(&self) -> &PickerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PickerController {
        &mut self.controller
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Propagate host form values; a cleared field resets the picker
    pub fn observe_form(&mut self, values: &FormValues) {
        self.controller.observe_form(values);
    }

    /// Rows the field needs: the inputs plus the popover when open
    pub fn desired_height(&self) -> u16 {
        let state = self.controller.state();
        if state.is_open {
            INPUT_HEIGHT + CalendarPopover::size(state.month_count).1
        } else {
            INPUT_HEIGHT
        }
    }

    fn fields(&self) -> &'static [Field] {
        match self.controller.state().mode {
            PickerMode::Single => &[Field::Start],
            PickerMode::Range => &[Field::Start, Field::End],
        }
    }

    fn change_text(&mut self, field: Field, value: String) -> Action {
        self.controller.handle_change_text(field, value.clone());
        Action::SetFieldValue { field, value }
    }

    fn select_day(&mut self, date: chrono::NaiveDate) -> Action {
        let field = self.controller.handle_select_date(date);
        let value = self.controller.state().text(field).to_string();
        Action::SetFieldValue { field, value }
    }

    fn input_title(&self, field: Field) -> &'static str {
        match (self.controller.state().mode, field) {
            (PickerMode::Single, _) => TITLE_DATE_INPUT,
            (PickerMode::Range, Field::Start) => TITLE_START_INPUT,
            (PickerMode::Range, Field::End) => TITLE_END_INPUT,
        }
    }
}

impl Component for DatePickerField {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.has_focus {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => {
                self.controller.handle_blur();
                Action::None
            }
            KeyCode::PageUp => {
                self.controller.handle_go_to_prev_month();
                Action::None
            }
            KeyCode::PageDown => {
                self.controller.handle_go_to_next_month();
                Action::None
            }
            _ => {
                let field = self.controller.state().focused_field;
                let current = self.controller.state().text(field).to_string();
                match DateInput::edit(&current, key) {
                    Some(value) => self.change_text(field, value),
                    None => Action::None,
                }
            }
        }
    }

    fn handle_mouse(&mut self, press: PointerPress) -> Action {
        let regions = self.controller.regions().clone();

        if regions.start_input.contains(press.column, press.row) {
            self.controller.handle_focus_start();
            return Action::Focus(FocusTarget::Picker);
        }
        if regions.end_input.contains(press.column, press.row) {
            self.controller.handle_focus_end();
            return Action::Focus(FocusTarget::Picker);
        }
        if regions.calendar.contains(press.column, press.row) {
            return match self.popover.hit(press) {
                Some(CalendarHit::PrevMonth) => {
                    self.controller.handle_go_to_prev_month();
                    Action::Focus(FocusTarget::Picker)
                }
                Some(CalendarHit::NextMonth) => {
                    self.controller.handle_go_to_next_month();
                    Action::Focus(FocusTarget::Picker)
                }
                Some(CalendarHit::Day(date)) => self.select_day(date),
                None => Action::Focus(FocusTarget::Picker),
            };
        }

        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let regions = self.controller.regions().clone();
        let state = self.controller.store().snapshot();

        let mut x = rect.x;
        regions.end_input.clear();
        for field in self.fields() {
            let width = INPUT_WIDTH.min((rect.x + rect.width).saturating_sub(x));
            let area = Rect::new(x, rect.y, width, INPUT_HEIGHT.min(rect.height));
            let focused = self.has_focus && state.focused_field == *field;
            DateInput::render(f, area, self.input_title(*field), state.text(*field), focused);

            match field {
                Field::Start => regions.start_input.set(area),
                Field::End => regions.end_input.set(area),
            }
            x = x.saturating_add(INPUT_WIDTH + 1);
        }

        if state.is_open && rect.height > INPUT_HEIGHT {
            let (width, height) = CalendarPopover::size(state.month_count);
            let area = Rect::new(
                rect.x,
                rect.y + INPUT_HEIGHT,
                width.min(rect.width),
                height.min(rect.height - INPUT_HEIGHT),
            );
            self.popover.render(f, area, &self.controller);
            regions.calendar.set(area);
        } else {
            self.popover.clear();
            regions.calendar.clear();
        }
    }

    fn on_focus(&mut self) {
        self.has_focus = true;
    }

    fn on_blur(&mut self) {
        self.has_focus = false;
        self.controller.handle_blur();
    }
}
