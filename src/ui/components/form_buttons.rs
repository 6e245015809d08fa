//! Submit and reset buttons of the host form

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use super::common::create_button_paragraph;
use crate::constants::{BUTTON_RESET, BUTTON_SUBMIT, INPUT_HEIGHT};
use crate::picker::{click_outside::rect_contains, PointerPress};
use crate::ui::core::{actions::Action, Component, FocusTarget};

const BUTTON_WIDTH: u16 = 10;

#[derive(Debug, Default)]
pub struct FormButtons {
    pub focus: FocusTarget,
    submit_area: Option<Rect>,
    reset_area: Option<Rect>,
}

impl FormButtons {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for FormButtons {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let activates = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match self.focus {
            FocusTarget::Submit if activates => Action::SubmitForm,
            FocusTarget::Reset if activates => Action::ResetForm,
            FocusTarget::Submit | FocusTarget::Reset if key.code == KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse(&mut self, press: PointerPress) -> Action {
        if self.submit_area.is_some_and(|r| rect_contains(r, press.column, press.row)) {
            self.focus = FocusTarget::Submit;
            return Action::SubmitForm;
        }
        if self.reset_area.is_some_and(|r| rect_contains(r, press.column, press.row)) {
            self.focus = FocusTarget::Reset;
            return Action::ResetForm;
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let height = INPUT_HEIGHT.min(rect.height);
        let submit = Rect::new(rect.x, rect.y, BUTTON_WIDTH.min(rect.width), height);
        let reset_x = rect.x.saturating_add(BUTTON_WIDTH + 1);
        let reset = Rect::new(
            reset_x,
            rect.y,
            BUTTON_WIDTH.min((rect.x + rect.width).saturating_sub(reset_x)),
            height,
        );

        f.render_widget(create_button_paragraph(BUTTON_SUBMIT, self.focus == FocusTarget::Submit), submit);
        f.render_widget(create_button_paragraph(BUTTON_RESET, self.focus == FocusTarget::Reset), reset);

        self.submit_area = Some(submit);
        self.reset_area = Some(reset);
    }
}
