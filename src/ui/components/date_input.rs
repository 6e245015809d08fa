//! Single-line text input for a date

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use super::common::create_input_paragraph;

pub struct DateInput;

impl DateInput {
    pub fn render(f: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
        f.render_widget(create_input_paragraph(text, title, focused), area);
    }

    /// Apply an editing key to `text`; `None` when the key does not edit
    pub fn edit(text: &str, key: KeyEvent) -> Option<String> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut next = text.to_string();
                next.push(c);
                Some(next)
            }
            KeyCode::Backspace if !text.is_empty() => {
                let mut next = text.to_string();
                next.pop();
                Some(next)
            }
            _ => None,
        }
    }
}
