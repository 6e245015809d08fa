//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::STATUS_HINT;
use crate::form::FormValues;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the last submission if any, otherwise key hints
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, last_submitted: Option<&FormValues>) {
        let (status_text, status_color) = match last_submitted {
            Some(values) => (format!("Submitted {}", values.to_json()), Color::Green),
            None => (STATUS_HINT.to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
