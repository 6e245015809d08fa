//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::INPUT_HEIGHT;

/// Areas of the host form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub title: Rect,
    pub picker: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into title, picker, buttons and a one-line status bar.
    ///
    /// The picker gets `picker_height` rows (less on small terminals) and the
    /// buttons follow directly below it.
    #[must_use]
    pub fn form_layout(area: Rect, picker_height: u16) -> FormAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(picker_height),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        FormAreas {
            title: chunks[0],
            picker: chunks[1],
            buttons: chunks[2],
            status: chunks[4],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
