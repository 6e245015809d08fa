//! Debug panel listing the in-memory log, newest first

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::ui::layout::LayoutManager;

pub struct DebugPanel;

impl DebugPanel {
    pub fn render(f: &mut Frame, area: Rect, logs: &[String]) {
        let modal_area = LayoutManager::centered_rect(80, 80, area);
        f.render_widget(Clear, modal_area);

        let items: Vec<ListItem> = if logs.is_empty() {
            vec![ListItem::new("No log entries yet").style(Style::default().fg(Color::DarkGray))]
        } else {
            logs.iter()
                .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(Color::White)))
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .title(DIALOG_TITLE_DEBUG_LOGS)
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black))
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(list, modal_area);
    }
}
