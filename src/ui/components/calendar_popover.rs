//! Calendar popover: month navigation buttons and one grid per visible month

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::month_grid::MonthGrid;
use crate::constants::{BUTTON_NEXT, BUTTON_PREV, DAY_CELL_FORMAT, MONTH_GRID_WIDTH, MONTH_TITLE_FORMAT};
use crate::picker::{click_outside::rect_contains, CalendarDay, PickerController, PointerPress};

/// What a press inside the popover landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarHit {
    PrevMonth,
    NextMonth,
    Day(NaiveDate),
}

/// Popover geometry recorded at the last render, used for hit testing
#[derive(Debug, Default)]
pub struct CalendarPopover {
    prev_button: Option<Rect>,
    next_button: Option<Rect>,
    grids: Vec<(Rect, Vec<CalendarDay>)>,
}

impl CalendarPopover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outer size of the popover for `month_count` months of up to six weeks
    pub fn size(month_count: usize) -> (u16, u16) {
        let months = u16::try_from(month_count).unwrap_or(u16::MAX);
        let grids_width = months.saturating_mul(MONTH_GRID_WIDTH);
        let width = grids_width.max(24).saturating_add(2);
        // border + navigation row + tallest grid + border
        let height = 1 + 1 + MonthGrid::height(42) + 1;
        (width, height)
    }

    /// Forget geometry after the popover closes
    pub fn clear(&mut self) {
        self.prev_button = None;
        self.next_button = None;
        self.grids.clear();
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, controller: &PickerController) {
        self.clear();
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Navigation row: [prev]   YYYY/M   [next]
        let first = controller.first_month_date();
        let header = format!("{}/{}", first.year(), first.month());
        let header_rect = Rect::new(inner.x, inner.y, inner.width, 1);
        f.render_widget(
            Paragraph::new(header)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            header_rect,
        );

        let button_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let prev_label = format!("[{}]", BUTTON_PREV);
        let next_label = format!("[{}]", BUTTON_NEXT);
        let prev_width = (prev_label.len() as u16).min(inner.width);
        let next_width = (next_label.len() as u16).min(inner.width.saturating_sub(prev_width));

        let prev_rect = Rect::new(inner.x, inner.y, prev_width, 1);
        let next_rect = Rect::new(inner.x + inner.width - next_width, inner.y, next_width, 1);
        f.render_widget(Paragraph::new(prev_label).style(button_style), prev_rect);
        f.render_widget(Paragraph::new(next_label).style(button_style), next_rect);
        self.prev_button = Some(prev_rect);
        self.next_button = Some(next_rect);

        let state = controller.store().snapshot();
        let today = controller.env().dates.today();
        let label = |date: NaiveDate| controller.format(date, DAY_CELL_FORMAT);

        let grid_top = inner.y + 1;
        let available_height = inner.height.saturating_sub(1);
        for (index, month) in state.visible_month_starts.iter().enumerate() {
            let offset = u16::try_from(index).unwrap_or(u16::MAX).saturating_mul(MONTH_GRID_WIDTH);
            if offset >= inner.width {
                break;
            }

            let days = controller.month_days(*month);
            let height = MonthGrid::height(days.len()).min(available_height);
            let width = MONTH_GRID_WIDTH.min(inner.width - offset);
            let grid_rect = Rect::new(inner.x + offset, grid_top, width, height);

            let grid = MonthGrid {
                title: controller.format(*month, MONTH_TITLE_FORMAT),
                days: &days,
                selected: state.selected_date,
                today,
                day_label: &label,
            };
            grid.render(f, grid_rect);
            self.grids.push((grid_rect, days));
        }
    }

    /// Resolve a press against the geometry of the last render
    pub fn hit(&self, press: PointerPress) -> Option<CalendarHit> {
        if self.prev_button.is_some_and(|r| rect_contains(r, press.column, press.row)) {
            return Some(CalendarHit::PrevMonth);
        }
        if self.next_button.is_some_and(|r| rect_contains(r, press.column, press.row)) {
            return Some(CalendarHit::NextMonth);
        }

        self.grids.iter().find_map(|(area, days)| {
            if !rect_contains(*area, press.column, press.row) {
                return None;
            }
            MonthGrid::day_at(*area, days.len(), press.column, press.row).map(|index| CalendarHit::Day(days[index].date))
        })
    }
}
