//! One month of the calendar popover

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::DAY_CELL_WIDTH;
use crate::picker::{CalendarDay, SelectedDate};
use crate::utils::datetime::weekday_abbrev;

/// Grid of whole weeks for one month
pub struct MonthGrid<'a> {
    pub title: String,
    pub days: &'a [CalendarDay],
    pub selected: SelectedDate,
    pub today: NaiveDate,
    /// Label for each day cell
    pub day_label: &'a dyn Fn(NaiveDate) -> String,
}

impl MonthGrid<'_> {
    /// Rows needed for `day_count` days: borders, weekday header, one row per week
    pub fn height(day_count: usize) -> u16 {
        let weeks = u16::try_from(day_count.div_ceil(7)).unwrap_or(u16::MAX);
        weeks.saturating_add(3)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(self.days.len() / 7 + 1);

        let header: Vec<Span> = self
            .days
            .iter()
            .take(7)
            .map(|day| {
                Span::styled(
                    format!("{:<width$}", weekday_abbrev(day.date.weekday()), width = DAY_CELL_WIDTH as usize),
                    Style::default().fg(Color::Yellow),
                )
            })
            .collect();
        lines.push(Line::from(header));

        for week in self.days.chunks(7) {
            let spans: Vec<Span> = week
                .iter()
                .map(|day| {
                    Span::styled(
                        format!("{:>2} ", (self.day_label)(day.date)),
                        self.day_style(day),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn day_style(&self, day: &CalendarDay) -> Style {
        let is_endpoint = Some(day.date) == self.selected.start || Some(day.date) == self.selected.end;
        let in_range = match (self.selected.start, self.selected.end) {
            (Some(start), Some(end)) => start < day.date && day.date < end,
            _ => false,
        };

        let mut style = if !day.in_month {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        if is_endpoint {
            style = style.fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD);
        } else if in_range {
            style = style.bg(Color::Blue);
        }

        if day.date == self.today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        style
    }

    /// Index into the day list of the cell under (`column`, `row`)
    pub fn day_at(area: Rect, day_count: usize, column: u16, row: u16) -> Option<usize> {
        // Skip the border and the weekday header
        let first_row = area.y.checked_add(2)?;
        let first_column = area.x.checked_add(1)?;
        if row < first_row || column < first_column {
            return None;
        }

        let week = usize::from(row - first_row);
        let weekday = usize::from((column - first_column) / DAY_CELL_WIDTH);
        if weekday >= 7 {
            return None;
        }

        let index = week * 7 + weekday;
        (index < day_count).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_counts_weeks() {
        assert_eq!(MonthGrid::height(35), 8);
        assert_eq!(MonthGrid::height(42), 9);
        assert_eq!(MonthGrid::height(28), 7);
    }

    #[test]
    fn test_day_at_maps_cells() {
        let area = Rect::new(10, 5, 23, 9);
        // First cell sits below the border and header
        assert_eq!(MonthGrid::day_at(area, 35, 11, 7), Some(0));
        assert_eq!(MonthGrid::day_at(area, 35, 13, 7), Some(0));
        assert_eq!(MonthGrid::day_at(area, 35, 14, 7), Some(1));
        assert_eq!(MonthGrid::day_at(area, 35, 11, 8), Some(7));
        // Header row and border are not days
        assert_eq!(MonthGrid::day_at(area, 35, 11, 6), None);
        assert_eq!(MonthGrid::day_at(area, 35, 10, 7), None);
        // Beyond the last week
        assert_eq!(MonthGrid::day_at(area, 35, 11, 12), None);
    }
}
