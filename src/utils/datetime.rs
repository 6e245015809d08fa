//! Date arithmetic used by the picker
//!
//! All calendar math (month and week boundaries, day enumeration, formatting and
//! parsing) goes through the [`DateMath`] trait so the picker never touches
//! `chrono` directly. [`ChronoDateMath`] is the production implementation.

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use std::fmt::Write as _;

/// Canonical date pattern mirrored into the text inputs
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Error produced when text cannot be read as a calendar date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("'{text}' does not match date pattern '{pattern}': {source}")]
    Malformed {
        text: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("'{text}' is not written in canonical '{pattern}' form")]
    NonCanonical { text: String, pattern: String },
}

/// Calendar arithmetic collaborator
pub trait DateMath {
    /// The current local date
    fn today(&self) -> NaiveDate;

    /// Shift a date by a signed number of months, clamping the day to the target
    /// month. `None` past the representable calendar range.
    fn checked_add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate>;

    /// Like [`DateMath::checked_add_months`], returning `date` unchanged when the
    /// shift leaves the representable range.
    fn add_months(&self, date: NaiveDate, months: i32) -> NaiveDate {
        self.checked_add_months(date, months).unwrap_or(date)
    }

    fn start_of_month(&self, date: NaiveDate) -> NaiveDate;

    fn end_of_month(&self, date: NaiveDate) -> NaiveDate;

    /// First day of the week containing `date`
    fn start_of_week(&self, date: NaiveDate) -> NaiveDate;

    /// Last day of the week containing `date`
    fn end_of_week(&self, date: NaiveDate) -> NaiveDate;

    /// Every day from `start` to `end`, both inclusive. Empty when `end < start`.
    fn enumerate_days(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate>;

    fn format(&self, date: NaiveDate, pattern: &str) -> String;

    /// Parse `text` with `pattern`, accepting only the exact canonical spelling
    fn parse_strict(&self, text: &str, pattern: &str) -> Result<NaiveDate, DateParseError>;

    fn is_valid_date(&self, text: &str, pattern: &str) -> bool {
        self.parse_strict(text, pattern).is_ok()
    }

    fn is_same_month(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year() && a.month() == b.month()
    }
}

/// `chrono` backed date math with a configurable first day of the week
#[derive(Debug, Clone)]
pub struct ChronoDateMath {
    week_start: Weekday,
    pinned_today: Option<NaiveDate>,
}

impl Default for ChronoDateMath {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl ChronoDateMath {
    pub fn new(week_start: Weekday) -> Self {
        Self {
            week_start,
            pinned_today: None,
        }
    }

    /// Freeze "today" at a fixed date
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }
}

impl DateMath for ChronoDateMath {
    fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn checked_add_months(&self, date: NaiveDate, months: i32) -> Option<NaiveDate> {
        if months >= 0 {
            date.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        }
    }

    fn start_of_month(&self, date: NaiveDate) -> NaiveDate {
        date.with_day(1).unwrap_or(date)
    }

    fn end_of_month(&self, date: NaiveDate) -> NaiveDate {
        let first = self.start_of_month(date);
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let offset = days_since_week_start(date.weekday(), self.week_start);
        date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
    }

    fn end_of_week(&self, date: NaiveDate) -> NaiveDate {
        let start = self.start_of_week(date);
        start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
    }

    fn enumerate_days(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start.iter_days().take_while(|day| *day <= end).collect()
    }

    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(pattern)).is_err() {
            // Invalid patterns are rejected by config validation; keep rendering anyway
            return date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        out
    }

    fn parse_strict(&self, text: &str, pattern: &str) -> Result<NaiveDate, DateParseError> {
        let parsed = NaiveDate::parse_from_str(text, pattern).map_err(|source| DateParseError::Malformed {
            text: text.to_string(),
            pattern: pattern.to_string(),
            source,
        })?;

        // chrono accepts unpadded fields; "2024-3-1" must not count as a finished date
        if self.format(parsed, pattern) != text {
            return Err(DateParseError::NonCanonical {
                text: text.to_string(),
                pattern: pattern.to_string(),
            });
        }

        Ok(parsed)
    }
}

/// Number of days between the configured week start and `day`, in `0..7`
fn days_since_week_start(day: Weekday, week_start: Weekday) -> u64 {
    let day = u64::from(day.num_days_from_monday());
    let start = u64::from(week_start.num_days_from_monday());
    (7 + day - start) % 7
}

/// Parse a weekday name such as "monday" or "Mon"
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    name.trim().parse::<Weekday>().ok()
}

/// Short English name of a weekday, used for grid headers
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_since_week_start() {
        assert_eq!(days_since_week_start(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(days_since_week_start(Weekday::Sat, Weekday::Sun), 6);
        assert_eq!(days_since_week_start(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(days_since_week_start(Weekday::Wed, Weekday::Mon), 2);
    }

    #[test]
    fn test_end_of_month_handles_leap_february() {
        let math = ChronoDateMath::default();
        assert_eq!(math.end_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(math.end_of_month(date(2023, 2, 10)), date(2023, 2, 28));
        assert_eq!(math.end_of_month(date(2024, 12, 31)), date(2024, 12, 31));
    }

    #[test]
    fn test_parse_weekday_names() {
        assert_eq!(parse_weekday("monday"), Some(Weekday::Mon));
        assert_eq!(parse_weekday("Sun"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("someday"), None);
    }
}
