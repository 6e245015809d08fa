//! Month-start computation and calendar day enumeration

use chrono::NaiveDate;

use crate::utils::datetime::DateMath;

/// One cell of a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_month: bool,
}

/// `count` consecutive first-of-month dates beginning at the anchor's month.
///
/// The anchor defaults to today when absent. The sequence stops early at the
/// end of the representable calendar rather than repeating its last month.
pub fn month_starts(count: usize, anchor: Option<NaiveDate>, dates: &dyn DateMath) -> Vec<NaiveDate> {
    let first = dates.start_of_month(anchor.unwrap_or_else(|| dates.today()));
    (0..count)
        .map_while(|offset| {
            let offset = i32::try_from(offset).ok()?;
            dates.checked_add_months(first, offset)
        })
        .collect()
}

/// Whole weeks covering the month of `month`, each day tagged with membership.
pub fn calendar_days(month: NaiveDate, dates: &dyn DateMath) -> Vec<CalendarDay> {
    let first = dates.start_of_week(dates.start_of_month(month));
    let last = dates.end_of_week(dates.end_of_month(month));

    dates
        .enumerate_days(first, last)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            in_month: dates.is_same_month(date, month),
        })
        .collect()
}
