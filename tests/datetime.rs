use chrono::{Datelike, NaiveDate, Weekday};
use daterange::utils::datetime::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_add_months_clamps_day() {
    let math = ChronoDateMath::default();
    assert_eq!(math.add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
    assert_eq!(math.add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
    assert_eq!(math.add_months(date(2024, 3, 15), -3), date(2023, 12, 15));
    assert_eq!(math.add_months(date(2024, 3, 15), 0), date(2024, 3, 15));
}

#[test]
fn test_month_boundaries() {
    let math = ChronoDateMath::default();
    assert_eq!(math.start_of_month(date(2024, 3, 15)), date(2024, 3, 1));
    assert_eq!(math.end_of_month(date(2024, 4, 2)), date(2024, 4, 30));
}

#[test]
fn test_week_boundaries_sunday_start() {
    let math = ChronoDateMath::new(Weekday::Sun);
    // 2024-03-01 is a Friday
    assert_eq!(math.start_of_week(date(2024, 3, 1)), date(2024, 2, 25));
    assert_eq!(math.end_of_week(date(2024, 3, 1)), date(2024, 3, 2));
    assert_eq!(math.start_of_week(date(2024, 3, 3)), date(2024, 3, 3));
}

#[test]
fn test_week_boundaries_monday_start() {
    let math = ChronoDateMath::new(Weekday::Mon);
    assert_eq!(math.week_start(), Weekday::Mon);
    assert_eq!(math.start_of_week(date(2024, 3, 1)), date(2024, 2, 26));
    assert_eq!(math.end_of_week(date(2024, 3, 1)), date(2024, 3, 3));
    assert_eq!(math.start_of_week(date(2024, 3, 3)).weekday(), Weekday::Mon);
}

#[test]
fn test_enumerate_days_inclusive() {
    let math = ChronoDateMath::default();
    let days = math.enumerate_days(date(2024, 2, 27), date(2024, 3, 2));
    assert_eq!(
        days,
        vec![
            date(2024, 2, 27),
            date(2024, 2, 28),
            date(2024, 2, 29),
            date(2024, 3, 1),
            date(2024, 3, 2)
        ]
    );

    assert_eq!(math.enumerate_days(date(2024, 3, 2), date(2024, 3, 2)).len(), 1);
    assert!(math.enumerate_days(date(2024, 3, 2), date(2024, 3, 1)).is_empty());
}

#[test]
fn test_format() {
    let math = ChronoDateMath::default();
    assert_eq!(math.format(date(2024, 3, 5), DEFAULT_DATE_FORMAT), "2024-03-05");
    assert_eq!(math.format(date(2024, 3, 5), "%d.%m.%Y"), "05.03.2024");
    assert_eq!(math.format(date(2024, 3, 5), "%m"), "03");
}

#[test]
fn test_parse_strict_accepts_canonical_text() {
    let math = ChronoDateMath::default();
    assert_eq!(math.parse_strict("2024-03-10", DEFAULT_DATE_FORMAT), Ok(date(2024, 3, 10)));
    assert!(math.is_valid_date("2024-02-29", DEFAULT_DATE_FORMAT));
}

#[test]
fn test_parse_strict_rejects_partial_and_invalid_text() {
    let math = ChronoDateMath::default();

    for text in ["", "2", "2024-", "2023-02-29", "2024-13-01", "hello"] {
        assert!(
            matches!(math.parse_strict(text, DEFAULT_DATE_FORMAT), Err(DateParseError::Malformed { .. })),
            "expected malformed: {text:?}"
        );
    }
}

#[test]
fn test_parse_strict_rejects_non_canonical_text() {
    let math = ChronoDateMath::default();
    let err = math.parse_strict("2024-3-1", DEFAULT_DATE_FORMAT).unwrap_err();
    assert!(matches!(err, DateParseError::NonCanonical { .. }));
    assert!(err.to_string().contains("2024-3-1"));
}

#[test]
fn test_pinned_today() {
    let math = ChronoDateMath::default().with_today(date(2024, 3, 15));
    assert_eq!(math.today(), date(2024, 3, 15));
}

#[test]
fn test_is_same_month() {
    let math = ChronoDateMath::default();
    assert!(math.is_same_month(date(2024, 3, 1), date(2024, 3, 31)));
    assert!(!math.is_same_month(date(2024, 3, 1), date(2023, 3, 1)));
}

#[test]
fn test_weekday_abbrev() {
    assert_eq!(weekday_abbrev(Weekday::Sun), "Su");
    assert_eq!(weekday_abbrev(Weekday::Thu), "Th");
}

#[test]
fn test_checked_add_months_at_calendar_edges() {
    let math = ChronoDateMath::default();
    assert_eq!(math.checked_add_months(NaiveDate::MAX, 1), None);
    assert_eq!(math.checked_add_months(NaiveDate::MIN, -1), None);
    assert_eq!(math.add_months(NaiveDate::MAX, 1), NaiveDate::MAX);
    assert_eq!(math.checked_add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
}
