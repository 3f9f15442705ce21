use chrono::{FixedOffset, TimeZone, Utc};
use letsdoit::utils::datetime::*;

#[test]
fn test_format_clock_default_formats() {
    let now = Utc.with_ymd_and_hms(2025, 3, 7, 21, 5, 3).unwrap();
    assert_eq!(
        format_clock(&now, CLOCK_DATE_FORMAT, CLOCK_TIME_FORMAT),
        "3/7/2025, 09:05:03 PM"
    );
}

#[test]
fn test_format_clock_morning() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let now = offset.with_ymd_and_hms(2024, 12, 25, 0, 30, 0).unwrap();
    assert_eq!(
        format_clock(&now, CLOCK_DATE_FORMAT, CLOCK_TIME_FORMAT),
        "12/25/2024, 12:30:00 AM"
    );
}

#[test]
fn test_format_completed_at_is_hours_and_minutes() {
    let at = Utc.with_ymd_and_hms(2025, 3, 7, 21, 5, 3).unwrap();
    let formatted = format_completed_at(&at, COMPLETED_TIME_FORMAT);
    assert_eq!(formatted.len(), 5);
    assert_eq!(&formatted[2..3], ":");
}

#[test]
fn test_format_validation() {
    assert!(is_valid_format(CLOCK_TIME_FORMAT));
    assert!(is_valid_format(CLOCK_DATE_FORMAT));
    assert!(is_valid_format("%Y-%m-%d"));
    assert!(!is_valid_format(""));
    assert!(!is_valid_format("%Q"));
}
