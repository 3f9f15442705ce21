//! Date and time formatting for the footer clock and completed tasks.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Footer clock time, e.g. `09:05:03 PM`
pub const CLOCK_TIME_FORMAT: &str = "%I:%M:%S %p";

/// Footer clock date, e.g. `3/7/2025`
pub const CLOCK_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Completion time shown next to a completed task
pub const COMPLETED_TIME_FORMAT: &str = "%H:%M";

/// Whether `format` is a strftime string chrono can render.
pub fn is_valid_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format the footer clock as `<date>, <time>`
pub fn format_clock<Tz>(now: &DateTime<Tz>, date_format: &str, time_format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}, {}", now.format(date_format), now.format(time_format))
}

/// Format a completion timestamp in local time
pub fn format_completed_at(completed_at: &DateTime<Utc>, format: &str) -> String {
    completed_at.with_timezone(&Local).format(format).to_string()
}
