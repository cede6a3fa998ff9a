// Date utility functions
// Form fields carry dates as "m/d/yyyy" strings; these helpers convert them.

use chrono::{NaiveDate, NaiveTime};
use std::fmt::Write;

/// Format used by the date pickers on the event form.
pub const FORM_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Format used by the time pickers (`7:00pm`).
pub const FORM_TIME_FORMAT: &str = "%-I:%M%P";

/// Parse a date field value. Accepts `m/d/yyyy` (zero padding optional) and
/// ISO `yyyy-mm-dd`. Blank or malformed values yield `None`.
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

pub fn format_form_date(date: NaiveDate) -> String {
    date.format(FORM_DATE_FORMAT).to_string()
}

/// Format a date with a user-supplied pattern. `None` if chrono rejects it.
pub fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Format a time with a user-supplied pattern. `None` if chrono rejects it.
pub fn try_format_time(time: NaiveTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", time.format(pattern)).ok()?;
    Some(out)
}

/// Parse a 24-hour `HH:MM` value as stored in settings.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.trim().split_once(':')?;
    let hour = hour.parse::<u32>().ok()?;
    let minute = minute.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
