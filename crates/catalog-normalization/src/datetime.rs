//! `date_added` coercion.
//!
//! Catalog exports mostly write dates as `September 25, 2021`, with the
//! occasional ISO or slash-separated value. Anything that does not parse to a
//! real calendar date becomes `None`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    // Month names: chrono accepts full or abbreviated names for %B, any case.
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Date-time formats whose date part is kept.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a raw `date_added` cell.
///
/// Returns `None` for empty, malformed or impossible dates. Never fails.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Calendar year and month of a date; both `None` when the date is `None`.
pub fn derive_calendar(date: Option<NaiveDate>) -> (Option<i32>, Option<u32>) {
    match date {
        Some(date) => (Some(date.year()), Some(date.month())),
        None => (None, None),
    }
}
