//! Long-form Spanish date formatting
//!
//! Example: "2024-03-14" -> "14 de marzo de 2024"

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

/// Text produced for values that cannot be read as a calendar date.
/// Same wording the browser uses for `new Date("garbage")`.
pub const INVALID_DATE: &str = "Invalid Date";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Parse a date-like string into a calendar date.
///
/// Accepted shapes:
/// - `2024-03-14` and `2024/03/14`
/// - `2024-03-14T10:30`, `2024-03-14T10:30:00`, `2024-03-14 10:30:00.123`
/// - RFC 3339 with an offset, e.g. `2024-03-14T10:30:00Z`
///
/// The date is taken as written; no timezone conversion is applied. Callers
/// that know the viewer's timezone should try [`parse_instant`] first.
pub fn parse_date_like(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// An RFC 3339 timestamp carrying an offset (`Z`, `-05:00`, ...).
///
/// Such text names an instant, not a calendar day; the day it falls on
/// depends on the timezone it is viewed in.
pub fn parse_instant(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).ok()
}

/// Spanish month name, lowercase. `month` is 1-based.
pub fn month_name_es(month: u32) -> Option<&'static str> {
    MONTHS_ES.get(month.checked_sub(1)? as usize).copied()
}

/// Render a date as "{day} de {month} de {year}".
pub fn format_long_es(date: NaiveDate) -> String {
    // month() is always 1..=12 for a valid NaiveDate
    let month = month_name_es(date.month()).unwrap_or_default();
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// Parse and format in one step. Unreadable input yields [`INVALID_DATE`].
pub fn format_date_like(value: &str) -> String {
    match parse_date_like(value) {
        Some(d) => format_long_es(d),
        None => INVALID_DATE.to_string(),
    }
}
