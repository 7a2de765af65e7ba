//! Date formatting for values coming from page scripts

use chrono::NaiveDate;
use contracts::shared::date_format::{format_long_es, parse_date_like, parse_instant, INVALID_DATE};
use js_sys::Date;
use wasm_bindgen::{JsCast, JsValue};

/// Format a page value as "14 de marzo de 2024".
///
/// Follows `new Date(value)`: strings, epoch-millisecond numbers, `Date`
/// objects, `null` (epoch) and booleans (0 / 1 ms). Instants are shown in
/// the browser's timezone; date-only and offset-less strings keep the day as
/// written. Anything else gives "Invalid Date".
pub fn format_js_date(value: &JsValue) -> String {
    js_value_to_date(value)
        .map(format_long_es)
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// How a page value maps onto a calendar day
#[derive(Debug, Clone, PartialEq)]
enum DateSource {
    /// Day known without a timezone
    Calendar(NaiveDate),
    /// Epoch milliseconds, day depends on the browser timezone
    Instant(f64),
    Invalid,
}

/// Non-string, non-object values `new Date(..)` coerces to a number
#[derive(Debug, Clone, Copy)]
enum JsPrimitive {
    Null,
    Bool(bool),
    Number(f64),
}

fn classify_text(text: &str) -> DateSource {
    if let Some(instant) = parse_instant(text) {
        return DateSource::Instant(instant.timestamp_millis() as f64);
    }
    match parse_date_like(text) {
        Some(date) => DateSource::Calendar(date),
        None => DateSource::Invalid,
    }
}

fn classify_primitive(value: JsPrimitive) -> DateSource {
    let millis = match value {
        JsPrimitive::Null => 0.0,
        JsPrimitive::Bool(flag) => f64::from(u8::from(flag)),
        JsPrimitive::Number(millis) => millis,
    };
    if millis.is_finite() {
        DateSource::Instant(millis)
    } else {
        DateSource::Invalid
    }
}

fn js_value_to_date(value: &JsValue) -> Option<NaiveDate> {
    let source = if let Some(text) = value.as_string() {
        classify_text(&text)
    } else if value.is_null() {
        classify_primitive(JsPrimitive::Null)
    } else if let Some(flag) = value.as_bool() {
        classify_primitive(JsPrimitive::Bool(flag))
    } else if let Some(millis) = value.as_f64() {
        classify_primitive(JsPrimitive::Number(millis))
    } else {
        return value.dyn_ref::<Date>().and_then(local_calendar_date);
    };

    match source {
        DateSource::Calendar(date) => Some(date),
        DateSource::Instant(millis) => local_calendar_date(&Date::new(&JsValue::from_f64(millis))),
        DateSource::Invalid => None,
    }
}

/// Calendar date of a JS `Date` in the browser's timezone
fn local_calendar_date(date: &Date) -> Option<NaiveDate> {
    if date.get_time().is_nan() {
        return None;
    }
    calendar_date(date.get_full_year() as i32, date.get_month(), date.get_date())
}

/// `month0` is zero-based, as JS reports it
fn calendar_date(year: i32, month0: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day)
}
