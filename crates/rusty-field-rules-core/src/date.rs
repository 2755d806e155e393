//! Date parsing and range checks

use chrono::{DateTime, NaiveDate, NaiveDateTime};

// Tried in order after RFC 3339
const BUILTIN_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d-%b-%Y",
    "%b %d, %Y",
];

/// Parses a field value into a date-time
///
/// Accepts RFC 3339, ISO date-times without offset, plain `YYYY-MM-DD`, the usual
/// date-picker layouts (`01/10/2024`, `2024/01/10`, `10-Jan-2024`, `Jan 10, 2024`),
/// and then any caller-supplied chrono formats (date-only formats are read as midnight).
pub fn parse_date<S: AsRef<str>>(value: &str, extra_formats: &[S]) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    BUILTIN_FORMATS
        .iter()
        .find_map(|format| parse_with_format(value, format))
        .or_else(|| {
            extra_formats
                .iter()
                .find_map(|format| parse_with_format(value, format.as_ref()))
        })
}

fn parse_with_format(value: &str, format: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, format)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Outcome of comparing two date fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// Start is on or before end
    Ordered,
    /// Start is after end
    Reversed,
    /// One or both values could not be read as dates
    Unparsable,
}

pub fn compare_dates<S: AsRef<str>>(start: &str, end: &str, extra_formats: &[S]) -> DateOrder {
    match (parse_date(start, extra_formats), parse_date(end, extra_formats)) {
        (Some(s), Some(e)) if s > e => DateOrder::Reversed,
        (Some(_), Some(_)) => DateOrder::Ordered,
        _ => DateOrder::Unparsable,
    }
}

/// False only when both dates parse and the start falls after the end
pub fn is_date_range_ordered<S: AsRef<str>>(start: &str, end: &str, extra_formats: &[S]) -> bool {
    compare_dates(start, end, extra_formats) != DateOrder::Reversed
}
