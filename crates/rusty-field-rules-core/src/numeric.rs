//! Numeric validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap());

// Longest numeric prefix, the way a browser's parseFloat reads input
static LEADING_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(Infinity|[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)")
        .unwrap()
});

/// One or more ASCII digits, nothing else
pub fn is_numeric(s: &str) -> bool {
    NUMERIC_REGEX.is_match(s)
}

/// Digits, optionally followed by '.' and one or two digits
pub fn is_decimal(s: &str) -> bool {
    DECIMAL_REGEX.is_match(s)
}

/// Parses the leading numeric prefix of a value
///
/// Leading whitespace is skipped and trailing garbage is ignored, so `"12kg"`
/// reads as `12.0`. Returns `None` when the value does not start with a number.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let m = LEADING_NUMBER_REGEX.find(s.trim_start())?;
    let text = m.as_str();
    match text.trim_start_matches(['+', '-']) {
        "Infinity" if text.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => text.parse::<f64>().ok(),
    }
}

/// True when the value reads as a finite number strictly above zero
pub fn is_greater_than_zero(s: &str) -> bool {
    matches!(parse_leading_number(s), Some(n) if n.is_finite() && n > 0.0)
}
