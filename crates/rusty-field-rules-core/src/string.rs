//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static SPECIAL_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());

/// True when the value is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True when the value contains anything outside `[A-Za-z0-9_]`
///
/// The empty string has nothing to object to, so it returns `false`.
pub fn has_special_characters(s: &str) -> bool {
    SPECIAL_CHAR_REGEX.is_match(s)
}

/// True when the value starts or ends with whitespace
pub fn has_whitespace_edges(s: &str) -> bool {
    s != s.trim()
}

/// Length in characters, not bytes
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Validates string length against an inclusive range
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = char_length(s);
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(length_message(min, max))
    }
}

pub fn length_message(min: usize, max: usize) -> String {
    format!("Length must be between {} and {} characters.", min, max)
}
