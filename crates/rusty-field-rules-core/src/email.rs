//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with no whitespace or extra '@' in any part
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Validates the `local@domain.tld` shape
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - At least one '.' after the '@' with content on both sides of it
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
