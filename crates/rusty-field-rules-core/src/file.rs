//! File name and extension validation

use once_cell::sync::Lazy;
use regex::Regex;

static ALNUM_FILE_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+\.[a-zA-Z0-9]+$").unwrap());

/// Extensions accepted when the caller does not supply an allow-list
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["jpg", "png", "pdf"];

/// Base name of an uploaded file
///
/// Browsers report file inputs as `C:\fakepath\name.ext`; both separators are
/// stripped.
pub fn file_base_name(raw_path: &str) -> &str {
    raw_path.rsplit(['\\', '/']).next().unwrap_or(raw_path)
}

/// Lower-cased text after the last '.'
///
/// A name without a dot yields the whole name.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

/// `name.ext` where both parts are ASCII letters and digits
pub fn is_alphanumeric_file_name(file_name: &str) -> bool {
    ALNUM_FILE_NAME_REGEX.is_match(file_name)
}

/// Case-insensitive allow-list membership of the file's extension
pub fn is_allowed_extension<S: AsRef<str>>(file_name: &str, allowed: &[S]) -> bool {
    let ext = file_extension(file_name);
    allowed.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&ext))
}
