//! Custom garde validators
//!
//! Adapters that expose the field rules as garde `custom(...)` validators, so a
//! server-side struct deriving `garde::Validate` enforces the same rules the page
//! checks in the browser.
//!
//! ```ignore
//! use garde::Validate;
//!
//! #[derive(Validate)]
//! struct UploadForm {
//!     #[garde(custom(strong_password))]
//!     password: String,
//!     #[garde(custom(decimal_amount))]
//!     amount: String,
//!     #[garde(custom(allowed_upload))]
//!     attachment: String,
//! }
//! ```

use crate::{
    has_special_characters, is_alphanumeric_file_name, is_allowed_extension, is_decimal,
    is_numeric, is_rich_text_empty, password_strength, file_base_name,
    DEFAULT_ALLOWED_EXTENSIONS,
};

/// Validator: strong password (8+ chars, digit, lower, upper, symbol)
pub fn strong_password(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    password_strength(value).map_err(|req| garde::Error::new(req.describe()))
}

/// Validator: digits only
pub fn numeric_only(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if is_numeric(value) {
        Ok(())
    } else {
        Err(garde::Error::new("only numeric values allowed"))
    }
}

/// Validator: decimal with at most two fraction digits
pub fn decimal_amount(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if is_decimal(value) {
        Ok(())
    } else {
        Err(garde::Error::new("only decimal values up to 2 digits allowed"))
    }
}

/// Validator: letters, digits and underscore only
pub fn no_special_characters(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if has_special_characters(value) {
        Err(garde::Error::new("special characters are not allowed"))
    } else {
        Ok(())
    }
}

/// Validator: uploaded path whose base name is `alnum.alnum`
pub fn alphanumeric_file_name(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if is_alphanumeric_file_name(file_base_name(value)) {
        Ok(())
    } else {
        Err(garde::Error::new("filename must be alphanumeric"))
    }
}

/// Validator: uploaded path with a jpg, png or pdf extension
pub fn allowed_upload(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    allowed_extension(value, DEFAULT_ALLOWED_EXTENSIONS)
}

/// Validator: uploaded path with an extension from a custom allow-list
///
/// Use with garde's context: `#[garde(custom(|v, _| allowed_extension(v, &["csv"])))]`.
pub fn allowed_extension<S: AsRef<str>>(value: &str, allowed: &[S]) -> Result<(), garde::Error> {
    if is_allowed_extension(file_base_name(value), allowed) {
        Ok(())
    } else {
        Err(garde::Error::new("invalid file type"))
    }
}

/// Validator: rich-text body with visible content
pub fn rich_text_present(value: &str, _ctx: &()) -> Result<(), garde::Error> {
    if is_rich_text_empty(value) {
        Err(garde::Error::new("content cannot be empty"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_validator() {
        assert!(strong_password("Abcdef1!", &()).is_ok());
        let err = strong_password("abcdefgh", &()).unwrap_err();
        assert_eq!(err.to_string(), "Password must contain at least one digit");
    }

    #[test]
    fn test_numeric_validators() {
        assert!(numeric_only("123", &()).is_ok());
        assert!(numeric_only("12a", &()).is_err());
        assert!(decimal_amount("9.99", &()).is_ok());
        assert!(decimal_amount("9.999", &()).is_err());
    }

    #[test]
    fn test_file_validators() {
        assert!(alphanumeric_file_name(r"C:\fakepath\scan1.pdf", &()).is_ok());
        assert!(alphanumeric_file_name(r"C:\fakepath\scan 1.pdf", &()).is_err());
        assert!(allowed_upload("photo.PNG", &()).is_ok());
        assert!(allowed_upload("setup.exe", &()).is_err());
        assert!(allowed_extension("data.csv", &["csv"]).is_ok());
    }

    #[test]
    fn test_text_validators() {
        assert!(no_special_characters("user_1", &()).is_ok());
        assert!(no_special_characters("user-1", &()).is_err());
        assert!(rich_text_present("<p>hi</p>", &()).is_ok());
        assert!(rich_text_present("<p> </p>", &()).is_err());
    }
}
