//! Password strength validation

/// Minimum number of characters in a strong password
pub const STRONG_PASSWORD_MIN_LENGTH: usize = 8;

/// A requirement a password can miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength,
    Digit,
    Lowercase,
    Uppercase,
    Symbol,
}

impl PasswordRequirement {
    pub fn describe(&self) -> &'static str {
        match self {
            PasswordRequirement::MinLength => "Password must be at least 8 characters",
            PasswordRequirement::Digit => "Password must contain at least one digit",
            PasswordRequirement::Lowercase => "Password must contain at least one lowercase letter",
            PasswordRequirement::Uppercase => "Password must contain at least one uppercase letter",
            PasswordRequirement::Symbol => "Password must contain at least one special character",
        }
    }
}

/// Strong password check: 8+ chars with a digit, lowercase, uppercase and a symbol
///
/// Letters and digits are ASCII classes. Anything that is not an ASCII letter or
/// digit counts as a symbol, underscore included.
///
/// Returns the first requirement that is not met.
pub fn password_strength(password: &str) -> Result<(), PasswordRequirement> {
    if password.chars().count() < STRONG_PASSWORD_MIN_LENGTH {
        return Err(PasswordRequirement::MinLength);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordRequirement::Digit);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordRequirement::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordRequirement::Uppercase);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(PasswordRequirement::Symbol);
    }
    Ok(())
}

pub fn is_strong_password(password: &str) -> bool {
    password_strength(password).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_passwords() {
        assert!(is_strong_password("Abcdef1!"));
        assert!(is_strong_password("Secure_Pass9"));
        assert!(is_strong_password("Pass 1234"));
    }

    #[test]
    fn test_weak_passwords() {
        assert_eq!(password_strength("abcdefgh"), Err(PasswordRequirement::Digit));
        assert_eq!(password_strength("ABCDEFG1"), Err(PasswordRequirement::Lowercase));
        assert_eq!(password_strength("abcdefg1"), Err(PasswordRequirement::Uppercase));
        assert_eq!(password_strength("Abcdefg1"), Err(PasswordRequirement::Symbol));
        assert_eq!(password_strength("Abc1!"), Err(PasswordRequirement::MinLength));
        assert_eq!(password_strength(""), Err(PasswordRequirement::MinLength));
    }
}
