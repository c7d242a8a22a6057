//! Request field validation helpers

use crate::error::{AppError, Result};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate an email address shape: one `@` with something on both sides
/// and a dot in the domain. Full RFC parsing is the mail system's problem.
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Validate the registration payload fields
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if email.trim().is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    if !validate_email(email) {
        return Err(AppError::validation("Email is not valid"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Validate a feedback rating is on the 1-5 scale
pub fn validate_rating(rating: u8) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::validation("Rating must be between 1 and 5"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("asha@example.com"));
        assert!(validate_email("a.b+tag@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("asha@nodot"));
        assert!(!validate_email("asha@.com"));
    }

    #[test]
    fn password_boundary_is_six_characters() {
        assert!(validate_registration("A", "a@b.com", "12345").is_err());
        assert!(validate_registration("A", "a@b.com", "123456").is_ok());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }
}
