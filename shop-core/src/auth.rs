//! Admin credential rules
//!
//! A single shared credential compared for equality, exactly as the shop
//! has always worked. Not hardened on purpose; this is a local,
//! single-user dashboard credential, and the persisted format is a raw
//! string.

use shared::error::ErrorCode;
use shared::{AppError, AppResult};

/// Minimum length for a new admin password
pub const MIN_PASSWORD_LEN: usize = 4;

/// Compare a login attempt against the stored credential
pub fn verify(stored: &str, attempt: &str) -> bool {
    stored == attempt
}

/// Validate a password change request
///
/// Rules, checked in order: the current password must match, the new
/// password must be at least [`MIN_PASSWORD_LEN`] characters, and the
/// confirmation must equal the new password. Returns the accepted new
/// password; any failure leaves the caller's stored credential unchanged.
pub fn validate_change<'a>(
    stored: &str,
    current: &str,
    new: &'a str,
    confirm: &str,
) -> AppResult<&'a str> {
    if !verify(stored, current) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort)
            .with_detail("min_length", MIN_PASSWORD_LEN as u64));
    }
    if new != confirm {
        return Err(AppError::new(ErrorCode::PasswordMismatch));
    }
    Ok(new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_plain_equality() {
        assert!(verify("admin", "admin"));
        assert!(!verify("admin", "Admin"));
    }

    #[test]
    fn test_change_happy_path() {
        assert_eq!(
            validate_change("admin", "admin", "s3cret", "s3cret").unwrap(),
            "s3cret"
        );
    }

    #[test]
    fn test_change_wrong_current() {
        let err = validate_change("admin", "nope", "s3cret", "s3cret").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }

    #[test]
    fn test_change_too_short() {
        let err = validate_change("admin", "admin", "abc", "abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordTooShort);
    }

    #[test]
    fn test_change_confirmation_mismatch() {
        let err = validate_change("admin", "admin", "s3cret", "s3cre7").unwrap_err();
        assert_eq!(err.code, ErrorCode::PasswordMismatch);
    }
}
