//! Password Strength Rules
//!
//! Sign-up passwords must satisfy length and character-class rules. Rules
//! are checked in a fixed order and the first violated rule is the only one
//! reported; the wording of each message is part of the UI contract.
//!
//! Sign-in applies only the shorter legacy minimum (accounts may predate
//! the sign-up policy), enforced by the workflow.

use thiserror::Error;

/// Minimum length for a new password
pub const MIN_SIGN_UP_LENGTH: usize = 8;

/// Minimum length accepted when signing in to an existing account
pub const MIN_SIGN_IN_LENGTH: usize = 6;

/// First violated strength rule
///
/// `Display` is the exact user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {} characters long", MIN_SIGN_UP_LENGTH)]
    TooShort,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one number")]
    MissingDigit,

    #[error("Password must contain at least one special character")]
    MissingSpecial,
}

/// Check a candidate sign-up password against the policy
///
/// Rule order: length, uppercase, lowercase, digit, special character.
/// Short-circuits on the first violation.
pub fn validate_strength(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_SIGN_UP_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }

    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(PasswordPolicyError::MissingSpecial);
    }

    Ok(())
}
