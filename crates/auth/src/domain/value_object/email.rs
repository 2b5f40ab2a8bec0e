//! Email Value Object
//!
//! Shape check only (`local@domain.tld`) - actual ownership of the address
//! is the Account Service's problem. The string is forwarded to the service
//! byte-for-byte: no trimming, no case normalization, no
//! internationalized-address support.

use kernel::error::app_error::{AppError, AppResult};
use std::str::FromStr;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if !Self::is_valid_format(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Shape check: non-whitespace segments on both sides of a single `@`,
    /// and a `.` strictly inside the domain segment
    pub fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.is_empty() {
            return false;
        }

        if domain.contains('@') {
            return false;
        }

        if local.chars().any(char::is_whitespace) || domain.chars().any(char::is_whitespace) {
            return false;
        }

        // The dot must be neither the first nor the last character of the
        // domain segment
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("USER@EXAMPLE.COM").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("bad").is_err());
        assert!(Email::new("a@@b.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user name@example.com").is_err());
        assert!(Email::new("user@exam ple.com").is_err());
    }

    #[test]
    fn test_email_dot_placement() {
        // The dot must sit strictly inside the domain segment
        assert!(Email::new("a@.com").is_err());
        assert!(Email::new("a@b.").is_err());
        assert!(Email::new("a@b.c").is_ok());
    }

    #[test]
    fn test_email_is_not_normalized() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");

        // Surrounding whitespace is rejected, not trimmed
        assert!(Email::new(" a@b.com").is_err());
        assert!(Email::new("a@b.com ").is_err());
    }
}
