//! Credentials
//!
//! The transient email/password pair of one submission. Created per
//! attempt, never persisted, and the password never reaches Debug output.

use std::fmt;

/// One submission's credential pair
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields present
    ///
    /// This is the first gate of a submission; shape and strength checks
    /// come after.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(Credentials::new("a@b.com", "secret").is_complete());
        assert!(!Credentials::new("", "secret").is_complete());
        assert!(!Credentials::new("a@b.com", "").is_complete());
        assert!(!Credentials::new("", "").is_complete());
    }

    #[test]
    fn test_debug_redaction() {
        let credentials = Credentials::new("a@b.com", "Hunter2!");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("a@b.com"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Hunter2!"));
    }
}
