//! Auth Error Types
//!
//! One enum covers the whole submission failure surface. `Display` is the
//! user-facing outcome string: input errors use fixed local wording, remote
//! errors use the service's wording when it supplied any, and a generic
//! per-operation fallback otherwise.

use thiserror::Error;

use account::error::ServiceError;

use crate::domain::mode::Mode;
use crate::domain::value_object::password::{MIN_SIGN_IN_LENGTH, PasswordPolicyError};

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Submission outcome: `None` on success, otherwise the user-facing reason
pub type AuthOutcome = Option<String>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was left empty
    #[error("Please fill in all fields.")]
    MissingFields,

    /// Email failed the shape check
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Sign-up password rejected by the strength policy
    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    /// Sign-in password below the legacy minimum
    #[error("Password must be at least {} characters long", MIN_SIGN_IN_LENGTH)]
    SignInPasswordTooShort,

    /// The Account Service rejected the call, or the call never completed
    #[error("{}", outcome_message(.operation, .source))]
    Service {
        operation: Mode,
        source: ServiceError,
    },

    /// Capability invoked after its provider was dropped
    #[error("Authentication is unavailable: the auth provider has been shut down.")]
    ProviderGone,
}

fn outcome_message(operation: &Mode, source: &ServiceError) -> String {
    match source.service_message() {
        Some(message) => message.to_string(),
        None => format!("An error occurred in {operation}"),
    }
}

impl AuthError {
    /// Wrap a remote failure with the operation it belongs to
    pub fn service(operation: Mode, source: ServiceError) -> Self {
        AuthError::Service { operation, source }
    }

    /// True for errors detected before any remote call
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingFields
                | AuthError::InvalidEmail
                | AuthError::WeakPassword(_)
                | AuthError::SignInPasswordTooShort
        )
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Service { operation, source } => {
                tracing::warn!(
                    operation = %operation,
                    kind = %source.kind(),
                    error = %source,
                    "Account service call failed"
                );
            }
            AuthError::ProviderGone => {
                tracing::warn!("Auth capability used after provider shutdown");
            }
            _ => {
                tracing::debug!(error = %self, "Submission rejected locally");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(message: &str) -> ServiceError {
        ServiceError::Api {
            status: 401,
            code: "user_invalid_credentials".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            AuthError::MissingFields.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            AuthError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            AuthError::SignInPasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_weak_password_is_transparent() {
        let err = AuthError::from(PasswordPolicyError::MissingUppercase);
        assert_eq!(
            err.to_string(),
            "Password must contain at least one uppercase letter"
        );
    }

    #[test]
    fn test_service_error_uses_service_wording() {
        let err = AuthError::service(
            Mode::SignIn,
            api_error("Invalid credentials. Please check the email and password."),
        );
        assert_eq!(
            err.to_string(),
            "Invalid credentials. Please check the email and password."
        );
    }

    #[test]
    fn test_service_error_fallback_per_operation() {
        let err = AuthError::service(Mode::SignUp, api_error(""));
        assert_eq!(err.to_string(), "An error occurred in signUp");

        let err = AuthError::service(
            Mode::SignIn,
            ServiceError::InvalidResponse { status: 502 },
        );
        assert_eq!(err.to_string(), "An error occurred in signIn");
    }

    #[test]
    fn test_is_input_error() {
        assert!(AuthError::MissingFields.is_input_error());
        assert!(AuthError::from(PasswordPolicyError::TooShort).is_input_error());
        assert!(!AuthError::service(Mode::SignIn, api_error("x")).is_input_error());
        assert!(!AuthError::ProviderGone.is_input_error());
    }
}
