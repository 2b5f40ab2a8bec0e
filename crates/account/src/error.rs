//! Account Service Error Types
//!
//! Distinguishes failures the service itself reported from failures of the
//! exchange (network, TLS, undecodable body). The caller decides how to
//! word either for the user; `service_message` exposes the service's own
//! wording when there is one.

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Result alias for Account Service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Account Service failure
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with an error envelope
    #[error("{message}")]
    Api {
        /// Status reported by the service
        status: u16,
        /// Machine-readable error identifier (e.g. `user_already_exists`)
        code: String,
        /// Human-readable reason supplied by the service
        message: String,
    },

    /// The request never completed (connect, TLS, timeout, mid-flight abort)
    #[error("account service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but with a body this client could not decode
    #[error("account service returned an undecodable response (status {status})")]
    InvalidResponse { status: u16 },
}

impl ServiceError {
    /// The service's own human-readable reason, if it supplied one
    ///
    /// Transport and decode failures have no service wording; an empty
    /// message in the envelope counts as absent.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            ServiceError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Classify the failure for logging and triage
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Api { status, .. } => ErrorKind::from_status(*status),
            ServiceError::Transport(e) if e.is_timeout() => ErrorKind::RequestTimeout,
            ServiceError::Transport(_) => ErrorKind::ServiceUnavailable,
            ServiceError::InvalidResponse { .. } => ErrorKind::InternalServerError,
        }
    }
}
