//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        let message = match &err {
            std::env::VarError::NotPresent => "Required environment variable is not set",
            std::env::VarError::NotUnicode(_) => "Environment variable is not valid unicode",
        };
        AppError::new(ErrorKind::BadRequest, message).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_var_error_conversion() {
        let app_err: AppError = std::env::VarError::NotPresent.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
        assert!(app_err.message().contains("not set"));
        assert!(app_err.source().is_some());
    }
}
