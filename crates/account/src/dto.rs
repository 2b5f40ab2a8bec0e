//! Wire DTOs
//!
//! Request/response shapes of the hosted service's REST protocol. The
//! service prefixes its own ids with `$` in response bodies; error bodies
//! are a `{message, code, type}` envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Account, Session};

// ============================================================================
// Requests
// ============================================================================

/// POST /account
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest<'a> {
    /// Client-generated unique id
    pub user_id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// POST /account/sessions/email
#[derive(Debug, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// ============================================================================
// Responses
// ============================================================================

/// Account record as returned by the service
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    #[serde(rename = "$id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Session record as returned by the service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
    pub expire: DateTime<Utc>,
}

/// Error envelope returned on any non-2xx status
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    /// Application-level status; usually mirrors the HTTP status
    #[serde(default)]
    pub code: Option<u16>,
    /// Machine-readable identifier, e.g. `user_already_exists`
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl From<AccountResponse> for Account {
    fn from(res: AccountResponse) -> Self {
        Self {
            id: res.id,
            email: res.email,
            created_at: res.created_at,
        }
    }
}

impl From<SessionResponse> for Session {
    fn from(res: SessionResponse) -> Self {
        Self {
            id: res.id,
            user_id: res.user_id,
            expires_at: res.expire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_request_wire_shape() {
        let req = CreateAccountRequest {
            user_id: "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            email: "user@example.com",
            password: "Aa1!aaaa",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userId"], "7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["password"], "Aa1!aaaa");
    }

    #[test]
    fn test_account_response_decodes_dollar_keys() {
        let body = r#"{
            "$id": "acc_64f1c2",
            "$createdAt": "2026-08-01T10:15:30.000+00:00",
            "email": "user@example.com"
        }"#;
        let res: AccountResponse = serde_json::from_str(body).unwrap();
        let account: Account = res.into();
        assert_eq!(account.id, "acc_64f1c2");
        assert_eq!(account.email, "user@example.com");
    }

    #[test]
    fn test_session_response_decodes() {
        let body = r#"{
            "$id": "sess_9a2b",
            "userId": "acc_64f1c2",
            "expire": "2026-09-01T10:15:30.000+00:00"
        }"#;
        let res: SessionResponse = serde_json::from_str(body).unwrap();
        let session: Session = res.into();
        assert_eq!(session.id, "sess_9a2b");
        assert_eq!(session.user_id, "acc_64f1c2");
    }

    #[test]
    fn test_error_body_decodes() {
        let body = r#"{
            "message": "A user with the same email already exists",
            "code": 409,
            "type": "user_already_exists",
            "version": "1.5.7"
        }"#;
        let err: ErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(err.message, "A user with the same email already exists");
        assert_eq!(err.code, Some(409));
        assert_eq!(err.kind, "user_already_exists");
    }

    #[test]
    fn test_error_body_tolerates_missing_fields() {
        let err: ErrorBody = serde_json::from_str(r#"{"message": "oops"}"#).unwrap();
        assert_eq!(err.message, "oops");
        assert_eq!(err.code, None);
        assert_eq!(err.kind, "");
    }
}
