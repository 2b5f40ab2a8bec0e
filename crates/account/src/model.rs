//! Service-Issued Entities
//!
//! What the Account Service hands back after a successful call. Ids are
//! opaque strings minted by the service (the client-generated `AccountId`
//! is only an input to account creation).

use chrono::{DateTime, Utc};

/// A remote account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Service-issued account id
    pub id: String,
    /// Email the account was registered with
    pub email: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// An authenticated session on the remote service
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Service-issued session id
    pub id: String,
    /// Account the session belongs to
    pub user_id: String,
    /// Expiry reported by the service
    pub expires_at: DateTime<Utc>,
}
