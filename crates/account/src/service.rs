//! Account Service Trait
//!
//! The external capability this application authenticates against.
//! Production uses the REST implementation in [`crate::http`]; tests
//! substitute scripted doubles.

use kernel::id::AccountId;

use crate::error::ServiceResult;
use crate::model::{Account, Session};

/// Hosted account/session capability
#[trait_variant::make(AccountService: Send)]
pub trait LocalAccountService {
    /// Create a new account
    ///
    /// The id is generated on the client and submitted with the request;
    /// the service echoes back its own canonical record.
    async fn create_account(
        &self,
        account_id: &AccountId,
        email: &str,
        password: &str,
    ) -> ServiceResult<Account>;

    /// Create an email/password session for an existing account
    async fn create_email_session(&self, email: &str, password: &str) -> ServiceResult<Session>;
}
