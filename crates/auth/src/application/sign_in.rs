//! Sign In Use Case
//!
//! Creates an email/password session on the Account Service.

use std::sync::Arc;

use account::model::Session;
use account::service::AccountService;

use crate::domain::mode::Mode;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in use case
pub struct SignInUseCase<S>
where
    S: AccountService,
{
    service: Arc<S>,
}

impl<S> SignInUseCase<S>
where
    S: AccountService,
{
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, email: &Email, password: &str) -> AuthResult<Session> {
        let session = self
            .service
            .create_email_session(email.as_str(), password)
            .await
            .map_err(|e| AuthError::service(Mode::SignIn, e))?;

        tracing::info!(
            email = %email,
            session_id = %session.id,
            "Session established"
        );

        Ok(session)
    }
}
