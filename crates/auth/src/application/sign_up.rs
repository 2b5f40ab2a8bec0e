//! Sign Up Use Case
//!
//! Creates the remote account, then signs straight in. A session failure
//! after the account exists is surfaced as-is: the account stays behind
//! with no session and no compensating call is made.

use std::sync::Arc;

use account::model::Session;
use account::service::AccountService;
use kernel::id::AccountId;

use crate::application::sign_in::SignInUseCase;
use crate::domain::mode::Mode;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up use case
pub struct SignUpUseCase<S>
where
    S: AccountService,
{
    service: Arc<S>,
    sign_in: SignInUseCase<S>,
}

impl<S> SignUpUseCase<S>
where
    S: AccountService,
{
    pub fn new(service: Arc<S>) -> Self {
        Self {
            sign_in: SignInUseCase::new(service.clone()),
            service,
        }
    }

    pub async fn execute(&self, email: &Email, password: &str) -> AuthResult<Session> {
        let account_id = AccountId::new();

        let account = self
            .service
            .create_account(&account_id, email.as_str(), password)
            .await
            .map_err(|e| AuthError::service(Mode::SignUp, e))?;

        tracing::info!(
            account_id = %account.id,
            email = %email,
            "Account created"
        );

        self.sign_in.execute(email, password).await
    }
}
