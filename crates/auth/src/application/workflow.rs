//! Submission Workflow
//!
//! One submission runs the local checks in a fixed order, then at most two
//! strictly ordered remote calls. Submissions are independent and
//! stateless; the only cross-submission effect is the coordinator's
//! session value. Nothing here retries or rolls back.

use std::sync::Arc;

use account::model::Session;
use account::service::AccountService;

use crate::application::session::SessionCoordinator;
use crate::application::sign_in::SignInUseCase;
use crate::application::sign_up::SignUpUseCase;
use crate::domain::credentials::Credentials;
use crate::domain::mode::Mode;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::password::{MIN_SIGN_IN_LENGTH, validate_strength};
use crate::error::{AuthError, AuthOutcome, AuthResult};

/// Per-submission state machine over the two modes
pub struct AuthSessionWorkflow<S>
where
    S: AccountService,
{
    sign_up: SignUpUseCase<S>,
    sign_in: SignInUseCase<S>,
    coordinator: SessionCoordinator,
}

impl<S> AuthSessionWorkflow<S>
where
    S: AccountService,
{
    pub fn new(service: Arc<S>, coordinator: SessionCoordinator) -> Self {
        Self {
            sign_up: SignUpUseCase::new(service.clone()),
            sign_in: SignInUseCase::new(service),
            coordinator,
        }
    }

    /// Run one submission to its outcome
    ///
    /// `None` means the session was established (and the coordinator
    /// updated); `Some` carries the user-facing reason. Failures leave the
    /// session state untouched.
    pub async fn submit(&self, mode: Mode, email: &str, password: &str) -> AuthOutcome {
        match self.run(mode, email, password).await {
            Ok(session) => {
                self.coordinator.signed_in(session);
                None
            }
            Err(error) => {
                error.log();
                Some(error.to_string())
            }
        }
    }

    /// Check order: completeness, email shape, then the mode's password
    /// rule; only then the remote sequence.
    async fn run(&self, mode: Mode, email: &str, password: &str) -> AuthResult<Session> {
        let credentials = Credentials::new(email, password);

        if !credentials.is_complete() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(credentials.email.as_str()).map_err(|_| AuthError::InvalidEmail)?;

        match mode {
            Mode::SignUp => {
                validate_strength(&credentials.password)?;
                self.sign_up.execute(&email, &credentials.password).await
            }
            Mode::SignIn => {
                // Existing accounts may predate the sign-up policy; only
                // the legacy minimum applies here
                if credentials.password.chars().count() < MIN_SIGN_IN_LENGTH {
                    return Err(AuthError::SignInPasswordTooShort);
                }
                self.sign_in.execute(&email, &credentials.password).await
            }
        }
    }
}
