//! Auth Provider & Context
//!
//! The provider is the single top-level owner of the workflow and the
//! session coordinator. The context is the `{sign_up, sign_in}` capability
//! pair handed to the UI; it holds only a weak reference, so a capability
//! that outlives its provider fails fast with a clear outcome instead of
//! acting on a dead scope.

use std::sync::{Arc, Weak};

use account::service::AccountService;
use tokio::sync::watch;

use crate::application::session::{SessionCoordinator, SessionState};
use crate::application::workflow::AuthSessionWorkflow;
use crate::domain::mode::Mode;
use crate::error::{AuthError, AuthOutcome};

struct ProviderInner<S>
where
    S: AccountService,
{
    workflow: AuthSessionWorkflow<S>,
    coordinator: SessionCoordinator,
}

/// Top-level owner of the authentication workflow and session state
pub struct AuthProvider<S>
where
    S: AccountService,
{
    inner: Arc<ProviderInner<S>>,
}

impl<S> AuthProvider<S>
where
    S: AccountService,
{
    pub fn new(service: S) -> Self {
        let coordinator = SessionCoordinator::new();
        let workflow = AuthSessionWorkflow::new(Arc::new(service), coordinator.clone());

        Self {
            inner: Arc::new(ProviderInner {
                workflow,
                coordinator,
            }),
        }
    }

    /// Hand out the `{sign_up, sign_in}` capability pair
    pub fn context(&self) -> AuthContext<S> {
        AuthContext {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Snapshot of the current session state
    pub fn session_state(&self) -> SessionState {
        self.inner.coordinator.current()
    }

    /// Watch session state transitions (what navigation reads)
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.coordinator.subscribe()
    }
}

/// The `{sign_up, sign_in}` capability pair
///
/// Cheap to clone and hand to every screen that submits credentials.
pub struct AuthContext<S>
where
    S: AccountService,
{
    inner: Weak<ProviderInner<S>>,
}

impl<S> Clone for AuthContext<S>
where
    S: AccountService,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> AuthContext<S>
where
    S: AccountService,
{
    /// Create an account, then sign straight in
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthOutcome {
        self.submit(Mode::SignUp, email, password).await
    }

    /// Create a session for an existing account
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthOutcome {
        self.submit(Mode::SignIn, email, password).await
    }

    async fn submit(&self, mode: Mode, email: &str, password: &str) -> AuthOutcome {
        let Some(inner) = self.inner.upgrade() else {
            let error = AuthError::ProviderGone;
            error.log();
            return Some(error.to_string());
        };

        inner.workflow.submit(mode, email, password).await
    }
}
