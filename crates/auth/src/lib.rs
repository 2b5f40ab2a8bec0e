//! Auth (Authentication Workflow) Module
//!
//! Clean Architecture structure:
//! - `domain/` - credentials, value objects, submission modes
//! - `application/` - use cases, submission workflow, session coordinator
//!
//! ## Features
//! - Email/password sign-up and sign-in against the hosted Account Service
//! - Local-first validation: input errors never reach the network
//! - Explicit session state published over a watch channel (no ambient flag)
//! - `{sign_up, sign_in}` capability pair handed out by a single provider
//!
//! ## Failure Model
//! Every submission resolves to an [`AuthOutcome`]: `None` on success,
//! otherwise a user-facing reason. Input errors are worded locally; remote
//! errors surface the service's own message, with a per-operation fallback
//! when the service supplied none. Nothing retries, nothing panics.

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::context::{AuthContext, AuthProvider};
pub use application::session::{SessionCoordinator, SessionState};
pub use application::workflow::AuthSessionWorkflow;
pub use domain::credentials::Credentials;
pub use domain::mode::Mode;
pub use error::{AuthError, AuthOutcome, AuthResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
