//! Account Service Client
//!
//! Client for the hosted account/session capability this application
//! authenticates against. The service owns accounts, credentials, and
//! sessions; this crate only speaks its REST protocol.
//!
//! Structure:
//! - `service` - the `AccountService` trait (the capability surface)
//! - `http` - `reqwest`-based implementation of the trait
//! - `model` - service-issued entities (`Account`, `Session`)
//! - `dto` - wire request/response shapes
//! - `config` - endpoint/project configuration
//! - `error` - `ServiceError` and result alias

pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod model;
pub mod service;

// Re-exports for convenience
pub use config::AccountConfig;
pub use error::{ServiceError, ServiceResult};
pub use http::HttpAccountService;
pub use model::{Account, Session};
pub use service::AccountService;
