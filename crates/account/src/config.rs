//! Account Service Configuration
//!
//! Endpoint and project identity for the hosted service. The embedding
//! application decides where these come from; `from_env` covers the common
//! case of environment variables (loading a `.env` file is the
//! application's concern, not this crate's).

use std::env;
use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

/// Environment variable holding the service base URL
pub const ENV_ENDPOINT: &str = "ACCOUNT_SERVICE_ENDPOINT";

/// Environment variable holding the project identifier
pub const ENV_PROJECT_ID: &str = "ACCOUNT_SERVICE_PROJECT_ID";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Account Service client configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Base URL of the hosted service (no trailing slash)
    pub endpoint: String,
    /// Project this client acts for (sent as a header on every request)
    pub project_id: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl AccountConfig {
    /// Create a validated configuration
    ///
    /// A trailing slash on the endpoint is stripped so path joining stays
    /// uniform.
    pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>) -> AppResult<Self> {
        let mut endpoint = endpoint.into();
        let project_id = project_id.into();

        if endpoint.trim().is_empty() {
            return Err(AppError::bad_request("Account service endpoint cannot be empty"));
        }
        if project_id.trim().is_empty() {
            return Err(AppError::bad_request("Account service project id cannot be empty"));
        }

        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        Ok(Self {
            endpoint,
            project_id,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Load from [`ENV_ENDPOINT`] and [`ENV_PROJECT_ID`]
    pub fn from_env() -> AppResult<Self> {
        let endpoint = env::var(ENV_ENDPOINT).map_err(|e| {
            AppError::from(e).with_action("Set ACCOUNT_SERVICE_ENDPOINT to the service base URL")
        })?;
        let project_id = env::var(ENV_PROJECT_ID).map_err(|e| {
            AppError::from(e).with_action("Set ACCOUNT_SERVICE_PROJECT_ID to the project id")
        })?;

        Self::new(endpoint, project_id)
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
