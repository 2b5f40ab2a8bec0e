//! HTTP Account Service
//!
//! `reqwest`-backed implementation of [`AccountService`] speaking the
//! hosted service's REST protocol. Every request carries the project
//! header; bodies are JSON both ways.

use serde::Serialize;
use serde::de::DeserializeOwned;

use kernel::id::AccountId;

use crate::config::AccountConfig;
use crate::dto::{
    AccountResponse, CreateAccountRequest, CreateSessionRequest, ErrorBody, SessionResponse,
};
use crate::error::{ServiceError, ServiceResult};
use crate::model::{Account, Session};
use crate::service::AccountService;

/// Header identifying the project on every request
pub const PROJECT_HEADER: &str = "X-Account-Project";

/// REST client for the hosted Account Service
#[derive(Debug, Clone)]
pub struct HttpAccountService {
    http: reqwest::Client,
    config: AccountConfig,
}

impl HttpAccountService {
    /// Build a client from a validated configuration
    pub fn new(config: AccountConfig) -> ServiceResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ServiceResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .header(PROJECT_HEADER, &self.config.project_id)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_response(status, &body)
    }
}

impl AccountService for HttpAccountService {
    async fn create_account(
        &self,
        account_id: &AccountId,
        email: &str,
        password: &str,
    ) -> ServiceResult<Account> {
        let user_id = account_id.to_string();
        let request = CreateAccountRequest {
            user_id: &user_id,
            email,
            password,
        };

        let response: AccountResponse = self.post("/account", &request).await?;

        tracing::debug!(account_id = %response.id, "Account service accepted account creation");

        Ok(response.into())
    }

    async fn create_email_session(&self, email: &str, password: &str) -> ServiceResult<Session> {
        let request = CreateSessionRequest { email, password };

        let response: SessionResponse = self.post("/account/sessions/email", &request).await?;

        tracing::debug!(session_id = %response.id, "Account service issued session");

        Ok(response.into())
    }
}

// ============================================================================
// Response decoding
// ============================================================================

fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ServiceResult<T> {
    if !(200..300).contains(&status) {
        return Err(decode_error(status, body));
    }

    serde_json::from_str(body).map_err(|_| ServiceError::InvalidResponse { status })
}

fn decode_error(status: u16, body: &str) -> ServiceError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(envelope) => ServiceError::Api {
            // The envelope's own code wins over the transport status
            status: envelope.code.unwrap_or(status),
            code: envelope.kind,
            message: envelope.message,
        },
        Err(_) => ServiceError::InvalidResponse { status },
    }
}
