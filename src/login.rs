//! Login use case: local validation, one gateway call, total result mapping.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::credentials::Email;
use crate::error::GatewayError;
use crate::gateway::{AuthGateway, LoginRequest};

/// Outcome of one login attempt, consumed by the UI state holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    Success(String),
    InvalidCredentials,
    AccountLocked,
    NetworkError(String),
    UnknownError(String),
}

/// Orchestrates credential validation and a single gateway call.
pub struct LoginUseCase {
    gateway: Arc<dyn AuthGateway>,
}

impl LoginUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the raw credentials and perform exactly one gateway call.
    ///
    /// Blank or malformed emails and blank passwords are rejected locally as
    /// [`LoginResult::InvalidCredentials`]; the gateway is never consulted
    /// for them. Password length is not checked here: a short password
    /// travels to the gateway and fails there like any other wrong
    /// credential. Every gateway outcome has a defined mapping, so the
    /// returned set is closed.
    pub async fn login(&self, email: &str, password: &str) -> LoginResult {
        let Ok(email) = Email::parse(email) else {
            return LoginResult::InvalidCredentials;
        };
        if password.trim().is_empty() {
            return LoginResult::InvalidCredentials;
        }

        let request = LoginRequest {
            email: email.as_str().to_string(),
            password: password.to_string(),
        };

        match self.gateway.login(request).await {
            Ok(response) => {
                debug!(email = %email, "login accepted");
                LoginResult::Success(response.token)
            }
            Err(GatewayError::AccountLocked) => {
                warn!(email = %email, "login rejected: account locked");
                LoginResult::AccountLocked
            }
            Err(GatewayError::InvalidCredentials) => {
                debug!(email = %email, "login rejected: invalid credentials");
                LoginResult::InvalidCredentials
            }
            Err(GatewayError::Network(detail)) => {
                error!(email = %email, error = %detail, "login failed: network error");
                LoginResult::NetworkError(detail)
            }
            Err(err @ (GatewayError::EmailTaken | GatewayError::Other(_))) => {
                error!(email = %email, error = %err, "login failed");
                LoginResult::UnknownError(err.to_string())
            }
        }
    }
}
