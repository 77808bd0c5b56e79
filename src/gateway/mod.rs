//! Authentication gateway contract and its request/response payloads.

pub mod mock;

use crate::error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credentials sent to the gateway for one login attempt.
///
/// Built per attempt from the trimmed email and the raw password, and
/// discarded after the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Payload for one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Successful registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

/// External boundary performing the actual credential checks.
///
/// Implementations report failures through the closed [`GatewayError`] set;
/// the use cases map every variant into a UI-facing result, so nothing here
/// leaks past the use-case boundary.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session token.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidCredentials`] for unknown or
    /// mismatched credentials, [`GatewayError::AccountLocked`] for locked
    /// accounts, [`GatewayError::Network`] for transport failures.
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, GatewayError>;

    /// Create a new account.
    ///
    /// # Errors
    /// Returns [`GatewayError::EmailTaken`] when the email is already
    /// registered, [`GatewayError::Network`] for transport failures.
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, GatewayError>;
}
