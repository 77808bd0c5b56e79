//! In-memory gateway standing in for the real authentication backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

use super::{AuthGateway, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::credentials::{Email, Password};
use crate::error::GatewayError;

/// One registered account in the in-memory table.
#[derive(Debug, Clone)]
struct Account {
    password: Password,
    locked: bool,
}

/// In-memory [`AuthGateway`] with simulated latency and failure injection.
///
/// The account table is seeded through the typed constructors, so it only
/// ever holds well-formed credentials. Every call sleeps the configured
/// latency before answering, standing in for a network round trip, and an
/// injected failure (if any) is returned in place of the real outcome.
pub struct MockAuthGateway {
    accounts: Mutex<HashMap<String, Account>>,
    latency: Duration,
    forced_failure: Mutex<Option<GatewayError>>,
    calls: AtomicUsize,
}

impl MockAuthGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account that can log in.
    #[must_use]
    pub fn with_account(mut self, email: Email, password: Password) -> Self {
        self.accounts.get_mut().insert(
            email.as_str().to_string(),
            Account {
                password,
                locked: false,
            },
        );
        self
    }

    /// Seed an account whose login always reports a lock.
    #[must_use]
    pub fn with_locked_account(mut self, email: Email, password: Password) -> Self {
        self.accounts.get_mut().insert(
            email.as_str().to_string(),
            Account {
                password,
                locked: true,
            },
        );
        self
    }

    /// Simulated network delay applied to every call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every following call fail with `error` until cleared.
    pub async fn fail_with(&self, error: GatewayError) {
        *self.forced_failure.lock().await = Some(error);
    }

    /// Let calls go back to the account table.
    pub async fn clear_failure(&self) {
        *self.forced_failure.lock().await = None;
    }

    /// Number of gateway calls performed so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Sleep the configured latency and surface an injected failure, if any.
    async fn round_trip(&self) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.latency).await;
        match self.forced_failure.lock().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            latency: Duration::ZERO,
            forced_failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, GatewayError> {
        self.round_trip().await?;

        let accounts = self.accounts.lock().await;
        let account = accounts
            .get(&request.email)
            .ok_or(GatewayError::InvalidCredentials)?;

        if account.locked {
            return Err(GatewayError::AccountLocked);
        }
        if account.password.as_str() != request.password {
            return Err(GatewayError::InvalidCredentials);
        }

        debug!(email = %request.email, "mock gateway login accepted");
        Ok(LoginResponse {
            token: generate_token()?,
        })
    }

    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, GatewayError> {
        self.round_trip().await?;

        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&request.email) {
            return Err(GatewayError::EmailTaken);
        }

        // Server-side strength rules still apply to registrations that
        // arrive over the wire.
        let password = Password::parse(&request.password)
            .map_err(|err| GatewayError::Other(err.to_string()))?;

        accounts.insert(
            request.email.clone(),
            Account {
                password,
                locked: false,
            },
        );

        let user_id = Uuid::new_v4();
        debug!(email = %request.email, %user_id, "mock gateway account created");
        Ok(RegisterResponse { user_id })
    }
}

/// Issue a random session token; only ever handed to the caller.
fn generate_token() -> Result<String, GatewayError> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| GatewayError::Other(format!("failed to generate session token: {err}")))?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}
