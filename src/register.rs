//! Registration use case mirroring the login orchestration.

use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use crate::credentials::Email;
use crate::error::GatewayError;
use crate::gateway::{AuthGateway, RegisterRequest};

/// Outcome of one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterResult {
    Success(Uuid),
    InvalidEmail,
    PasswordMismatch,
    EmailAlreadyExists,
    NetworkError(String),
    UnknownError(String),
}

/// Orchestrates registration validation and a single gateway call.
pub struct RegisterUseCase {
    gateway: Arc<dyn AuthGateway>,
}

impl RegisterUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the request and perform exactly one gateway call.
    ///
    /// A malformed email and a mismatched confirmation are rejected locally;
    /// the gateway decides everything else. The forwarded request carries
    /// the trimmed email, matching what the login path sends.
    pub async fn register(&self, request: RegisterRequest) -> RegisterResult {
        let Ok(email) = Email::parse(&request.email) else {
            debug!("registration rejected: malformed email");
            return RegisterResult::InvalidEmail;
        };
        if request.password != request.confirm_password {
            debug!(email = %email, "registration rejected: password mismatch");
            return RegisterResult::PasswordMismatch;
        }

        let request = RegisterRequest {
            email: email.as_str().to_string(),
            ..request
        };

        match self.gateway.register(request).await {
            Ok(response) => {
                debug!(email = %email, user_id = %response.user_id, "registration accepted");
                RegisterResult::Success(response.user_id)
            }
            Err(GatewayError::EmailTaken) => {
                debug!(email = %email, "registration rejected: email already registered");
                RegisterResult::EmailAlreadyExists
            }
            Err(GatewayError::Network(detail)) => {
                error!(email = %email, error = %detail, "registration failed: network error");
                RegisterResult::NetworkError(detail)
            }
            Err(err) => {
                error!(email = %email, error = %err, "registration failed");
                RegisterResult::UnknownError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Password;
    use crate::gateway::mock::MockAuthGateway;

    const TEST_EMAIL: &str = "user@example.com";
    const TEST_EXISTING_EMAIL: &str = "existing@example.com";
    const TEST_PASSWORD: &str = "example123";

    fn request(email: &str, password: &str, confirm_password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    fn use_case(gateway: &Arc<MockAuthGateway>) -> RegisterUseCase {
        RegisterUseCase::new(Arc::clone(gateway) as Arc<dyn AuthGateway>)
    }

    #[tokio::test]
    async fn valid_request_returns_success() {
        let gateway = Arc::new(MockAuthGateway::new());
        let result = use_case(&gateway)
            .register(request(TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD))
            .await;

        assert!(matches!(result, RegisterResult::Success(_)));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn malformed_email_short_circuits_without_gateway_call() {
        let gateway = Arc::new(MockAuthGateway::new());
        let result = use_case(&gateway)
            .register(request("not-an-email", TEST_PASSWORD, TEST_PASSWORD))
            .await;

        assert_eq!(result, RegisterResult::InvalidEmail);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn mismatched_confirmation_short_circuits_without_gateway_call() {
        let gateway = Arc::new(MockAuthGateway::new());
        let result = use_case(&gateway)
            .register(request(TEST_EMAIL, TEST_PASSWORD, "different_password"))
            .await;

        assert_eq!(result, RegisterResult::PasswordMismatch);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn existing_email_maps_to_email_already_exists() {
        let gateway = Arc::new(MockAuthGateway::new().with_account(
            Email::parse(TEST_EXISTING_EMAIL).expect("valid email"),
            Password::parse(TEST_PASSWORD).expect("valid password"),
        ));
        let result = use_case(&gateway)
            .register(request(TEST_EXISTING_EMAIL, TEST_PASSWORD, TEST_PASSWORD))
            .await;

        assert_eq!(result, RegisterResult::EmailAlreadyExists);
    }

    #[tokio::test]
    async fn network_failure_maps_to_network_error() {
        let gateway = Arc::new(MockAuthGateway::new());
        gateway
            .fail_with(GatewayError::Network("Fake Network Error".to_string()))
            .await;
        let result = use_case(&gateway)
            .register(request(TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD))
            .await;

        assert_eq!(
            result,
            RegisterResult::NetworkError("Fake Network Error".to_string())
        );
    }

    #[tokio::test]
    async fn unclassified_failure_maps_to_unknown_error() {
        let gateway = Arc::new(MockAuthGateway::new());
        gateway
            .fail_with(GatewayError::Other("Fake Unknown Error".to_string()))
            .await;
        let result = use_case(&gateway)
            .register(request(TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD))
            .await;

        assert_eq!(
            result,
            RegisterResult::UnknownError("Fake Unknown Error".to_string())
        );
    }

    #[tokio::test]
    async fn registration_trims_the_email_before_forwarding() {
        let gateway = Arc::new(MockAuthGateway::new());
        let result = use_case(&gateway)
            .register(request("  new@example.com  ", TEST_PASSWORD, TEST_PASSWORD))
            .await;
        assert!(matches!(result, RegisterResult::Success(_)));

        // The stored account is keyed by the trimmed email.
        let again = use_case(&gateway)
            .register(request("new@example.com", TEST_PASSWORD, TEST_PASSWORD))
            .await;
        assert_eq!(again, RegisterResult::EmailAlreadyExists);
    }
}
