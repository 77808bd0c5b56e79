//! Error types shared across the crate.

use thiserror::Error;

/// Rejection produced when constructing a credential value type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("value cannot be blank")]
    Blank,
    #[error("invalid email format")]
    MalformedEmail,
    #[error("password must be at least {0} characters long")]
    PasswordTooShort(usize),
}

/// Failure reported by the authentication gateway.
///
/// The set is closed on purpose: the use cases map every variant into a
/// UI-facing result, so a new variant here forces the mapping to be revisited.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account locked")]
    AccountLocked,
    #[error("email already registered")]
    EmailTaken,
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Other(String),
}
