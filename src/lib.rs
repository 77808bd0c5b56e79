//! # Market Auth (Mobile Authentication Core)
//!
//! `market-auth` is the authentication core behind the Market mobile app's
//! login and registration screens. It owns everything between raw text-field
//! input and the observable screen state; rendering and navigation live in
//! the app shell and only consume the types exported here.
//!
//! ## Components
//!
//! - **Credential value types** ([`Email`], [`Password`]): raw strings are
//!   parsed into well-formed, immutable values; invalid input never makes it
//!   past construction.
//! - **Gateway** ([`AuthGateway`]): the external boundary performing the
//!   actual credential checks. [`MockAuthGateway`] ships as the in-memory,
//!   delay-based stand-in used until the real backend lands.
//! - **Use cases** ([`LoginUseCase`], [`RegisterUseCase`]): validate input,
//!   perform exactly one gateway call, and fold every outcome into the
//!   closed [`LoginResult`] / [`RegisterResult`] sets. No failure crosses
//!   this boundary untyped.
//! - **Login flow** ([`LoginFlow`]): the screen's state holder. It owns the
//!   single [`UiState`] cell, enforces the transition table in one place,
//!   and exposes the state through a watch channel for the view layer.
//!
//! ## State machine
//!
//! `submit` drives `Idle → Loading → Success | Error`. A malformed email is
//! rejected client-side and jumps straight to `Error` without entering
//! `Loading` or touching the gateway. There is no terminal state; any
//! further `submit` re-enters `Loading`.
//!
//! ## Concurrency
//!
//! The gateway call is the only suspension point. Overlapping `submit`
//! calls race and the last response to complete wins; there is no request
//! cancellation or sequencing token. A dropped `submit` future writes
//! nothing further, so state updates stop with the screen that owned them.

pub mod credentials;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod login;
pub mod register;

pub use credentials::{Email, Password, PASSWORD_MIN_LEN};
pub use error::{GatewayError, ValidationError};
pub use flow::{LoginFlow, UiState, MSG_ACCOUNT_LOCKED, MSG_INVALID_CREDENTIALS};
pub use gateway::{
    mock::MockAuthGateway, AuthGateway, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};
pub use login::{LoginResult, LoginUseCase};
pub use register::{RegisterResult, RegisterUseCase};
