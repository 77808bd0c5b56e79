//! Screen-facing login state holder.

use tokio::sync::watch;
use tracing::debug;

use crate::credentials::Email;
use crate::login::{LoginResult, LoginUseCase};

/// Message shown for rejected credentials, client- or gateway-side.
pub const MSG_INVALID_CREDENTIALS: &str = "Account or Password is not correct";

/// Message shown when the gateway reports a locked account.
pub const MSG_ACCOUNT_LOCKED: &str =
    "Your account has been locked, Please contact the administrator";

/// Observable state of the login screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Owns the screen's [`UiState`] and its transition rules.
///
/// [`submit`](Self::submit) drives the `Idle → Loading → Success | Error`
/// sequence; the view layer observes through [`subscribe`](Self::subscribe)
/// or polls [`state`](Self::state). There is no terminal state; any later
/// submit re-enters `Loading`.
///
/// Overlapping submits race: the last gateway response to complete
/// overwrites the state. There is no cancellation or sequencing token, so a
/// screen that allows double-taps sees whichever attempt finished last.
pub struct LoginFlow {
    use_case: LoginUseCase,
    state: watch::Sender<UiState>,
}

impl LoginFlow {
    #[must_use]
    pub fn new(use_case: LoginUseCase) -> Self {
        let (state, _) = watch::channel(UiState::Idle);
        Self { use_case, state }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Watch for state changes; receivers always see the latest value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Handle one submit event from the view layer.
    ///
    /// The email shape is pre-checked client-side: a blank or malformed
    /// email jumps straight to `Error` without entering `Loading` or
    /// touching the gateway. Everything else performs one login attempt and
    /// maps its result onto a fixed user-facing message.
    pub async fn submit(&self, email: &str, password: &str) {
        if Email::parse(email).is_err() {
            self.transition(UiState::Error(MSG_INVALID_CREDENTIALS.to_string()));
            return;
        }

        self.transition(UiState::Loading);
        let result = self.use_case.login(email, password).await;
        self.transition(state_for(result));
    }

    /// Single mutator; every transition funnels through here.
    fn transition(&self, next: UiState) {
        debug!(state = ?next, "login flow transition");
        self.state.send_replace(next);
    }
}

/// Map a login result onto the screen state and its fixed message.
fn state_for(result: LoginResult) -> UiState {
    match result {
        LoginResult::Success(_) => UiState::Success,
        LoginResult::InvalidCredentials => UiState::Error(MSG_INVALID_CREDENTIALS.to_string()),
        LoginResult::AccountLocked => UiState::Error(MSG_ACCOUNT_LOCKED.to_string()),
        LoginResult::NetworkError(detail) => UiState::Error(format!("Network Error：{detail}")),
        LoginResult::UnknownError(detail) => UiState::Error(format!("Login Error：{detail}")),
    }
}
