//! Auth screen: sign up or sign in against the hosted identity service.

use tracing::{info, warn};

use super::{SIGN_UP_CONFIRMATION, UNEXPECTED_AUTH_ERROR};
use crate::domain::ports::IdentityError;
use crate::domain::{AuthMode, AuthSession, ClientSession, Credentials, Navigation, Screen};

/// View state of the auth screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub mode: AuthMode,
    pub busy: bool,
    /// Inline error, shown above the form.
    pub error: Option<String>,
    /// One-time notice, shown after a successful sign-up.
    pub notice: Option<String>,
}

/// What a submit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Re-render the form with the updated state.
    Stay,
    /// A session was opened; the caller must persist it before navigating.
    SignedIn(AuthSession),
}

impl AuthOutcome {
    pub fn navigation(&self) -> Navigation {
        match self {
            Self::Stay => Navigation::Stay,
            Self::SignedIn(_) => Navigation::NavigateTo(Screen::EntryList),
        }
    }
}

pub struct AuthController {
    session: ClientSession,
    state: AuthState,
}

impl AuthController {
    pub fn new(session: ClientSession, mode: AuthMode) -> Self {
        Self {
            session,
            state: AuthState {
                mode,
                ..AuthState::default()
            },
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Flip between sign-up and sign-in. Any error or notice from the other
    /// mode is cleared.
    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
        self.state.error = None;
        self.state.notice = None;
    }

    /// Submit the form in the current mode.
    ///
    /// `busy` is cleared on every exit path.
    pub async fn submit(&mut self, email: &str, password: &str) -> AuthOutcome {
        self.state.busy = true;
        self.state.error = None;
        self.state.notice = None;
        let outcome = self.dispatch(email, password).await;
        self.state.busy = false;
        outcome
    }

    async fn dispatch(&mut self, email: &str, password: &str) -> AuthOutcome {
        let credentials = match Credentials::try_from_parts(email, password) {
            Ok(credentials) => credentials,
            Err(error) => {
                self.state.error = Some(error.to_string());
                return AuthOutcome::Stay;
            }
        };

        match self.state.mode {
            AuthMode::SignUp => {
                match self.session.identity().sign_up(&credentials).await {
                    Ok(()) => {
                        info!("sign-up accepted; awaiting email confirmation");
                        self.state.notice = Some(SIGN_UP_CONFIRMATION.to_owned());
                    }
                    Err(error) => self.record_failure(error),
                }
                AuthOutcome::Stay
            }
            AuthMode::SignIn => {
                match self
                    .session
                    .identity()
                    .sign_in_with_password(&credentials)
                    .await
                {
                    Ok(session) => {
                        info!(user_id = %session.user.id(), "signed in");
                        AuthOutcome::SignedIn(session)
                    }
                    Err(error) => {
                        self.record_failure(error);
                        AuthOutcome::Stay
                    }
                }
            }
        }
    }

    fn record_failure(&mut self, error: IdentityError) {
        let message = match error {
            IdentityError::Rejected { message } => message,
            other => {
                warn!(error = %other, mode = self.state.mode.as_str(), "auth request failed");
                UNEXPECTED_AUTH_ERROR.to_owned()
            }
        };
        self.state.error = Some(message);
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
