//! New-entry screen.

use tracing::{error, info};

use super::LOGIN_REQUIRED_ALERT;
use crate::domain::ports::EntryRepositoryError;
use crate::domain::{ClientSession, Navigation, NewEntry, PostCreateTarget, Screen};

/// View state of the create screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCreateState {
    pub content: String,
    pub busy: bool,
    /// Blocking alert raised by the last save attempt.
    pub alert: Option<String>,
}

pub struct EntryCreateController {
    session: ClientSession,
    after_save: PostCreateTarget,
    state: EntryCreateState,
}

impl EntryCreateController {
    pub fn new(session: ClientSession, after_save: PostCreateTarget) -> Self {
        Self {
            session,
            after_save,
            state: EntryCreateState::default(),
        }
    }

    pub fn state(&self) -> &EntryCreateState {
        &self.state
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.state.content = content.into();
    }

    /// Persist the draft as a new entry owned by the signed-in user.
    ///
    /// Whitespace-only drafts are ignored without any request.
    pub async fn save(&mut self) -> Navigation {
        if self.state.content.trim().is_empty() {
            return Navigation::Stay;
        }

        self.state.busy = true;
        self.state.alert = None;
        let navigation = self.persist().await;
        self.state.busy = false;
        navigation
    }

    async fn persist(&mut self) -> Navigation {
        let Some(user) = self.session.current_user().await else {
            self.state.alert = Some(LOGIN_REQUIRED_ALERT.to_owned());
            return Navigation::NavigateTo(Screen::Auth);
        };

        let entry = NewEntry {
            user_id: *user.id(),
            content: self.state.content.clone(),
        };
        let result = match self.session.require_token() {
            Ok(token) => self.session.entries().insert(token, &entry).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                info!(user_id = %user.id(), "entry created");
                Navigation::NavigateTo(self.after_save.screen())
            }
            Err(err) => {
                error!(error = %err, user_id = %user.id(), "error saving entry");
                self.state.alert = Some(format!("Error saving entry: {}", alert_text(&err)));
                Navigation::Stay
            }
        }
    }

    /// The screen's Back action.
    pub fn back(&self) -> Navigation {
        Navigation::NavigateTo(Screen::Landing)
    }
}

fn alert_text(error: &EntryRepositoryError) -> String {
    match error {
        EntryRepositoryError::Rejected { message } => message.clone(),
        other => other.to_string(),
    }
}
