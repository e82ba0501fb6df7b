//! Entry list screen ("dashboard").

use tracing::{error, info, warn};

use crate::domain::{ClientSession, EntryId, JournalEntry, Navigation, Screen, sort_newest_first};

/// View state of the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListState {
    pub loading: bool,
    pub entries: Vec<JournalEntry>,
}

impl Default for EntryListState {
    fn default() -> Self {
        Self {
            loading: true,
            entries: Vec::new(),
        }
    }
}

pub struct EntryListController {
    session: ClientSession,
    state: EntryListState,
}

impl EntryListController {
    pub fn new(session: ClientSession) -> Self {
        Self {
            session,
            state: EntryListState::default(),
        }
    }

    pub fn state(&self) -> &EntryListState {
        &self.state
    }

    /// Load the signed-in user's entries, newest first.
    ///
    /// Without a session this navigates to the auth screen. A failed fetch is
    /// logged and leaves the list empty.
    pub async fn on_mount(&mut self) -> Navigation {
        let Some(user) = self.session.current_user().await else {
            return Navigation::NavigateTo(Screen::Auth);
        };

        let fetched = match self.session.require_token() {
            Ok(token) => self.session.entries().list_for_user(token, user.id()).await,
            Err(err) => Err(err),
        };
        match fetched {
            Ok(mut entries) => {
                sort_newest_first(&mut entries);
                self.state.entries = entries;
            }
            Err(err) => {
                error!(error = %err, user_id = %user.id(), "error fetching entries");
                self.state.entries.clear();
            }
        }
        self.state.loading = false;
        Navigation::Stay
    }

    /// Delete one entry and drop it from the view without re-fetching.
    ///
    /// On failure the view is left untouched.
    pub async fn delete(&mut self, id: &EntryId) -> Navigation {
        let result = match self.session.require_token() {
            Ok(token) => self.session.entries().delete(token, id).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                info!(entry_id = %id, "entry deleted");
                self.state.entries.retain(|entry| entry.id != *id);
            }
            Err(err) => error!(error = %err, entry_id = %id, "delete failed"),
        }
        Navigation::Stay
    }

    pub fn edit(&self, entry: &JournalEntry) -> Navigation {
        Navigation::NavigateTo(Screen::EntryEdit(entry.id.clone()))
    }

    pub fn create_new(&self) -> Navigation {
        Navigation::NavigateTo(Screen::EntryCreate)
    }

    /// End the session and return to landing whatever the service says.
    pub async fn logout(&mut self) -> Navigation {
        match self.session.sign_out().await {
            Ok(()) => info!("signed out"),
            Err(err) => warn!(error = %err, "sign-out failed; leaving anyway"),
        }
        Navigation::NavigateTo(Screen::Landing)
    }
}

#[cfg(test)]
#[path = "entry_list_tests.rs"]
mod tests;
