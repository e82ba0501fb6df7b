//! Edit-entry screen.

use tracing::{error, info};

use super::EDIT_SAVE_FAILED_ALERT;
use crate::domain::{ClientSession, EntryId, Navigation, Screen};

/// View state of the edit screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryEditState {
    pub id: Option<EntryId>,
    pub content: String,
    pub loading: bool,
    pub busy: bool,
    pub alert: Option<String>,
}

pub struct EntryEditController {
    session: ClientSession,
    state: EntryEditState,
}

impl EntryEditController {
    /// Controller for the entry named by the navigation parameter, if any.
    pub fn new(session: ClientSession, id: Option<EntryId>) -> Self {
        Self {
            session,
            state: EntryEditState {
                id,
                content: String::new(),
                loading: true,
                busy: false,
                alert: None,
            },
        }
    }

    /// Controller for an already-loaded screen carrying the user's edits.
    pub fn with_draft(session: ClientSession, id: Option<EntryId>, content: String) -> Self {
        let mut controller = Self::new(session, id);
        controller.state.content = content;
        controller.state.loading = false;
        controller
    }

    pub fn state(&self) -> &EntryEditState {
        &self.state
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.state.content = content.into();
    }

    /// Load the entry's content.
    ///
    /// Without an id nothing happens and the screen keeps loading. Without a
    /// session this navigates to auth. A failed fetch is logged and leaves the
    /// editor empty.
    pub async fn on_mount(&mut self) -> Navigation {
        let Some(id) = self.state.id.clone() else {
            return Navigation::Stay;
        };
        if self.session.current_user().await.is_none() {
            return Navigation::NavigateTo(Screen::Auth);
        }

        let fetched = match self.session.require_token() {
            Ok(token) => self.session.entries().fetch_content(token, &id).await,
            Err(err) => Err(err),
        };
        match fetched {
            Ok(content) => self.state.content = content,
            Err(err) => error!(error = %err, entry_id = %id, "error fetching entry"),
        }
        self.state.loading = false;
        Navigation::Stay
    }

    /// Persist the edited content, then return to the list.
    pub async fn save(&mut self) -> Navigation {
        self.state.busy = true;
        self.state.alert = None;
        let result = match (self.state.id.clone(), self.session.require_token()) {
            (Some(id), Ok(token)) => self
                .session
                .entries()
                .update_content(token, &id, &self.state.content)
                .await
                .map(|()| id)
                .map_err(|err| err.to_string()),
            (None, _) => Err("missing entry id".to_owned()),
            (Some(_), Err(err)) => Err(err.to_string()),
        };
        self.state.busy = false;

        match result {
            Ok(id) => {
                info!(entry_id = %id, "entry updated");
                Navigation::NavigateTo(Screen::EntryList)
            }
            Err(reason) => {
                error!(error = %reason, "error saving entry");
                self.state.alert = Some(EDIT_SAVE_FAILED_ALERT.to_owned());
                Navigation::Stay
            }
        }
    }

    /// Discard local edits.
    pub fn cancel(&self) -> Navigation {
        Navigation::NavigateTo(Screen::EntryList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::controllers::test_support::{
        ENTRY_A, TOKEN, session, signed_in_identity, signed_out_identity,
    };
    use crate::domain::ports::{EntryRepositoryError, MockEntryRepository, MockIdentityProvider};

    fn entry_id() -> EntryId {
        EntryId::new(ENTRY_A).expect("fixture id")
    }

    #[tokio::test]
    async fn mount_loads_the_entry_content() {
        let mut repo = MockEntryRepository::new();
        repo.expect_fetch_content()
            .withf(|token, id| token.expose() == TOKEN && *id == entry_id())
            .times(1)
            .returning(|_, _| Ok("A".to_owned()));
        let mut edit = EntryEditController::new(session(signed_in_identity(), repo), Some(entry_id()));

        assert_eq!(edit.on_mount().await, Navigation::Stay);
        assert_eq!(edit.state().content, "A");
        assert!(!edit.state().loading);
    }

    #[tokio::test]
    async fn mount_without_session_navigates_to_auth() {
        let mut repo = MockEntryRepository::new();
        repo.expect_fetch_content().times(0);
        let mut edit =
            EntryEditController::new(session(signed_out_identity(), repo), Some(entry_id()));

        assert_eq!(edit.on_mount().await, Navigation::NavigateTo(Screen::Auth));
    }

    #[tokio::test]
    async fn mount_without_id_waits() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_user().times(0);
        let mut edit = EntryEditController::new(session(identity, MockEntryRepository::new()), None);

        assert_eq!(edit.on_mount().await, Navigation::Stay);
        assert!(edit.state().loading);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_the_editor_blank() {
        let mut repo = MockEntryRepository::new();
        repo.expect_fetch_content()
            .returning(|_, _| Err(EntryRepositoryError::not_found(ENTRY_A)));
        let mut edit = EntryEditController::new(session(signed_in_identity(), repo), Some(entry_id()));

        assert_eq!(edit.on_mount().await, Navigation::Stay);
        assert_eq!(edit.state().content, "");
        assert!(!edit.state().loading);
        assert!(edit.state().alert.is_none());
    }

    #[tokio::test]
    async fn editing_a_to_b_updates_that_entry_then_returns_to_the_list() {
        let mut repo = MockEntryRepository::new();
        repo.expect_fetch_content().returning(|_, _| Ok("A".to_owned()));
        repo.expect_update_content()
            .withf(|_, id, content| *id == entry_id() && content == "B")
            .times(1)
            .returning(|_, _, _| Ok(()));
        let mut edit = EntryEditController::new(session(signed_in_identity(), repo), Some(entry_id()));
        edit.on_mount().await;

        edit.set_content("B");
        assert_eq!(edit.save().await, Navigation::NavigateTo(Screen::EntryList));
        assert!(!edit.state().busy);
    }

    #[tokio::test]
    async fn failed_update_alerts_and_stays() {
        let mut repo = MockEntryRepository::new();
        repo.expect_update_content()
            .returning(|_, _, _| Err(EntryRepositoryError::transport("timeout")));
        let mut edit = EntryEditController::with_draft(
            session(signed_in_identity(), repo),
            Some(entry_id()),
            "draft".to_owned(),
        );

        assert_eq!(edit.save().await, Navigation::Stay);
        assert_eq!(edit.state().alert.as_deref(), Some(EDIT_SAVE_FAILED_ALERT));
        assert_eq!(edit.state().content, "draft");
        assert!(!edit.state().busy);
    }

    #[tokio::test]
    async fn save_without_id_alerts() {
        let mut repo = MockEntryRepository::new();
        repo.expect_update_content().times(0);
        let mut edit = EntryEditController::with_draft(
            session(MockIdentityProvider::new(), repo),
            None,
            "draft".to_owned(),
        );

        assert_eq!(edit.save().await, Navigation::Stay);
        assert!(edit.state().alert.is_some());
    }

    #[test]
    fn cancel_discards_and_returns_to_list() {
        let edit = EntryEditController::with_draft(
            session(MockIdentityProvider::new(), MockEntryRepository::new()),
            Some(entry_id()),
            "unsaved".to_owned(),
        );
        assert_eq!(edit.cancel(), Navigation::NavigateTo(Screen::EntryList));
    }
}
