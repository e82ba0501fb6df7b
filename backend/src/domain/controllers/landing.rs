//! Landing screen: forward signed-in users, otherwise show the call-to-action.

use crate::domain::{ClientSession, Navigation, Screen};

pub struct LandingController {
    session: ClientSession,
}

impl LandingController {
    pub fn new(session: ClientSession) -> Self {
        Self { session }
    }

    /// Navigate to the entry list when a session exists; otherwise stay and
    /// render the call-to-action. Lookup failures count as "no session".
    pub async fn on_mount(&self) -> Navigation {
        match self.session.current_user().await {
            Some(_) => Navigation::NavigateTo(Screen::EntryList),
            None => Navigation::Stay,
        }
    }

    /// The call-to-action.
    pub fn get_started(&self) -> Navigation {
        Navigation::NavigateTo(Screen::Auth)
    }
}
