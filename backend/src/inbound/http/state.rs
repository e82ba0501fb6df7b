//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use chrono::FixedOffset;

use super::session::SessionContext;
use crate::domain::{ClientSession, Error, JournalClient, PostCreateTarget};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub client: JournalClient,
    /// Where a successful create navigates.
    pub after_create: PostCreateTarget,
    /// Offset used when rendering `created_at`.
    pub display_offset: FixedOffset,
}

impl HttpState {
    /// Construct state from the shared backend client and display settings.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use chrono::FixedOffset;
    /// use journal::domain::{JournalClient, PostCreateTarget};
    /// use journal::inbound::http::state::HttpState;
    /// use journal::outbound::memory::InMemoryBackend;
    ///
    /// let backend = Arc::new(InMemoryBackend::new());
    /// let state = HttpState::new(
    ///     JournalClient::new(backend.clone(), backend),
    ///     PostCreateTarget::Landing,
    ///     FixedOffset::east_opt(0).unwrap(),
    /// );
    /// let _client = state.client.clone();
    /// ```
    pub fn new(
        client: JournalClient,
        after_create: PostCreateTarget,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            client,
            after_create,
            display_offset,
        }
    }

    /// Bind the backend client to the browser session's token.
    pub fn client_session(&self, session: &SessionContext) -> Result<ClientSession, Error> {
        Ok(self.client.session(session.access_token()?))
    }
}
