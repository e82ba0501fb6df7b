//! Shared doubles for controller tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::domain::ports::{MockEntryRepository, MockIdentityProvider};
use crate::domain::{
    AccessToken, AuthenticatedUser, ClientSession, EntryId, JournalClient, JournalEntry, UserId,
};

pub(super) const TOKEN: &str = "session-token";

pub(super) fn user() -> AuthenticatedUser {
    AuthenticatedUser::new(
        UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id"),
        Some("ada@example.com".to_owned()),
    )
}

/// Identity double that resolves [`TOKEN`] to [`user`].
pub(super) fn signed_in_identity() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_current_user()
        .withf(|token| token.expose() == TOKEN)
        .returning(|_| Ok(Some(user())));
    identity
}

/// Identity double for an expired session.
pub(super) fn signed_out_identity() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();
    identity.expect_current_user().returning(|_| Ok(None));
    identity
}

pub(super) fn session(
    identity: MockIdentityProvider,
    entries: MockEntryRepository,
) -> ClientSession {
    JournalClient::new(Arc::new(identity), Arc::new(entries))
        .session(Some(AccessToken::new(TOKEN)))
}

pub(super) fn entry(id: &str, hour: u32, content: &str) -> JournalEntry {
    JournalEntry {
        id: EntryId::new(id).expect("fixture entry id"),
        user_id: *user().id(),
        content: content.to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2025, 6, 1, hour, 0, 0)
            .single()
            .expect("fixture timestamp"),
    }
}

pub(super) const ENTRY_A: &str = "00000000-0000-4000-8000-00000000000a";
pub(super) const ENTRY_B: &str = "00000000-0000-4000-8000-00000000000b";
pub(super) const ENTRY_C: &str = "00000000-0000-4000-8000-00000000000c";
