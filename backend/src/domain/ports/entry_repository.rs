//! Driven port for the `journal_entries` collection.
//!
//! Every call presents the caller's access token; row ownership is enforced by
//! the hosted backend, never by this application.

use async_trait::async_trait;

use crate::domain::{AccessToken, EntryId, JournalEntry, NewEntry, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by entry repository adapters.
    pub enum EntryRepositoryError {
        /// No row (or more than one row) matched a single-row read.
        NotFound { id: String } => "journal entry {id} not found",
        /// The backend refused the request; `message` is its own wording.
        Rejected { message: String } => "{message}",
        /// The backend could not be reached or timed out.
        Transport { message: String } => "entry store unreachable: {message}",
        /// The backend answered with a body that could not be decoded.
        Decode { message: String } => "entry response could not be decoded: {message}",
    }
}

/// Port for reading and writing journal entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// All entries owned by `user_id`, ordered by `created_at` descending.
    async fn list_for_user(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<Vec<JournalEntry>, EntryRepositoryError>;

    /// The `content` field of exactly one entry.
    async fn fetch_content(
        &self,
        token: &AccessToken,
        id: &EntryId,
    ) -> Result<String, EntryRepositoryError>;

    /// Insert a new entry; id and timestamp are assigned by the backend.
    async fn insert(&self, token: &AccessToken, entry: &NewEntry)
    -> Result<(), EntryRepositoryError>;

    /// Replace the content of one entry.
    async fn update_content(
        &self,
        token: &AccessToken,
        id: &EntryId,
        content: &str,
    ) -> Result<(), EntryRepositoryError>;

    /// Delete one entry.
    async fn delete(&self, token: &AccessToken, id: &EntryId) -> Result<(), EntryRepositoryError>;
}
