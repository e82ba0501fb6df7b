//! Journal entry entity.
//!
//! Entries are owned and stored by the hosted backend. The application only
//! holds them for the lifetime of one rendered screen.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::IdValidationError;
use super::UserId;

/// Identifier the hosted backend assigns to an entry on insert.
///
/// The value is opaque: UUID and integer identity keys are both accepted, and
/// the only check is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntryId", into = "String")]
pub struct EntryId(String);

impl EntryId {
    /// Validate and construct an [`EntryId`].
    ///
    /// # Examples
    /// ```
    /// use journal::domain::EntryId;
    ///
    /// assert!(EntryId::new("0b6f8d1e-3c1f-4e55-9b8e-1f2f3a4b5c6d").is_ok());
    /// assert!(EntryId::new("42").is_ok());
    /// assert!(EntryId::new("").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, IdValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(IdValidationError::Empty);
        }
        Ok(Self(id))
    }

    /// A fresh UUID-shaped id, as assigned by the in-memory backend.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Wire shapes of an entry id: text keys or integer identity keys.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntryId {
    Text(String),
    Integer(i64),
}

impl TryFrom<RawEntryId> for EntryId {
    type Error = IdValidationError;

    fn try_from(value: RawEntryId) -> Result<Self, Self::Error> {
        match value {
            RawEntryId::Text(text) => Self::new(text),
            RawEntryId::Integer(number) => Self::new(number.to_string()),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntryId> for String {
    fn from(value: EntryId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EntryId {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One journal entry as returned by the hosted backend.
///
/// ## Invariants
/// - `user_id` and `created_at` are set by the backend at insert and never
///   change afterwards; only `content` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    pub user_id: UserId,
    pub content: String,
}

/// Order entries newest first by `created_at`.
///
/// The sort is stable so rows sharing a timestamp keep the order the backend
/// returned them in.
pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
