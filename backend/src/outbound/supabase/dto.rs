//! DTOs for the hosted backend's auth and REST payloads.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AccessToken, AuthSession, AuthenticatedUser, EntryId, JournalEntry, UserId};

#[derive(Debug, Serialize)]
pub(super) struct CredentialsDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: String,
    #[serde(default)]
    pub(super) email: Option<String>,
}

impl UserDto {
    pub(super) fn into_domain(self) -> Result<AuthenticatedUser, String> {
        let id = UserId::new(&self.id).map_err(|err| format!("user id {:?}: {err}", self.id))?;
        Ok(AuthenticatedUser::new(id, self.email.filter(|e| !e.is_empty())))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponseDto {
    pub(super) access_token: String,
    pub(super) user: UserDto,
}

impl TokenResponseDto {
    pub(super) fn into_domain(self) -> Result<AuthSession, String> {
        if self.access_token.is_empty() {
            return Err("empty access_token".to_owned());
        }
        Ok(AuthSession {
            access_token: AccessToken::new(self.access_token),
            user: self.user.into_domain()?,
        })
    }
}

/// Error body shapes: the auth API uses `msg` or `error_description`, the data
/// API uses `message`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorBodyDto {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

impl ErrorBodyDto {
    /// The first present, non-blank message field.
    pub(super) fn into_message(self) -> Option<String> {
        [self.msg, self.error_description, self.message]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// One `journal_entries` row. A `null` or missing `content` reads as empty.
#[derive(Debug, Deserialize)]
pub(super) struct EntryRowDto {
    id: EntryId,
    user_id: String,
    #[serde(default)]
    content: Option<String>,
    created_at: DateTime<Utc>,
}

impl EntryRowDto {
    pub(super) fn into_domain(self) -> Result<JournalEntry, String> {
        let user_id = UserId::new(&self.user_id)
            .map_err(|err| format!("entry {} user_id: {err}", self.id))?;
        Ok(JournalEntry {
            id: self.id,
            user_id,
            content: self.content.unwrap_or_default(),
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentRowDto {
    #[serde(default)]
    content: Option<String>,
}

impl ContentRowDto {
    pub(super) fn into_content(self) -> String {
        self.content.unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ContentPatchDto<'a> {
    pub(super) content: &'a str,
}
