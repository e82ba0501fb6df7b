//! Reqwest-backed adapter for a Supabase-compatible hosted backend.
//!
//! This adapter owns transport details only: endpoint layout, credential
//! headers, timeout and HTTP error mapping, and JSON decoding into domain
//! records. Row ownership is enforced by the backend's access policies.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{
    ContentPatchDto, ContentRowDto, CredentialsDto, EntryRowDto, ErrorBodyDto, TokenResponseDto,
    UserDto,
};
use crate::domain::ports::{
    EntryRepository, EntryRepositoryError, IdentityError, IdentityProvider,
};
use crate::domain::{
    AccessToken, AuthSession, AuthenticatedUser, Credentials, EntryId, JournalEntry, NewEntry,
    UserId,
};

const ENTRIES_PATH: &str = "/rest/v1/journal_entries";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for the hosted backend's auth (`/auth/v1`) and data (`/rest/v1`)
/// APIs. Implements both driven ports.
pub struct SupabaseClient {
    client: Client,
    base_url: Url,
    anon_key: String,
}

impl SupabaseClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let client = SupabaseClient::new(base_url, "anon-key", timeout)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{path}", self.base_url.path().trim_end_matches('/'));
        url.set_path(&joined);
        url
    }

    /// Request carrying the project key, plus the user's bearer token when
    /// one is given.
    fn request(&self, method: Method, path: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let bearer = token.map_or(self.anon_key.as_str(), AccessToken::expose);
        self.client
            .request(method, self.endpoint(path))
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(bearer)
    }
}

/// Status plus raw body of a completed exchange.
struct Reply {
    status: StatusCode,
    body: Vec<u8>,
}

async fn send(builder: RequestBuilder) -> Result<Reply, reqwest::Error> {
    let response = builder.send().await?;
    let status = response.status();
    let body = response.bytes().await?.to_vec();
    Ok(Reply { status, body })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, String> {
    serde_json::from_slice(body).map_err(|error| format!("invalid JSON payload: {error}"))
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn current_user(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AuthenticatedUser>, IdentityError> {
        let reply = send(self.request(Method::GET, "/auth/v1/user", Some(token)))
            .await
            .map_err(map_identity_transport)?;
        match reply.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!(status = reply.status.as_u16(), "session token not honoured");
                Ok(None)
            }
            status if status.is_success() => decode::<UserDto>(&reply.body)
                .and_then(UserDto::into_domain)
                .map(Some)
                .map_err(IdentityError::decode),
            status => Err(map_identity_status(status, &reply.body)),
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), IdentityError> {
        let payload = CredentialsDto {
            email: credentials.email(),
            password: credentials.password(),
        };
        let reply = send(
            self.request(Method::POST, "/auth/v1/signup", None)
                .json(&payload),
        )
        .await
        .map_err(map_identity_transport)?;
        if !reply.status.is_success() {
            return Err(map_identity_status(reply.status, &reply.body));
        }
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, IdentityError> {
        let payload = CredentialsDto {
            email: credentials.email(),
            password: credentials.password(),
        };
        let reply = send(
            self.request(Method::POST, "/auth/v1/token", None)
                .query(&[("grant_type", "password")])
                .json(&payload),
        )
        .await
        .map_err(map_identity_transport)?;
        if !reply.status.is_success() {
            return Err(map_identity_status(reply.status, &reply.body));
        }
        decode::<TokenResponseDto>(&reply.body)
            .and_then(TokenResponseDto::into_domain)
            .map_err(IdentityError::decode)
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), IdentityError> {
        let reply = send(self.request(Method::POST, "/auth/v1/logout", Some(token)))
            .await
            .map_err(map_identity_transport)?;
        if !reply.status.is_success() {
            return Err(map_identity_status(reply.status, &reply.body));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryRepository for SupabaseClient {
    async fn list_for_user(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<Vec<JournalEntry>, EntryRepositoryError> {
        let owner = format!("eq.{user_id}");
        let reply = send(
            self.request(Method::GET, ENTRIES_PATH, Some(token)).query(&[
                ("select", "*"),
                ("user_id", owner.as_str()),
                ("order", "created_at.desc"),
            ]),
        )
        .await
        .map_err(map_entry_transport)?;
        if !reply.status.is_success() {
            return Err(map_entry_status(reply.status, &reply.body));
        }
        let rows: Vec<EntryRowDto> = decode(&reply.body).map_err(EntryRepositoryError::decode)?;
        rows.into_iter()
            .map(EntryRowDto::into_domain)
            .collect::<Result<Vec<_>, _>>()
            .map_err(EntryRepositoryError::decode)
    }

    async fn fetch_content(
        &self,
        token: &AccessToken,
        id: &EntryId,
    ) -> Result<String, EntryRepositoryError> {
        let filter = format!("eq.{id}");
        let reply = send(
            self.request(Method::GET, ENTRIES_PATH, Some(token))
                .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
                .query(&[("select", "content"), ("id", filter.as_str())]),
        )
        .await
        .map_err(map_entry_transport)?;
        // PostgREST answers 406 when the filter matched zero rows or several.
        if reply.status == StatusCode::NOT_ACCEPTABLE {
            return Err(EntryRepositoryError::not_found(id.to_string()));
        }
        if !reply.status.is_success() {
            return Err(map_entry_status(reply.status, &reply.body));
        }
        decode::<ContentRowDto>(&reply.body)
            .map(ContentRowDto::into_content)
            .map_err(EntryRepositoryError::decode)
    }

    async fn insert(
        &self,
        token: &AccessToken,
        entry: &NewEntry,
    ) -> Result<(), EntryRepositoryError> {
        let reply = send(
            self.request(Method::POST, ENTRIES_PATH, Some(token))
                .header("Prefer", "return=minimal")
                .json(std::slice::from_ref(entry)),
        )
        .await
        .map_err(map_entry_transport)?;
        if !reply.status.is_success() {
            return Err(map_entry_status(reply.status, &reply.body));
        }
        Ok(())
    }

    async fn update_content(
        &self,
        token: &AccessToken,
        id: &EntryId,
        content: &str,
    ) -> Result<(), EntryRepositoryError> {
        let filter = format!("eq.{id}");
        let reply = send(
            self.request(Method::PATCH, ENTRIES_PATH, Some(token))
                .query(&[("id", filter.as_str())])
                .json(&ContentPatchDto { content }),
        )
        .await
        .map_err(map_entry_transport)?;
        if !reply.status.is_success() {
            return Err(map_entry_status(reply.status, &reply.body));
        }
        Ok(())
    }

    async fn delete(&self, token: &AccessToken, id: &EntryId) -> Result<(), EntryRepositoryError> {
        let filter = format!("eq.{id}");
        let reply = send(
            self.request(Method::DELETE, ENTRIES_PATH, Some(token))
                .query(&[("id", filter.as_str())]),
        )
        .await
        .map_err(map_entry_transport)?;
        if !reply.status.is_success() {
            return Err(map_entry_status(reply.status, &reply.body));
        }
        Ok(())
    }
}

fn map_identity_transport(error: reqwest::Error) -> IdentityError {
    IdentityError::transport(error.to_string())
}

fn map_entry_transport(error: reqwest::Error) -> EntryRepositoryError {
    EntryRepositoryError::transport(error.to_string())
}

/// Outcome of classifying a non-success status.
#[derive(Debug, PartialEq, Eq)]
enum StatusFailure {
    /// The backend refused the request and said why.
    Rejected(String),
    /// Anything else: gateway errors, outages, unexplained refusals.
    Unavailable(String),
}

fn classify_status(status: StatusCode, body: &[u8]) -> StatusFailure {
    let message = serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(ErrorBodyDto::into_message);
    match message {
        Some(message) if status.is_client_error() => StatusFailure::Rejected(message),
        _ => {
            let preview = body_preview(body);
            if preview.is_empty() {
                StatusFailure::Unavailable(format!("status {}", status.as_u16()))
            } else {
                StatusFailure::Unavailable(format!("status {}: {preview}", status.as_u16()))
            }
        }
    }
}

fn map_identity_status(status: StatusCode, body: &[u8]) -> IdentityError {
    match classify_status(status, body) {
        StatusFailure::Rejected(message) => IdentityError::rejected(message),
        StatusFailure::Unavailable(message) => IdentityError::transport(message),
    }
}

fn map_entry_status(status: StatusCode, body: &[u8]) -> EntryRepositoryError {
    match classify_status(status, body) {
        StatusFailure::Rejected(message) => EntryRepositoryError::rejected(message),
        StatusFailure::Unavailable(message) => EntryRepositoryError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
#[path = "http_client_tests.rs"]
mod tests;
