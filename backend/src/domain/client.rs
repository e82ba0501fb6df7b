//! Explicit handle on the hosted backend.
//!
//! [`JournalClient`] is built once at process start and shared by reference;
//! [`ClientSession`] pairs it with the access token of one browser session and
//! is what every controller receives in its constructor.

use std::sync::Arc;

use tracing::warn;

use super::ports::{EntryRepository, EntryRepositoryError, IdentityError, IdentityProvider};
use super::{AccessToken, AuthenticatedUser};

/// Process-wide collaborator handle bundling the identity and entry ports.
#[derive(Clone)]
pub struct JournalClient {
    identity: Arc<dyn IdentityProvider>,
    entries: Arc<dyn EntryRepository>,
}

impl JournalClient {
    pub fn new(identity: Arc<dyn IdentityProvider>, entries: Arc<dyn EntryRepository>) -> Self {
        Self { identity, entries }
    }

    /// Bind the client to one browser session.
    pub fn session(&self, token: Option<AccessToken>) -> ClientSession {
        ClientSession {
            client: self.clone(),
            token,
        }
    }

    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    pub fn entries(&self) -> &dyn EntryRepository {
        self.entries.as_ref()
    }
}

/// The collaborator as seen from one browser session.
#[derive(Clone)]
pub struct ClientSession {
    client: JournalClient,
    token: Option<AccessToken>,
}

impl ClientSession {
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn identity(&self) -> &dyn IdentityProvider {
        self.client.identity()
    }

    pub fn entries(&self) -> &dyn EntryRepository {
        self.client.entries()
    }

    /// Resolve the signed-in user.
    ///
    /// A missing token, a token the service no longer honours, and a failed
    /// lookup all mean "no identity"; lookup failures are logged.
    pub async fn current_user(&self) -> Option<AuthenticatedUser> {
        let token = self.token.as_ref()?;
        match self.client.identity.current_user(token).await {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, "current user lookup failed; treating session as signed out");
                None
            }
        }
    }

    /// Token for entry calls, or a rejection when the browser has no session.
    pub fn require_token(&self) -> Result<&AccessToken, EntryRepositoryError> {
        self.token
            .as_ref()
            .ok_or_else(|| EntryRepositoryError::rejected("not signed in"))
    }

    /// Revoke the session on the service side.
    pub async fn sign_out(&self) -> Result<(), IdentityError> {
        match self.token.as_ref() {
            Some(token) => self.client.identity.sign_out(token).await,
            None => Ok(()),
        }
    }
}
