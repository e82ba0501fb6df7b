//! In-process stand-in for the hosted backend.
//!
//! Implements both driven ports against tokio-guarded maps so the server can
//! run without network access (`JOURNAL_BACKEND=memory`) and so integration
//! tests can drive whole flows. Ownership rules mirror the hosted backend's
//! row-level policies: reads and writes only ever see the caller's rows, and
//! writes to rows the caller does not own affect nothing.
//!
//! Tokens never expire. Each account keeps at most
//! [`MAX_SESSIONS_PER_ACCOUNT`] live tokens; signing in beyond that revokes
//! the oldest.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::ports::{
    EntryRepository, EntryRepositoryError, IdentityError, IdentityProvider,
};
use crate::domain::{
    AccessToken, AuthSession, AuthenticatedUser, Credentials, EntryId, JournalEntry, NewEntry,
    UserId, sort_newest_first,
};

const INVALID_CREDENTIALS: &str = "Invalid login credentials";
const ALREADY_REGISTERED: &str = "User already registered";
const INVALID_TOKEN: &str = "invalid JWT: unable to parse or verify signature";
/// Live tokens kept per account before the oldest is revoked.
pub const MAX_SESSIONS_PER_ACCOUNT: usize = 8;
const ROW_POLICY_VIOLATION: &str =
    "new row violates row-level security policy for table \"journal_entries\"";

struct Account {
    id: UserId,
    password: Zeroizing<String>,
    tokens: VecDeque<String>,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, AuthenticatedUser>,
    entries: Vec<JournalEntry>,
}

impl State {
    fn session_user(&self, token: &AccessToken) -> Option<&AuthenticatedUser> {
        self.sessions.get(token.expose())
    }

    fn owner(&self, token: &AccessToken) -> Result<UserId, EntryRepositoryError> {
        self.session_user(token)
            .map(|user| *user.id())
            .ok_or_else(|| EntryRepositoryError::rejected(INVALID_TOKEN))
    }
}

/// Both ports over process memory. Accounts are confirmed on sign-up.
pub struct InMemoryBackend {
    clock: Arc<dyn Clock>,
    state: Mutex<State>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Backend stamping `created_at` from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: Mutex::new(State::default()),
        }
    }
}

#[async_trait]
impl IdentityProvider for InMemoryBackend {
    async fn current_user(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AuthenticatedUser>, IdentityError> {
        Ok(self.state.lock().await.session_user(token).cloned())
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), IdentityError> {
        let mut state = self.state.lock().await;
        if state.accounts.contains_key(credentials.email()) {
            return Err(IdentityError::rejected(ALREADY_REGISTERED));
        }
        let id = UserId::random();
        state.accounts.insert(
            credentials.email().to_owned(),
            Account {
                id,
                password: Zeroizing::new(credentials.password().to_owned()),
                tokens: VecDeque::new(),
            },
        );
        debug!(user_id = %id, "account registered");
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, IdentityError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let account = match state.accounts.get_mut(credentials.email()) {
            Some(account) if account.password.as_str() == credentials.password() => account,
            _ => return Err(IdentityError::rejected(INVALID_CREDENTIALS)),
        };
        let user = AuthenticatedUser::new(account.id, Some(credentials.email().to_owned()));
        let token = AccessToken::new(Uuid::new_v4().simple().to_string());
        account.tokens.push_back(token.expose().to_owned());
        while account.tokens.len() > MAX_SESSIONS_PER_ACCOUNT {
            if let Some(oldest) = account.tokens.pop_front() {
                state.sessions.remove(&oldest);
                debug!(user_id = %account.id, "oldest session revoked");
            }
        }
        state
            .sessions
            .insert(token.expose().to_owned(), user.clone());
        Ok(AuthSession {
            access_token: token,
            user,
        })
    }

    async fn sign_out(&self, token: &AccessToken) -> Result<(), IdentityError> {
        let mut state = self.state.lock().await;
        if let Some(user) = state.sessions.remove(token.expose()) {
            if let Some(account) = state
                .accounts
                .values_mut()
                .find(|account| account.id == *user.id())
            {
                account.tokens.retain(|issued| issued != token.expose());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EntryRepository for InMemoryBackend {
    async fn list_for_user(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<Vec<JournalEntry>, EntryRepositoryError> {
        let state = self.state.lock().await;
        let owner = state.owner(token)?;
        let mut rows: Vec<JournalEntry> = state
            .entries
            .iter()
            .filter(|entry| entry.user_id == owner && entry.user_id == *user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut rows);
        Ok(rows)
    }

    async fn fetch_content(
        &self,
        token: &AccessToken,
        id: &EntryId,
    ) -> Result<String, EntryRepositoryError> {
        let state = self.state.lock().await;
        let owner = state.owner(token)?;
        state
            .entries
            .iter()
            .find(|entry| entry.id == *id && entry.user_id == owner)
            .map(|entry| entry.content.clone())
            .ok_or_else(|| EntryRepositoryError::not_found(id.to_string()))
    }

    async fn insert(
        &self,
        token: &AccessToken,
        entry: &NewEntry,
    ) -> Result<(), EntryRepositoryError> {
        let mut state = self.state.lock().await;
        if state.owner(token)? != entry.user_id {
            return Err(EntryRepositoryError::rejected(ROW_POLICY_VIOLATION));
        }
        state.entries.push(JournalEntry {
            id: EntryId::random(),
            user_id: entry.user_id,
            content: entry.content.clone(),
            created_at: self.clock.utc(),
        });
        Ok(())
    }

    async fn update_content(
        &self,
        token: &AccessToken,
        id: &EntryId,
        content: &str,
    ) -> Result<(), EntryRepositoryError> {
        let mut state = self.state.lock().await;
        let owner = state.owner(token)?;
        if let Some(entry) = state
            .entries
            .iter_mut()
            .find(|entry| entry.id == *id && entry.user_id == owner)
        {
            entry.content = content.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, token: &AccessToken, id: &EntryId) -> Result<(), EntryRepositoryError> {
        let mut state = self.state.lock().await;
        let owner = state.owner(token)?;
        state
            .entries
            .retain(|entry| !(entry.id == *id && entry.user_id == owner));
        Ok(())
    }
}
