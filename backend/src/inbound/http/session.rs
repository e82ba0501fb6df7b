//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: remembering the hosted backend's access token,
//! forgetting it on logout, and carrying a one-shot alert across a redirect.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{AccessToken, AuthSession, Error, UserId};

pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";
pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const FLASH_KEY: &str = "flash";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Remember a freshly opened session in the cookie.
    pub fn persist(&self, session: &AuthSession) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(ACCESS_TOKEN_KEY, session.access_token.expose())
            .and_then(|()| self.0.insert(USER_ID_KEY, session.user.id().to_string()))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Access token from the cookie, if present.
    pub fn access_token(&self) -> Result<Option<AccessToken>, Error> {
        let raw = self
            .0
            .get::<String>(ACCESS_TOKEN_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.filter(|token| !token.is_empty()).map(AccessToken::new))
    }

    /// User id recorded at sign-in, used to label handler log lines. Access
    /// decisions always re-resolve the user from the token.
    pub fn user_id(&self) -> Option<UserId> {
        match self.0.get::<String>(USER_ID_KEY) {
            Ok(Some(raw)) => match UserId::new(raw) {
                Ok(id) => Some(id),
                Err(error) => {
                    warn!("invalid user id in session cookie: {error}");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!("unreadable user id in session cookie: {error}");
                None
            }
        }
    }

    /// Drop everything and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Queue a one-shot alert for the next rendered page.
    pub fn set_flash(&self, message: &str) -> Result<(), Error> {
        self.0
            .insert(FLASH_KEY, message)
            .map_err(|error| Error::internal(format!("failed to persist flash: {error}")))
    }

    /// Take the queued alert, if any.
    pub fn take_flash(&self) -> Option<String> {
        match self.0.remove_as::<String>(FLASH_KEY) {
            Some(Ok(message)) => Some(message),
            Some(Err(raw)) => {
                warn!(raw = %raw, "discarding malformed flash message");
                None
            }
            None => None,
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
