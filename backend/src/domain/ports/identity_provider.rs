//! Driven port for the hosted identity service.
//!
//! Controllers call this port to resolve, open and close sessions without
//! knowing whether the backing adapter speaks HTTP or lives in memory.

use async_trait::async_trait;

use crate::domain::{AccessToken, AuthSession, AuthenticatedUser, Credentials};

use super::define_port_error;

define_port_error! {
    /// Failures raised by identity adapters.
    pub enum IdentityError {
        /// The service answered and refused the request; `message` is its own
        /// wording and is shown to the user verbatim.
        Rejected { message: String } => "{message}",
        /// The service could not be reached or timed out.
        Transport { message: String } => "identity service unreachable: {message}",
        /// The service answered with a body that could not be decoded.
        Decode { message: String } => "identity response could not be decoded: {message}",
    }
}

/// Port for account and session operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the user a token belongs to. An expired or unknown token is
    /// `Ok(None)`, not an error.
    async fn current_user(
        &self,
        token: &AccessToken,
    ) -> Result<Option<AuthenticatedUser>, IdentityError>;

    /// Request account creation. The account usually needs external
    /// confirmation before it can sign in.
    async fn sign_up(&self, credentials: &Credentials) -> Result<(), IdentityError>;

    /// Exchange credentials for a session.
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, IdentityError>;

    /// Revoke the session behind `token`.
    async fn sign_out(&self, token: &AccessToken) -> Result<(), IdentityError>;
}
