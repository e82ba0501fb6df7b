//! Domain primitives, ports and screen controllers.
//!
//! Purpose: Define the strongly typed journal entities, the ports through
//! which the hosted backend is reached, and the per-screen controllers that
//! drive the UI. Nothing here knows about HTTP or a concrete backend.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — page-level error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - JournalEntry / NewEntry / EntryId — the one persisted entity.
//! - Credentials / AccessToken / AuthSession / AuthMode — auth primitives.
//! - Screen / Navigation / PostCreateTarget — navigation outcomes.
//! - JournalClient / ClientSession — explicit handle on the hosted backend.
//! - controllers — one controller per screen.

pub mod auth;
pub mod client;
pub mod controllers;
pub mod entry;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{AccessToken, AuthMode, AuthSession, Credentials, CredentialsValidationError};
pub use self::client::{ClientSession, JournalClient};
pub use self::entry::{EntryId, JournalEntry, NewEntry, sort_newest_first};
pub use self::error::{Error, ErrorCode};
pub use self::navigation::{Navigation, PostCreateTarget, PostCreateTargetParseError, Screen};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{AuthenticatedUser, IdValidationError, UserId};

/// Convenient page result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use journal::domain::{PageResult, Error};
///
/// fn handler() -> PageResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type PageResult<T> = Result<T, Error>;
