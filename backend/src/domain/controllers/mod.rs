//! Screen controllers.
//!
//! Each controller owns the view state of one screen for the duration of a
//! request, talks to the hosted backend through a [`ClientSession`], and
//! reports an explicit [`Navigation`] from every lifecycle hook or operation.
//! Recoverable failures stay inside the controller state (inline error, alert
//! banner, empty list); nothing here returns a domain `Error`.
//!
//! [`ClientSession`]: crate::domain::ClientSession
//! [`Navigation`]: crate::domain::Navigation

mod auth;
mod entry_create;
mod entry_edit;
mod entry_list;
mod landing;
#[cfg(test)]
mod test_support;

pub use auth::{AuthController, AuthOutcome, AuthState};
pub use entry_create::{EntryCreateController, EntryCreateState};
pub use entry_edit::{EntryEditController, EntryEditState};
pub use entry_list::{EntryListController, EntryListState};
pub use landing::LandingController;

/// Fallback shown when the identity service fails in an unexpected way.
pub const UNEXPECTED_AUTH_ERROR: &str = "An unexpected error occurred.";
/// Notice shown once after a successful sign-up.
pub const SIGN_UP_CONFIRMATION: &str = "Check your email to confirm your account!";
/// Alert shown when a save is attempted without a session.
pub const LOGIN_REQUIRED_ALERT: &str = "You must be logged in to save an entry.";
/// Alert shown when an entry update fails.
pub const EDIT_SAVE_FAILED_ALERT: &str = "Failed to save entry. Please try again.";
