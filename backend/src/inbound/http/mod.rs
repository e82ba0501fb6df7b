//! HTTP inbound adapter serving the journal screens as HTML pages.
//!
//! Each handler builds the screen's controller for one request, runs the
//! lifecycle hook or operation, then either renders the view or follows the
//! controller's navigation with a `303 See Other`.

pub mod auth;
pub mod dashboard;
pub mod edit_entry;
pub mod error;
pub mod health;
pub mod landing;
pub mod new_entry;
mod respond;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

use actix_web::web;

/// Register every screen handler. Session middleware and [`state::HttpState`]
/// are supplied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(landing::landing)
        .service(auth::auth_page)
        .service(auth::submit_auth)
        .service(auth::toggle_auth_mode)
        .service(dashboard::dashboard)
        .service(dashboard::delete_entry)
        .service(dashboard::logout)
        .service(new_entry::new_entry_page)
        .service(new_entry::create_entry)
        .service(edit_entry::edit_entry_page)
        .service(edit_entry::update_entry);
}
