//! Entry list handlers: list, delete and logout.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{info, warn};

use super::respond::{follow, href, page, see_other};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::controllers::EntryListController;
use crate::domain::{EntryId, PageResult};

/// Row action form carrying the entry id.
#[derive(Deserialize)]
pub struct EntryIdForm {
    #[serde(default)]
    id: String,
}

fn render(state: &HttpState, controller: &EntryListController) -> HttpResponse {
    page(views::dashboard(
        controller.state(),
        &state.display_offset,
        &href(controller.create_new()),
        |entry| href(controller.edit(entry)),
    ))
}

/// The signed-in user's entries, newest first.
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> PageResult<HttpResponse> {
    let mut controller = EntryListController::new(state.client_session(&session)?);
    if let Some(redirect) = follow(controller.on_mount().await, &session, None)? {
        return Ok(redirect);
    }
    Ok(render(&state, &controller))
}

/// Delete one entry and re-render the list without it.
#[post("/dashboard/delete")]
pub async fn delete_entry(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<EntryIdForm>,
) -> PageResult<HttpResponse> {
    let mut controller = EntryListController::new(state.client_session(&session)?);
    if let Some(redirect) = follow(controller.on_mount().await, &session, None)? {
        return Ok(redirect);
    }
    match EntryId::new(form.id.trim()) {
        Ok(id) => {
            controller.delete(&id).await;
        }
        Err(error) => warn!(
            user_id = session.user_id().map(display),
            raw = %form.id,
            %error,
            "ignoring delete without an entry id"
        ),
    }
    Ok(render(&state, &controller))
}

/// End the session and return to the landing screen.
#[post("/dashboard/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> PageResult<HttpResponse> {
    let mut controller = EntryListController::new(state.client_session(&session)?);
    let next = controller.logout().await;
    info!(user_id = session.user_id().map(display), "session cleared");
    session.purge();
    Ok(next
        .target()
        .map_or_else(|| render(&state, &controller), see_other))
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
