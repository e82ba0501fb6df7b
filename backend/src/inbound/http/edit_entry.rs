//! Edit-entry handlers.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::warn;

use super::respond::{follow, href, page};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::controllers::EntryEditController;
use crate::domain::{EntryId, PageResult};

/// `?id=` navigation parameter.
#[derive(Deserialize)]
pub struct EditQuery {
    #[serde(default)]
    id: Option<String>,
}

impl EditQuery {
    /// A missing or blank id behaves like no id at all.
    fn entry_id(&self) -> Option<EntryId> {
        let raw = self.id.as_deref()?.trim();
        match EntryId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(raw, %error, "ignoring blank entry id");
                None
            }
        }
    }
}

/// Edited content.
#[derive(Deserialize)]
pub struct EditForm {
    #[serde(default)]
    content: String,
}

fn render(controller: &EntryEditController) -> HttpResponse {
    page(views::edit_entry(
        controller.state(),
        &href(controller.cancel()),
    ))
}

/// Load the entry into the editor.
#[get("/edit-entry")]
pub async fn edit_entry_page(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<EditQuery>,
) -> PageResult<HttpResponse> {
    let mut controller =
        EntryEditController::new(state.client_session(&session)?, query.entry_id());
    if let Some(redirect) = follow(controller.on_mount().await, &session, None)? {
        return Ok(redirect);
    }
    Ok(render(&controller))
}

/// Save the edited content and return to the list.
#[post("/edit-entry")]
pub async fn update_entry(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<EditQuery>,
    form: web::Form<EditForm>,
) -> PageResult<HttpResponse> {
    let mut controller = EntryEditController::with_draft(
        state.client_session(&session)?,
        query.entry_id(),
        form.into_inner().content,
    );
    if let Some(redirect) = follow(controller.save().await, &session, None)? {
        return Ok(redirect);
    }
    Ok(render(&controller))
}
