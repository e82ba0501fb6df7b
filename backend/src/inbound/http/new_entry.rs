//! New-entry handlers.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use super::respond::{follow, href, page};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::PageResult;
use crate::domain::controllers::EntryCreateController;

/// Submitted draft.
#[derive(Deserialize)]
pub struct DraftForm {
    #[serde(default)]
    content: String,
}

fn controller(
    state: &HttpState,
    session: &SessionContext,
) -> PageResult<EntryCreateController> {
    Ok(EntryCreateController::new(
        state.client_session(session)?,
        state.after_create,
    ))
}

fn render(controller: &EntryCreateController) -> HttpResponse {
    page(views::new_entry(
        controller.state(),
        &href(controller.back()),
    ))
}

/// Empty editor.
#[get("/new-entry")]
pub async fn new_entry_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> PageResult<HttpResponse> {
    Ok(render(&controller(&state, &session)?))
}

/// Save the draft. Blank drafts and failed saves re-render the editor with
/// the draft intact.
#[post("/new-entry")]
pub async fn create_entry(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<DraftForm>,
) -> PageResult<HttpResponse> {
    let mut controller = controller(&state, &session)?;
    controller.set_content(form.into_inner().content);
    let navigation = controller.save().await;
    if let Some(redirect) = follow(navigation, &session, controller.state().alert.as_deref())? {
        return Ok(redirect);
    }
    Ok(render(&controller))
}
