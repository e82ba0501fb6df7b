//! Auth screen handlers: render, submit and mode toggle.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use super::respond::{page, see_other};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::controllers::{AuthController, AuthOutcome};
use crate::domain::{AuthMode, PageResult};

/// Submitted sign-in / sign-up form.
#[derive(Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Mode the toggle button was pressed from.
#[derive(Deserialize)]
pub struct ModeForm {
    #[serde(default)]
    mode: Option<String>,
}

/// Show the form in sign-in mode, with any alert carried over from a
/// redirect.
#[get("/auth")]
pub async fn auth_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> PageResult<HttpResponse> {
    let controller = AuthController::new(state.client_session(&session)?, AuthMode::default());
    let flash = session.take_flash();
    Ok(page(views::auth(controller.state(), "", flash.as_deref())))
}

/// Submit credentials in the mode the form was rendered in.
#[post("/auth")]
pub async fn submit_auth(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<AuthForm>,
) -> PageResult<HttpResponse> {
    let AuthForm {
        mode,
        email,
        password,
    } = form.into_inner();
    let mut controller = AuthController::new(
        state.client_session(&session)?,
        AuthMode::from_form_value(mode.as_deref()),
    );
    let outcome = controller.submit(&email, &password).await;
    if let AuthOutcome::SignedIn(opened) = &outcome {
        session.persist(opened)?;
    }
    Ok(match outcome.navigation().target() {
        Some(screen) => see_other(screen),
        None => page(views::auth(controller.state(), &email, None)),
    })
}

/// Flip between sign-in and sign-up.
#[post("/auth/toggle")]
pub async fn toggle_auth_mode(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ModeForm>,
) -> PageResult<HttpResponse> {
    let mut controller = AuthController::new(
        state.client_session(&session)?,
        AuthMode::from_form_value(form.mode.as_deref()),
    );
    controller.toggle_mode();
    Ok(page(views::auth(controller.state(), "", None)))
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
