//! Turning controller outcomes into HTTP responses.

use actix_web::HttpResponse;
use actix_web::http::header::{self, ContentType};
use maud::Markup;

use super::session::SessionContext;
use crate::domain::{Error, Navigation, Screen};

/// `200 OK` with a rendered page.
pub(crate) fn page(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(markup.into_string())
}

/// `303 See Other` to the given screen.
pub(crate) fn see_other(screen: Screen) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, screen.path()))
        .finish()
}

/// Href for a navigation-only action such as a link or button.
pub(crate) fn href(navigation: Navigation) -> String {
    navigation
        .target()
        .map_or_else(String::new, |screen| screen.path())
}

/// Follow a controller's navigation, carrying `alert` to the next screen.
///
/// Returns `None` when the controller stays and its own view should render.
pub(crate) fn follow(
    navigation: Navigation,
    session: &SessionContext,
    alert: Option<&str>,
) -> Result<Option<HttpResponse>, Error> {
    let Some(screen) = navigation.target() else {
        return Ok(None);
    };
    if let Some(message) = alert {
        session.set_flash(message)?;
    }
    Ok(Some(see_other(screen)))
}
