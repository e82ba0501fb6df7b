//! Landing page handler.

use actix_web::{HttpResponse, get, web};

use super::respond::{follow, href, page};
use super::session::SessionContext;
use super::state::HttpState;
use super::views;
use crate::domain::PageResult;
use crate::domain::controllers::LandingController;

/// Forward signed-in visitors to their entries; everyone else gets the
/// call-to-action.
#[get("/")]
pub async fn landing(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> PageResult<HttpResponse> {
    let controller = LandingController::new(state.client_session(&session)?);
    if let Some(redirect) = follow(controller.on_mount().await, &session, None)? {
        return Ok(redirect);
    }
    Ok(page(views::landing(&href(controller.get_started()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    use crate::domain::ports::{MockEntryRepository, MockIdentityProvider};
    use crate::inbound::http::test_utils::{
        location, mock_state, seed_signed_in, signed_in_cookie, signed_in_identity,
        test_session_middleware,
    };

    #[actix_web::test]
    async fn anonymous_visitors_see_the_call_to_action() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_user().times(0);
        let app = test::init_service(
            App::new()
                .app_data(mock_state(identity, MockEntryRepository::new()))
                .wrap(test_session_middleware())
                .service(landing),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        let html = std::str::from_utf8(&body).expect("utf-8");
        assert!(html.contains("Get Started"));
        assert!(html.contains(r#"href="/auth""#));
    }

    #[actix_web::test]
    async fn signed_in_visitors_are_forwarded_to_their_entries() {
        let app = test::init_service(
            App::new()
                .app_data(mock_state(signed_in_identity(), MockEntryRepository::new()))
                .wrap(test_session_middleware())
                .configure(seed_signed_in)
                .service(landing),
        )
        .await;
        let cookie = signed_in_cookie(&app).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie).to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/dashboard");
    }
}
