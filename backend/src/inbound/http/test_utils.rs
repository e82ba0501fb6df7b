//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{HttpResponse, web};
use chrono::{FixedOffset, TimeZone, Utc};

use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::ports::{MockEntryRepository, MockIdentityProvider};
use crate::domain::{
    AccessToken, AuthSession, AuthenticatedUser, EntryId, Error, JournalClient, JournalEntry,
    PostCreateTarget, UserId,
};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The session cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned())
        .expect("session cookie set")
}

/// Handler state over mocked ports, UTC display and the default post-create
/// target.
pub fn mock_state(
    identity: MockIdentityProvider,
    entries: MockEntryRepository,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        JournalClient::new(Arc::new(identity), Arc::new(entries)),
        PostCreateTarget::default(),
        FixedOffset::east_opt(0).expect("zero offset"),
    ))
}

/// `Location` header of a redirect.
pub fn location<B>(response: &ServiceResponse<B>) -> &str {
    response
        .headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("redirect location")
}

/// Token seeded by [`seed_signed_in`].
pub const TEST_TOKEN: &str = "session-token";
/// Route that stores a signed-in session in the cookie.
pub const SEED_SESSION_PATH: &str = "/__seed-session";

pub fn test_user() -> AuthenticatedUser {
    AuthenticatedUser::new(
        UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id"),
        Some("ada@example.com".to_owned()),
    )
}

/// Register [`SEED_SESSION_PATH`] on a test app.
pub fn seed_signed_in(cfg: &mut web::ServiceConfig) {
    cfg.route(
        SEED_SESSION_PATH,
        web::get().to(|session: SessionContext| async move {
            session.persist(&AuthSession {
                access_token: AccessToken::new(TEST_TOKEN),
                user: test_user(),
            })?;
            Ok::<_, Error>(HttpResponse::Ok().finish())
        }),
    );
}

/// Identity double that resolves [`TEST_TOKEN`] to [`test_user`].
pub fn signed_in_identity() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_current_user()
        .withf(|token| token.expose() == TEST_TOKEN)
        .returning(|_| Ok(Some(test_user())));
    identity
}

/// Seed a signed-in session through [`SEED_SESSION_PATH`] and return its
/// cookie.
pub async fn signed_in_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
) -> Cookie<'static> {
    let res = actix_web::test::call_service(
        app,
        actix_web::test::TestRequest::get()
            .uri(SEED_SESSION_PATH)
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "seeding the session succeeds");
    session_cookie(&res)
}

/// Entry owned by [`test_user`], created on 2025-06-01 at `hour`:00 UTC.
pub fn test_entry(id: &str, hour: u32, content: &str) -> JournalEntry {
    JournalEntry {
        id: EntryId::new(id).expect("fixture entry id"),
        user_id: *test_user().id(),
        content: content.to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2025, 6, 1, hour, 0, 0)
            .single()
            .expect("fixture timestamp"),
    }
}
