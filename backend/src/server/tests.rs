//! Tests for server bootstrap: readiness signalling and middleware wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use super::*;
use actix_web::http::StatusCode;
use actix_web::test;
use chrono::FixedOffset;
use rstest::{fixture, rstest};

use journal::domain::{JournalClient, PostCreateTarget, TRACE_ID_HEADER};
use journal::outbound::memory::InMemoryBackend;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn http_state() -> HttpState {
    let backend = Arc::new(InMemoryBackend::new());
    HttpState::new(
        JournalClient::new(backend.clone(), backend),
        PostCreateTarget::Landing,
        FixedOffset::east_opt(0).expect("zero offset"),
    )
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    bind_address: SocketAddr,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(
        Key::generate(),
        false,
        SameSite::Lax,
        bind_address,
        http_state,
    );
    assert_eq!(config.bind_addr(), bind_address);
    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn app_serves_pages_and_probes_with_trace_ids(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
) {
    health_state.mark_ready();
    let app = test::init_service(build_app(AppDependencies {
        health_state,
        http_state: web::Data::new(http_state),
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }))
    .await;

    let probe = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(probe.status(), StatusCode::OK);

    let landing = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(landing.status(), StatusCode::OK);
    assert!(landing.headers().contains_key(TRACE_ID_HEADER));

    let guarded = test::call_service(
        &app,
        test::TestRequest::get().uri("/dashboard").to_request(),
    )
    .await;
    assert_eq!(guarded.status(), StatusCode::SEE_OTHER);
}
