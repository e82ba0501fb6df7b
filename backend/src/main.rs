//! Journal server entry-point: loads settings, wires the hosted backend and
//! serves the screens.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use journal::inbound::http::health::HealthState;
use journal::inbound::http::session_config::{BuildMode, session_settings_from_env};
use journal::inbound::http::state::HttpState;
use journal::settings::JournalSettings;
use server::{ServerConfig, create_server};

fn startup_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(error.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = JournalSettings::load().map_err(startup_error)?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(startup_error)?;

    let http_state = HttpState::new(
        settings.build_client().map_err(startup_error)?,
        settings.after_create().map_err(startup_error)?,
        settings.display_offset().map_err(startup_error)?,
    );
    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        settings.bind_addr().map_err(startup_error)?,
        http_state,
    );

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %config.bind_addr(), "starting journal server");
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
