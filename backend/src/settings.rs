//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `JOURNAL_*` environment variables, CLI flags or a config
//! file. Session cookie toggles are read separately by
//! [`crate::inbound::http::session_config`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::FixedOffset;
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{JournalClient, PostCreateTarget};
use crate::outbound::memory::InMemoryBackend;
use crate::outbound::supabase::SupabaseClient;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Which hosted-backend adapter serves the ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Supabase-compatible REST backend over HTTPS.
    Supabase,
    /// Process-local store for development and tests.
    Memory,
}

/// Errors raised while validating settings or building adapters.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required setting {name}")]
    Missing { name: &'static str },
    #[error("invalid value for {name}='{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl SettingsError {
    fn invalid(name: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Invalid {
            name,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Settings for the journal server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOURNAL")]
pub struct JournalSettings {
    /// `supabase` (default) or `memory`.
    pub backend: Option<String>,
    /// Base URL of the hosted backend project.
    pub supabase_url: Option<String>,
    /// Public anon key sent as `apikey` on every request.
    pub supabase_anon_key: Option<String>,
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// Screen shown after a successful create: `landing` or `entry-list`.
    pub after_create: Option<String>,
    /// Per-request timeout for hosted backend calls.
    pub request_timeout_secs: Option<u64>,
    /// Offset from UTC, in minutes, used to render entry timestamps.
    pub display_utc_offset_minutes: Option<i32>,
}

impl JournalSettings {
    pub fn backend_kind(&self) -> Result<BackendKind, SettingsError> {
        match self.backend.as_deref().map(str::trim) {
            None | Some("") => Ok(BackendKind::Supabase),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "supabase" => Ok(BackendKind::Supabase),
                "memory" => Ok(BackendKind::Memory),
                _ => Err(SettingsError::invalid(
                    "backend",
                    raw,
                    "expected supabase|memory",
                )),
            },
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_str();
        raw.parse()
            .map_err(|error| SettingsError::invalid("bind_addr", raw, error))
    }

    pub fn after_create(&self) -> Result<PostCreateTarget, SettingsError> {
        match self.after_create.as_deref() {
            None => Ok(PostCreateTarget::default()),
            Some(raw) => raw
                .parse()
                .map_err(|error| SettingsError::invalid("after_create", raw, error)),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn display_offset(&self) -> Result<FixedOffset, SettingsError> {
        let minutes = self.display_utc_offset_minutes.unwrap_or(0);
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                SettingsError::invalid(
                    "display_utc_offset_minutes",
                    minutes.to_string(),
                    "must lie strictly within +/-24h",
                )
            })
    }

    /// Build the process-wide client for the configured backend.
    pub fn build_client(&self) -> Result<JournalClient, SettingsError> {
        match self.backend_kind()? {
            BackendKind::Memory => {
                warn!("using the in-memory backend; accounts and entries are lost on restart");
                let backend = Arc::new(InMemoryBackend::new());
                Ok(JournalClient::new(backend.clone(), backend))
            }
            BackendKind::Supabase => {
                let raw_url = self
                    .supabase_url
                    .as_deref()
                    .ok_or(SettingsError::Missing {
                        name: "supabase_url",
                    })?;
                let base_url = Url::parse(raw_url)
                    .map_err(|error| SettingsError::invalid("supabase_url", raw_url, error))?;
                let anon_key = self
                    .supabase_anon_key
                    .as_deref()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or(SettingsError::Missing {
                        name: "supabase_anon_key",
                    })?;
                info!(base_url = %base_url, "using hosted backend");
                let client = Arc::new(SupabaseClient::new(
                    base_url,
                    anon_key,
                    self.request_timeout(),
                )?);
                Ok(JournalClient::new(client.clone(), client))
            }
        }
    }
}
