//! Unit tests for session configuration parsing.

use super::*;
use mockable::MockEnv;
use rstest::rstest;
use std::collections::HashMap;
use uuid::Uuid;

struct TempKeyFile {
    path: PathBuf,
}

impl TempKeyFile {
    fn new(len: usize) -> Self {
        let path = std::env::temp_dir().join(format!("journal-session-key-{}", Uuid::new_v4()));
        std::fs::write(&path, vec![b'k'; len]).expect("write temporary key");
        Self { path }
    }

    fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempKeyFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

/// A complete, valid release configuration with one variable overridden or
/// removed.
fn release_env(key: &TempKeyFile, name: &'static str, value: Option<&str>) -> MockEnv {
    let mut vars = HashMap::from([
        (KEY_FILE_ENV, key.path_str()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ]);
    match value {
        Some(value) => vars.insert(name, value.to_owned()),
        None => vars.remove(name),
    };
    mock_env(vars)
}

#[rstest]
fn release_valid_settings_succeed() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, SAMESITE_ENV, Some("lax"));

    let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(#[case] missing: &'static str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, missing, None);

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("missing toggle must fail");
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(COOKIE_SECURE_ENV, "")]
#[case(SAMESITE_ENV, "sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "perhaps")]
fn release_rejects_invalid_values(#[case] name: &'static str, #[case] value: &str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, name, Some(value));

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("invalid value must fail");
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: got, .. } if got == name));
}

#[rstest]
fn release_rejects_ephemeral_keys() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, ALLOW_EPHEMERAL_ENV, Some("yes"));

    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("ephemeral must fail");
    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_rejects_short_and_missing_keys() {
    let short = TempKeyFile::new(32);
    let err = session_settings_from_env(&release_env(&short, SAMESITE_ENV, Some("Strict")), BuildMode::Release)
        .err()
        .expect("short key must fail");
    assert!(matches!(err, SessionConfigError::KeyTooShort { length: 32, .. }));

    let missing = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(
        &missing,
        KEY_FILE_ENV,
        Some("/nonexistent/journal/session_key"),
    );
    let err = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("unreadable key must fail");
    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn release_rejects_insecure_same_site_none() {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let mut vars = HashMap::from([
        (KEY_FILE_ENV, key.path_str()),
        (COOKIE_SECURE_ENV, "0".to_owned()),
        (SAMESITE_ENV, "None".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ]);
    let err = session_settings_from_env(&mock_env(vars.clone()), BuildMode::Release)
        .err()
        .expect("insecure None must fail");
    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));

    vars.insert(COOKIE_SECURE_ENV, "1".to_owned());
    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Release).expect("secure None");
    assert_eq!(settings.same_site, SameSite::None);
}

#[rstest]
fn debug_defaults_allow_ephemeral_key() {
    let env = mock_env(HashMap::from([(
        KEY_FILE_ENV,
        "/nonexistent/journal/session_key".to_owned(),
    )]));
    let settings =
        session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults should succeed");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "sure")]
#[case(SAMESITE_ENV, "unexpected")]
fn debug_invalid_values_fall_back_to_defaults(#[case] name: &'static str, #[case] value: &str) {
    let key = TempKeyFile::new(SESSION_KEY_MIN_LEN);
    let env = release_env(&key, name, Some(value));

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug falls back");
    assert!(settings.cookie_secure);
    if name == SAMESITE_ENV {
        assert_eq!(settings.same_site, SameSite::Lax);
    }
}

#[rstest]
#[case("1", Some(true))]
#[case(" TRUE ", Some(true))]
#[case("n", Some(false))]
#[case("2", None)]
fn parses_boolean_toggles(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
