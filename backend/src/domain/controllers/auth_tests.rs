//! Tests for the auth controller.

use rstest::rstest;

use super::*;
use crate::domain::controllers::test_support::{session, user};
use crate::domain::ports::{MockEntryRepository, MockIdentityProvider};
use crate::domain::AccessToken;

fn controller(identity: MockIdentityProvider, mode: AuthMode) -> AuthController {
    AuthController::new(session(identity, MockEntryRepository::new()), mode)
}

#[tokio::test]
async fn accepted_sign_in_navigates_to_the_entry_list() {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_sign_in_with_password()
        .withf(|creds| creds.email() == "ada@example.com" && creds.password() == "pw")
        .times(1)
        .returning(|_| {
            Ok(AuthSession {
                access_token: AccessToken::new("fresh"),
                user: user(),
            })
        });
    let mut auth = controller(identity, AuthMode::SignIn);

    let outcome = auth.submit("ada@example.com", "pw").await;

    assert_eq!(
        outcome.navigation(),
        Navigation::NavigateTo(Screen::EntryList)
    );
    assert!(matches!(outcome, AuthOutcome::SignedIn(ref s) if s.access_token.expose() == "fresh"));
    assert!(!auth.state().busy);
    assert!(auth.state().error.is_none());
}

#[rstest]
#[case("Invalid login credentials")]
#[case("Email not confirmed")]
#[tokio::test]
async fn rejected_sign_in_shows_the_service_message_verbatim(#[case] message: &'static str) {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_sign_in_with_password()
        .returning(move |_| Err(IdentityError::rejected(message)));
    let mut auth = controller(identity, AuthMode::SignIn);

    let outcome = auth.submit("ada@example.com", "wrong").await;

    assert_eq!(outcome, AuthOutcome::Stay);
    assert_eq!(outcome.navigation(), Navigation::Stay);
    assert_eq!(auth.state().error.as_deref(), Some(message));
    assert!(!auth.state().busy, "busy must clear on failure");
}

#[tokio::test]
async fn sign_up_shows_confirmation_without_navigating() {
    let mut identity = MockIdentityProvider::new();
    identity.expect_sign_up().times(1).returning(|_| Ok(()));
    identity.expect_sign_in_with_password().times(0);
    let mut auth = controller(identity, AuthMode::SignUp);

    let outcome = auth.submit("new@example.com", "secret").await;

    assert_eq!(outcome, AuthOutcome::Stay);
    assert_eq!(auth.state().notice.as_deref(), Some(SIGN_UP_CONFIRMATION));
    assert!(auth.state().error.is_none());
    assert!(!auth.state().busy);
}

#[tokio::test]
async fn rejected_sign_up_sets_error_and_clears_busy() {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_sign_up()
        .returning(|_| Err(IdentityError::rejected("User already registered")));
    let mut auth = controller(identity, AuthMode::SignUp);

    auth.submit("ada@example.com", "secret").await;

    assert_eq!(auth.state().error.as_deref(), Some("User already registered"));
    assert!(auth.state().notice.is_none());
    assert!(!auth.state().busy);
}

#[rstest]
#[case(IdentityError::transport("connection refused"))]
#[case(IdentityError::decode("expected value at line 1"))]
#[tokio::test]
async fn unexpected_failures_use_the_generic_message(#[case] failure: IdentityError) {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_sign_in_with_password()
        .returning(move |_| Err(failure.clone()));
    let mut auth = controller(identity, AuthMode::SignIn);

    auth.submit("ada@example.com", "pw").await;

    assert_eq!(auth.state().error.as_deref(), Some(UNEXPECTED_AUTH_ERROR));
    assert!(!auth.state().busy);
}

#[rstest]
#[case("", "pw")]
#[case("   ", "pw")]
#[case("ada@example.com", "")]
#[tokio::test]
async fn blank_fields_never_reach_the_service(#[case] email: &str, #[case] password: &str) {
    let mut identity = MockIdentityProvider::new();
    identity.expect_sign_in_with_password().times(0);
    let mut auth = controller(identity, AuthMode::SignIn);

    let outcome = auth.submit(email, password).await;

    assert_eq!(outcome, AuthOutcome::Stay);
    assert!(auth.state().error.is_some());
    assert!(!auth.state().busy);
}

#[tokio::test]
async fn toggling_mode_clears_previous_error() {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_sign_in_with_password()
        .returning(|_| Err(IdentityError::rejected("Invalid login credentials")));
    let mut auth = controller(identity, AuthMode::SignIn);
    auth.submit("ada@example.com", "wrong").await;
    assert!(auth.state().error.is_some());

    auth.toggle_mode();

    assert_eq!(auth.state().mode, AuthMode::SignUp);
    assert!(auth.state().error.is_none());
    auth.toggle_mode();
    assert_eq!(auth.state().mode, AuthMode::SignIn);
}
