//! Authentication primitives: credentials, bearer tokens and sessions.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a controller talks to a port.

use std::fmt;

use zeroize::Zeroizing;

use super::AuthenticatedUser;

/// Domain error returned when credential values are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Email was blank once trimmed.
    #[error("email is required")]
    EmptyEmail,
    /// Password was empty.
    #[error("password is required")]
    EmptyPassword,
}

/// Email/password pair submitted on the auth screen.
///
/// ## Invariants
/// - `email` is trimmed and non-empty. Its format is not checked; the hosted
///   identity service is the judge of that.
/// - `password` is non-empty and kept verbatim.
///
/// # Examples
/// ```
/// use journal::domain::Credentials;
///
/// let creds = Credentials::try_from_parts(" ada@example.com ", "pw").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw form inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer token issued by the hosted identity service.
///
/// The `Debug` output is redacted so tokens never reach log lines.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// A signed-in session: the token to present plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: AccessToken,
    pub user: AuthenticatedUser,
}

/// Which request the auth screen submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Create a new account.
    SignUp,
    /// Open a session for an existing account.
    #[default]
    SignIn,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::SignUp => Self::SignIn,
            Self::SignIn => Self::SignUp,
        }
    }

    /// Stable form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignUp => "sign-up",
            Self::SignIn => "sign-in",
        }
    }

    /// Parse a form value; anything unrecognised means sign-in.
    pub fn from_form_value(raw: Option<&str>) -> Self {
        match raw {
            Some("sign-up") => Self::SignUp,
            _ => Self::SignIn,
        }
    }
}
