//! Session: credentials, the bearer token, and the login state machine.

use serde::{Deserialize, Serialize};

use crate::error::{NotAuthenticatedError, ValidationError};

/// Opaque bearer credential issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Access the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header: `Bearer <token>`.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Login form input, serialized as the `POST /api/v1/token` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials, rejecting empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] when either field is empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Self { username, password })
    }
}

/// Successful login response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
}

/// Per-controller login state.
///
/// The only transition is `Unauthenticated -> Authenticated`; a session is
/// never logged out except by discarding it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(AccessToken),
}

impl Session {
    /// Whether a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The held token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::Authenticated(token) => Some(token),
            Self::Unauthenticated => None,
        }
    }

    /// The held token, or an error for protected operations.
    ///
    /// # Errors
    ///
    /// Returns [`NotAuthenticatedError`] when no login has succeeded yet.
    pub fn require(&self) -> Result<&AccessToken, NotAuthenticatedError> {
        self.token().ok_or(NotAuthenticatedError)
    }

    /// Move to `Authenticated`, replacing any previously held token.
    pub fn authenticate(&mut self, token: AccessToken) {
        *self = Self::Authenticated(token);
    }
}

impl From<Option<AccessToken>> for Session {
    fn from(token: Option<AccessToken>) -> Self {
        token.map_or(Self::Unauthenticated, Self::Authenticated)
    }
}
