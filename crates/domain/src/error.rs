//! Common error types used across the workspace.
//!
//! Each failure class is its own typed error; [`RipDashError`] wraps them via
//! `#[from]` so every layer can propagate with `?`.

/// Top-level error for every client operation.
#[derive(Debug, thiserror::Error)]
pub enum RipDashError {
    /// Required input was missing; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Login was rejected or the login request could not be completed.
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// A protected action was attempted before logging in.
    #[error(transparent)]
    NotAuthenticated(#[from] NotAuthenticatedError),

    /// An authenticated request failed (non-2xx, transport, or bad body).
    #[error("request failed: {0}")]
    Request(#[from] RequestError),
}

/// Local input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username or password was empty.
    #[error("username and password are required")]
    MissingCredentials,
}

/// Login failure carrying the user-visible reason.
///
/// The message is the backend-provided `error` field when present, else the
/// transport error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

/// Raised when a protected operation runs on an unauthenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not authenticated")]
pub struct NotAuthenticatedError;

/// Failure of an authenticated data request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    /// HTTP status when a response was received.
    pub status: Option<u16>,
    /// Backend `error` field if present, else the transport message.
    pub message: String,
}
