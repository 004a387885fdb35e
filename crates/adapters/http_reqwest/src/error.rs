//! HTTP adapter error types.

use ripdash_app::ports::TransportError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL could not be parsed.
    #[error("invalid backend base URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The base URL parses but cannot have paths joined onto it.
    #[error("backend URL {0:?} cannot be used as a base")]
    NotABase(String),

    /// A request path could not be joined onto the base URL.
    #[error("invalid request path {path:?}")]
    InvalidPath {
        path: String,
        #[source]
        source: BoxError,
    },

    /// The request could not be sent or the response body not read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        TransportError::new(err.to_string())
    }
}
