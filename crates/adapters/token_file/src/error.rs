//! Token-file error type wrapping I/O and JSON errors.

use std::path::PathBuf;

use ripdash_app::ports::TokenStoreError;

/// Errors originating from the token file.
#[derive(Debug, thiserror::Error)]
pub enum TokenFileError {
    /// The file could not be read or written.
    #[error("token file {path:?} is not accessible")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a valid token document.
    #[error("token file {path:?} is malformed")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<TokenFileError> for TokenStoreError {
    fn from(err: TokenFileError) -> Self {
        Self(Box::new(err))
    }
}
