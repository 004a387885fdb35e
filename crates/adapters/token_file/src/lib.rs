//! # ripdash-adapter-token-file
//!
//! [`TokenStore`] backed by a small JSON document on disk:
//!
//! ```json
//! { "authToken": "<bearer token>" }
//! ```
//!
//! `ripdash login --save` writes it; the dashboard poller reads it once at
//! start. A missing file means "no token stored".
//!
//! ## Dependency rule
//! Depends on `ripdash-app` (port trait) and `ripdash-domain` only.

mod error;

pub use error::TokenFileError;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ripdash_app::ports::{TokenStore, TokenStoreError};
use ripdash_domain::session::AccessToken;
use serde::{Deserialize, Serialize};

/// Key the token is stored under.
pub const STORAGE_KEY: &str = "authToken";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<AccessToken>,
}

/// JSON file holding the last-known bearer token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<StoredState>, TokenFileError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(TokenFileError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| TokenFileError::Json {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&self, state: &StoredState) -> Result<(), TokenFileError> {
        let io_err = |source| TokenFileError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_vec_pretty(state).map_err(|source| TokenFileError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(io_err)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        let token = self
            .read()?
            .and_then(|state| state.auth_token)
            .filter(|token| !token.as_str().is_empty());
        tracing::debug!(path = %self.path.display(), found = token.is_some(), "token file read");
        Ok(token)
    }

    fn save(&self, token: &AccessToken) -> Result<(), TokenStoreError> {
        self.write(&StoredState {
            auth_token: Some(token.clone()),
        })?;
        tracing::debug!(path = %self.path.display(), "token file written");
        Ok(())
    }
}
