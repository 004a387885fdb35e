//! Token store port: the single persisted credential.

use ripdash_domain::session::AccessToken;

/// Failure reading or writing the persisted token.
#[derive(Debug, thiserror::Error)]
#[error("token store error")]
pub struct TokenStoreError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

/// Persistent storage holding the last-known bearer token under one
/// well-known key.
pub trait TokenStore {
    /// Read the stored token. `Ok(None)` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be read.
    fn load(&self) -> Result<Option<AccessToken>, TokenStoreError>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] when the backing storage cannot be written.
    fn save(&self, token: &AccessToken) -> Result<(), TokenStoreError>;
}
