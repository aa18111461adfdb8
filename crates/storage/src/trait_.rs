//! Storage trait abstraction.

use async_trait::async_trait;
use biblequest_core::Profile;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Persistence adapter for the single local profile.
///
/// This trait allows different storage backends to be plugged in. The
/// engine calls `save` after every mutation and `load` once at startup;
/// a failed save is reported to the caller while the in-memory profile
/// stays authoritative for the session.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the stored profile, or `None` if nothing was ever saved.
    async fn load(&self) -> Result<Option<Profile>>;

    /// Save the profile (create or overwrite).
    async fn save(&mut self, profile: &Profile) -> Result<()>;

    /// Delete any stored profile.
    async fn clear(&mut self) -> Result<()>;
}
