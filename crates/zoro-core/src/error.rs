//! Error types for the record store and its import/export paths.
//!
//! Every failure the core can produce is returned as one of these values.
//! Nothing here prints or prompts; the caller decides how to surface them.

use thiserror::Error;

/// Errors raised by a key-value persistence backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Reading or writing the blob failed at the I/O level.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backend (e.g. unsafe file name).
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Any other backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors raised by [`RecordStore`](crate::store::RecordStore) operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A persisted blob exists but does not decode into a record list.
    #[error("persisted state under key '{key}' is corrupt: {reason}")]
    PersistedStateCorrupt { key: String, reason: String },

    /// The collection could not be encoded for persistence.
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Returns `true` for the load-time corruption condition.
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, StoreError::PersistedStateCorrupt { .. })
    }
}

/// Errors raised when importing a snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    /// The payload failed the shape check. The collection is untouched.
    #[error("import format invalid: {0}")]
    FormatInvalid(String),

    /// The payload was accepted but persisting it failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised when exporting the collection.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// There are no records to export.
    #[error("no data to export")]
    EmptyCollection,

    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}
