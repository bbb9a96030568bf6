//! Error types for local persistence

use thiserror::Error;

/// Errors surfaced by the local history store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage read/write failed
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted blob could not be serialized/deserialized
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
