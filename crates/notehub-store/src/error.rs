//! Error types for the storage layer.

use notehub_core::{NoteId, RepositoryError};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The store was closed and no longer accepts operations.
    #[error("store is closed")]
    Closed,
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NoteNotFound(id) => RepositoryError::NotFound(NoteId::from_uuid(id)),
            other => RepositoryError::Backend(other.to_string()),
        }
    }
}
