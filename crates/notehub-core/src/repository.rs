//! The document store seam.
//!
//! Route handlers only see `Arc<dyn NoteRepository>`, so the PostgreSQL
//! store and the in-memory store are interchangeable at startup.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{NewNote, Note, NoteId};

/// Result type alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by a [`NoteRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No note with this id; raised by `delete` when nothing matched.
    #[error("note not found: {0}")]
    NotFound(NoteId),

    /// The backend failed (unreachable, rejected the write, schema error).
    ///
    /// The message carries driver detail and is meant for logs, not clients.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persistence operations for notes.
///
/// Implementations must be safe to share across concurrent requests; the
/// application layer does no locking of its own.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note. The repository assigns the id and both timestamps.
    async fn insert(&self, note: NewNote) -> RepositoryResult<Note>;

    /// All notes, newest `created_at` first.
    async fn list_newest_first(&self) -> RepositoryResult<Vec<Note>>;

    /// Look up a note by id; `Ok(None)` when absent.
    async fn find(&self, id: NoteId) -> RepositoryResult<Option<Note>>;

    /// Delete a note by id. Fails with [`RepositoryError::NotFound`] if
    /// nothing was deleted.
    async fn delete(&self, id: NoteId) -> RepositoryResult<()>;

    /// Cheap connectivity check.
    async fn ping(&self) -> RepositoryResult<()>;

    /// Release underlying connections. Further calls may fail.
    async fn close(&self);
}
