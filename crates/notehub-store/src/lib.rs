//! notehub-store: document store for notehub.
//!
//! This crate provides:
//! - PostgreSQL storage for notes via sqlx
//! - An in-memory store with the same behavior
//! - Embedded, idempotent schema migrations
//! - Connection lifecycle: background connect with backoff, close
//!
//! # Usage
//!
//! ```rust,ignore
//! use notehub_store::{StoreConfig, open_repository};
//!
//! let config = StoreConfig::from_env()?;
//! let notes = open_repository(&config).await?;
//!
//! let note = notes.insert(new_note).await?;
//! let all = notes.list_newest_first().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod schema;
pub mod store;

use std::sync::Arc;

use notehub_core::NoteRepository;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::NoteRow;
pub use store::{MAX_CONNECT_BACKOFF, MEMORY_URL_PREFIX, Store, StoreConfig, backoff_delay};

// Re-export notehub-core for downstream crates
pub use notehub_core;

/// Open the repository selected by `config`.
///
/// `memory://` URLs yield a [`MemoryStore`]. Anything else is treated as a
/// PostgreSQL URL and returns at once with a lazily-connecting store; the
/// connect-and-migrate retry loop runs in a background task, so callers can
/// start serving while the database is still unreachable. Only a malformed
/// URL is an error.
///
/// Must be called from within a Tokio runtime.
pub async fn open_repository(config: &StoreConfig) -> StoreResult<Arc<dyn NoteRepository>> {
    if config.is_memory() {
        tracing::warn!("Using in-memory note store; notes will not survive a restart");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = Store::connect_lazy(config)?;

    let background = store.clone();
    let config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = background.warm_up(&config).await {
            tracing::error!(
                error = %e,
                "Database connection failed; continuing without a live connection"
            );
        }
    });

    Ok(Arc::new(store))
}
