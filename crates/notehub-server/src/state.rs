//! Application state shared across handlers.

use std::sync::Arc;

use notehub_core::NoteRepository;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Document store.
    notes: Arc<dyn NoteRepository>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(notes: Arc<dyn NoteRepository>, config: ServerConfig) -> Self {
        Self {
            notes,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the document store.
    pub fn notes(&self) -> &dyn NoteRepository {
        self.notes.as_ref()
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
