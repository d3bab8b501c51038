//! In-memory note store.
//!
//! Selected with `DATABASE_URL=memory://`. Contents live for the lifetime
//! of the process; used for local development and the server test suite.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use notehub_core::{NewNote, Note, NoteId, NoteRepository, RepositoryError, RepositoryResult};
use tokio::sync::RwLock;

use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    /// Note plus its insert sequence, for newest-first tie breaking.
    notes: HashMap<NoteId, (u64, Note)>,
    next_seq: u64,
    closed: bool,
}

/// Note store held entirely in process memory.
///
/// Cloning is cheap; clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    /// Whether the store holds no notes.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn check_open(inner: &Inner) -> Result<(), StoreError> {
    if inner.closed {
        Err(StoreError::Closed)
    } else {
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MemoryStore {
    async fn insert(&self, note: NewNote) -> RepositoryResult<Note> {
        let mut inner = self.inner.write().await;
        check_open(&inner)?;

        // Timestamp under the write lock so insert order and created_at agree.
        let note = note.into_note(NoteId::new(), Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.notes.insert(note.id, (seq, note.clone()));

        Ok(note)
    }

    async fn list_newest_first(&self) -> RepositoryResult<Vec<Note>> {
        let inner = self.inner.read().await;
        check_open(&inner)?;

        let mut entries: Vec<&(u64, Note)> = inner.notes.values().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });

        Ok(entries.into_iter().map(|(_, note)| note.clone()).collect())
    }

    async fn find(&self, id: NoteId) -> RepositoryResult<Option<Note>> {
        let inner = self.inner.read().await;
        check_open(&inner)?;
        Ok(inner.notes.get(&id).map(|(_, note)| note.clone()))
    }

    async fn delete(&self, id: NoteId) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        check_open(&inner)?;
        match inner.notes.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn ping(&self) -> RepositoryResult<()> {
        let inner = self.inner.read().await;
        check_open(&inner)?;
        Ok(())
    }

    async fn close(&self) {
        self.inner.write().await.closed = true;
    }
}
