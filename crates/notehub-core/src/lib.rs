//! notehub-core: shared types for the notehub note-sharing backend.
//!
//! This crate provides:
//! - The [`Note`] entity and its [`NoteId`]
//! - [`NoteInput`], the validated client payload for creating notes
//! - The [`NoteRepository`] trait implemented by every document store

pub mod repository;
pub mod types;
pub mod validation;

pub use repository::{NoteRepository, RepositoryError, RepositoryResult};
pub use types::{NewNote, Note, NoteId};
pub use validation::{MAX_TEXT_LEN, MAX_URL_LEN, NoteInput, ValidationError};
