//! Core data types for notehub.
//!
//! A [`Note`] is a title/subject/PDF-URL triple plus the metadata the store
//! assigns on insert. Clients never supply `id`, `created_at` or
//! `updated_at`; those only appear on the read side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4 assigned by the store when the note is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A persisted note as returned by every read path.
///
/// Serializes with camelCase keys (`pdfUrl`, `createdAt`, `updatedAt`) to
/// match the wire format existing clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Store-assigned identifier.
    pub id: NoteId,
    pub title: String,
    pub subject: String,
    /// URL of an externally hosted PDF.
    pub pdf_url: String,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
    /// Set by the store on insert and on every update.
    pub updated_at: DateTime<Utc>,
}

/// A validated note ready to be inserted.
///
/// Only constructed through [`crate::NoteInput::validate`] or
/// [`NewNote::new`]; the store fills in the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub subject: String,
    pub pdf_url: String,
}

impl NewNote {
    /// Creates a new note from already-validated parts.
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        pdf_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            pdf_url: pdf_url.into(),
        }
    }

    /// Materializes the note with store-assigned metadata.
    #[must_use]
    pub fn into_note(self, id: NoteId, now: DateTime<Utc>) -> Note {
        Note {
            id,
            title: self.title,
            subject: self.subject,
            pdf_url: self.pdf_url,
            created_at: now,
            updated_at: now,
        }
    }
}
