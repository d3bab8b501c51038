//! Database models for the storage layer.
//!
//! These types map directly to database rows. Conversion into the domain
//! [`Note`] happens at the store boundary.

use chrono::{DateTime, Utc};
use notehub_core::{Note, NoteId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub pdf_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            title: row.title,
            subject: row.subject,
            pdf_url: row.pdf_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
