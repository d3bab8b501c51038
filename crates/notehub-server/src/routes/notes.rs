//! Note routes.
//!
//! This module implements the note HTTP endpoints:
//! - POST /upload - Create a note from a title, subject and PDF URL
//! - GET /notes - List every note, newest first
//! - DELETE /notes/{id} - Delete a note

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use serde::Serialize;

use notehub_core::{Note, NoteId, RepositoryError};

use crate::error::{ApiError, ApiResult};
use crate::extract::NotePayload;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for POST /upload.
#[derive(Debug, Serialize)]
pub struct UploadNoteResponse {
    /// Confirmation message.
    pub message: String,
    /// The created note, including its store-assigned id and timestamps.
    pub note: Note,
}

/// Response for DELETE /notes/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    /// ID of the deleted note.
    pub id: NoteId,
    /// Confirmation message.
    pub message: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a backend failure with context and wrap it for the response.
fn storage_failure(context: &'static str) -> impl FnOnce(RepositoryError) -> ApiError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        ApiError::Repository(e)
    }
}

fn note_not_found(id: NoteId) -> ApiError {
    ApiError::NotFound(format!("note {}", id))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /upload - Create a note.
///
/// # Request
///
/// JSON or URL-encoded: `{ "title": "...", "subject": "...", "pdfUrl": "https://..." }`
///
/// # Response
///
/// - 200 OK: `{ "message": "Note uploaded successfully!", "note": {...} }`
/// - 400 Bad Request: Malformed body or failed validation
/// - 500 Internal Server Error: Store failure
async fn upload_note(
    State(state): State<AppState>,
    NotePayload(new_note): NotePayload,
) -> ApiResult<Json<UploadNoteResponse>> {
    let note = state
        .notes()
        .insert(new_note)
        .await
        .map_err(storage_failure("Failed to upload note"))?;

    tracing::info!(note_id = %note.id, subject = %note.subject, "Note uploaded");

    Ok(Json(UploadNoteResponse {
        message: "Note uploaded successfully!".to_string(),
        note,
    }))
}

/// GET /notes - List all notes, newest first.
///
/// # Response
///
/// - 200 OK: `[ { "id": "...", "title": "...", ... }, ... ]`
/// - 500 Internal Server Error: Store failure
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state
        .notes()
        .list_newest_first()
        .await
        .map_err(storage_failure("Failed to retrieve notes"))?;

    tracing::info!(count = notes.len(), "Notes retrieved");

    Ok(Json(notes))
}

/// DELETE /notes/{id} - Delete a note.
///
/// Looks the note up first, then deletes it. The two steps are not atomic;
/// a note deleted concurrently between them is reported as not found.
///
/// # Response
///
/// - 200 OK: `{ "id": "...", "message": "Note deleted successfully" }`
/// - 400 Bad Request: `id` is not a UUID
/// - 404 Not Found: No such note
/// - 500 Internal Server Error: Store failure
async fn delete_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    let id: NoteId = raw_id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid note id: {}", raw_id)))?;

    let notes = state.notes();

    let existing = notes
        .find(id)
        .await
        .map_err(storage_failure("Failed to look up note"))?;
    if existing.is_none() {
        return Err(note_not_found(id));
    }

    match notes.delete(id).await {
        Ok(()) => {}
        Err(e @ RepositoryError::NotFound(_)) => {
            tracing::warn!(note_id = %id, "Note disappeared between lookup and delete");
            return Err(e.into());
        }
        Err(e) => return Err(storage_failure("Failed to delete note")(e)),
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        id,
        message: "Note deleted successfully".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_note))
        .route("/notes", get(list_notes))
        .route("/notes/{id}", delete(delete_note))
}

// ============================================================================
// Tests
// ============================================================================
