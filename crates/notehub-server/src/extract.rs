//! Request body extraction for note creation.

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use notehub_core::{NewNote, NoteInput};

use crate::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A validated create-note payload.
///
/// Accepts `application/x-www-form-urlencoded` bodies as forms and parses
/// everything else as JSON. An empty body is an empty object, so the
/// client gets a field-level validation message rather than a parse error.
/// Every rejection is a 400.
#[derive(Debug)]
pub struct NotePayload(pub NewNote);

impl<S> FromRequest<S> for NotePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let input = if is_form(&req) {
            let Form(input) = Form::<NoteInput>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            input
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            parse_json(&bytes)?
        };

        Ok(Self(input.validate()?))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().starts_with(FORM_CONTENT_TYPE))
}

fn parse_json(bytes: &[u8]) -> Result<NoteInput, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(NoteInput::default());
    }
    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {}", e)))
}
