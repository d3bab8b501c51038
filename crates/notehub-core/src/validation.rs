//! Client input schema for creating notes.

use serde::Deserialize;
use thiserror::Error;

use crate::types::NewNote;

/// Maximum length of `title` and `subject`, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// Maximum length of `pdfUrl`, in characters.
pub const MAX_URL_LEN: usize = 2048;

/// Reasons a create-note payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("field {field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("pdfUrl must be an absolute http(s) URL: {0}")]
    InvalidUrl(String),
}

/// Raw payload of `POST /upload`, accepted as JSON or URL-encoded form.
///
/// Every field is optional at the deserialization layer so that a missing
/// field surfaces as a [`ValidationError`] instead of a parser rejection.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

impl NoteInput {
    /// Validate the payload and produce a [`NewNote`].
    ///
    /// Fields are trimmed before any check.
    pub fn validate(self) -> Result<NewNote, ValidationError> {
        let title = required_text("title", self.title, MAX_TEXT_LEN)?;
        let subject = required_text("subject", self.subject, MAX_TEXT_LEN)?;
        let pdf_url = required_text("pdfUrl", self.pdf_url, MAX_URL_LEN)?;
        check_pdf_url(&pdf_url)?;

        Ok(NewNote {
            title,
            subject,
            pdf_url,
        })
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_string())
}

/// Only checks shape; the URL is never fetched.
fn check_pdf_url(url: &str) -> Result<(), ValidationError> {
    let uri: http::Uri = url
        .parse()
        .map_err(|_| ValidationError::InvalidUrl(url.to_string()))?;

    let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
    let has_host = uri.host().is_some_and(|h| !h.is_empty());

    if scheme_ok && has_host {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(url.to_string()))
    }
}
