//! UPLOAD command - Register a hosted PDF as a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::list::NoteSummary;
use super::{HumanReadable, endpoint, format_timestamp, make_request, output};

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// Note title
    #[arg(long, short = 't')]
    pub title: String,

    /// Subject the note belongs to
    #[arg(long, short = 's')]
    pub subject: String,

    /// URL of the hosted PDF
    #[arg(long = "pdf-url", short = 'u')]
    pub pdf_url: String,
}

/// Request body for uploading a note.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadNoteRequest {
    title: String,
    subject: String,
    pdf_url: String,
}

/// Response from uploading a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct UploadNoteResponse {
    pub message: String,
    pub note: NoteSummary,
}

impl HumanReadable for UploadNoteResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.note.id);
        println!("  {} {}", "Title:".cyan(), self.note.title);
        println!("  {} {}", "Subject:".cyan(), self.note.subject);
        println!("  {} {}", "PDF:".cyan(), self.note.pdf_url);
        println!(
            "  {} {}",
            "Created:".cyan(),
            format_timestamp(&self.note.created_at)
        );
    }
}

/// Execute the upload command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: UploadArgs) -> Result<()> {
    let url = endpoint(base_url, "/upload");

    let request_body = UploadNoteRequest {
        title: args.title,
        subject: args.subject,
        pdf_url: args.pdf_url,
    };

    let response: UploadNoteResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
