//! DELETE command - Remove a note by id.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, confirm, endpoint, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the note to remove
    pub note_id: Uuid,

    /// Delete without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Server reply to a successful delete.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteNoteResponse {
    pub id: Uuid,
    pub message: String,
}

impl HumanReadable for DeleteNoteResponse {
    fn print_human(&self) {
        println!("{} {}", self.message.green().bold(), self.id.to_string().dimmed());
    }
}

/// Whether to ask before deleting. JSON mode is for scripts and never asks.
fn needs_confirmation(args: &DeleteArgs, human: bool) -> bool {
    human && !args.yes
}

/// Execute the delete command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    if needs_confirmation(&args, human) {
        let question = format!(
            "{} delete note {}?",
            "Warning:".yellow().bold(),
            args.note_id
        );
        if !confirm(&question, std::io::stdin().lock(), std::io::stderr())? {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = endpoint(base_url, &format!("/notes/{}", args.note_id));
    let response: DeleteNoteResponse = make_request(client.delete(&url)).await?;

    output(&response, human)
}
