//! LIST command - List all notes, newest first.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, endpoint, format_timestamp, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only show notes whose subject matches (case-insensitive)
    #[arg(long, short = 's')]
    pub subject: Option<String>,
}

/// A note as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    pub id: Uuid,
    pub title: String,
    pub subject: String,
    pub pdf_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// All notes, newest first.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<NoteSummary>);

impl NoteList {
    /// Keep only notes whose subject equals `subject`, ignoring case.
    fn filter_subject(self, subject: Option<&str>) -> Self {
        match subject {
            None => self,
            Some(wanted) => {
                let wanted = wanted.to_lowercase();
                Self(
                    self.0
                        .into_iter()
                        .filter(|n| n.subject.to_lowercase() == wanted)
                        .collect(),
                )
            }
        }
    }
}

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.0 {
            println!(
                "  {} {}",
                truncate(&note.title, 60).bold(),
                format!("[{}]", note.subject).dimmed()
            );
            println!("    {} {}", "ID:".cyan(), note.id);
            println!("    {} {}", "PDF:".cyan(), note.pdf_url);
            println!(
                "    {} {}",
                "Created:".cyan(),
                format_timestamp(&note.created_at)
            );
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: ListArgs) -> Result<()> {
    let url = endpoint(base_url, "/notes");

    let notes: NoteList = make_request(client.get(&url)).await?;
    let notes = notes.filter_subject(args.subject.as_deref());

    output(&notes, human)
}
