//! Command-line client for notehub.
//!
//! Commands:
//! - upload: Register a hosted PDF as a note
//! - list: List notes, newest first
//! - delete: Delete a note
//! - health: Check server and store status
//!
//! Configuration via environment:
//! - NOTEHUB_URL: Base URL of the notehub server (default: http://localhost:5555)

mod commands;

use clap::{Parser, Subcommand};

use commands::{delete::DeleteArgs, health::HealthArgs, list::ListArgs, upload::UploadArgs};

/// notehub CLI
///
/// Share lecture notes as links to hosted PDFs. Prints JSON by default;
/// pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notehub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// notehub server URL
    #[arg(
        long,
        env = "NOTEHUB_URL",
        default_value = "http://localhost:5555",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a hosted PDF as a new note
    Upload(UploadArgs),

    /// List all notes, newest first
    List(ListArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Check server and document store health
    Health(HealthArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Upload(args) => {
            commands::upload::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Health(args) => {
            commands::health::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
