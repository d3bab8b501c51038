//! HEALTH command - Check the server and its document store.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, endpoint, make_request, output};

/// Arguments for the health command.
#[derive(Args)]
pub struct HealthArgs {}

/// Response from the health endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

impl HumanReadable for HealthResponse {
    fn print_human(&self) {
        let store = if self.store == "up" {
            self.store.green()
        } else {
            self.store.red()
        };
        println!("  {} {}", "Server:".cyan(), self.status.green());
        println!("  {} {}", "Store:".cyan(), store);
    }
}

/// Execute the health command.
pub async fn execute(client: &Client, base_url: &str, human: bool, _args: HealthArgs) -> Result<()> {
    let url = endpoint(base_url, "/health");

    let response: HealthResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
