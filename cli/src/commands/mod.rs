//! Subcommand implementations and shared HTTP/output helpers.

pub mod delete;
pub mod health;
pub mod list;
pub mod upload;

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};
use chrono::{DateTime, Local, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Types that can print themselves for a human reader.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    code: String,
    message: String,
}

/// Build the shared HTTP client.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("notehub-cli/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Send a request and decode a JSON response, turning server errors into
/// readable messages.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!(describe_error(status, &body)));
    }

    Ok(response.json().await?)
}

/// Render a failed response as one line.
fn describe_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => format!(
            "{} ({}): {}",
            status, parsed.error.code, parsed.error.message
        ),
        Err(_) if body.trim().is_empty() => format!("{}", status),
        Err(_) => format!("{}: {}", status, truncate(body.trim(), 200)),
    }
}

/// Print as pretty JSON, or as human-readable text with `--human`.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Format a timestamp in local time.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Shorten `s` to at most `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Ask a yes/no question on `prompt_to` and read the answer from `answers`.
///
/// Only `y` or `yes` (any case) confirm; end of input declines.
pub fn confirm(question: &str, answers: impl BufRead, mut prompt_to: impl Write) -> Result<bool> {
    write!(prompt_to, "{} [y/N] ", question)?;
    prompt_to.flush()?;

    let answer = answers.lines().next().transpose()?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Join a base URL and a path without doubling slashes.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
