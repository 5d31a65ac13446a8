// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes one HTTP GET request per URL
// - A link is good only if the answer is exactly 200 OK
// - Failures are values (LinkOutcome), never errors that stop the run
// - Links are checked one after another, never concurrently
//
// Rust concepts:
// - async/await: reqwest's client is async, tokio drives it
// - Enums: To represent the different ways a check can end
// - Streams: StreamExt::then runs one future at a time, in order
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt}; // StreamExt gives us .then()
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;

// How checking a single link ended
//
// Only Success counts as a working link. The other two keep the reason
// around for the status line and the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Server answered 200 OK
    Success,
    /// No usable response: DNS failure, refused connection, TLS error,
    /// timeout, malformed response, invalid URL...
    ConnectionFailure(String),
    /// Server answered, but with something other than 200
    ProtocolError(u16),
}

impl LinkOutcome {
    /// Helper method to check if the link is OK
    pub fn is_success(&self) -> bool {
        matches!(self, LinkOutcome::Success)
    }
}

// This is what gets printed after each request
impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkOutcome::Success => write!(f, "OK"),
            LinkOutcome::ProtocolError(status) => write!(f, "HTTPError {}", status),
            LinkOutcome::ConnectionFailure(reason) => write!(f, "URLError: {}", reason),
        }
    }
}

// Represents the result of checking a single link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheckResult {
    /// The URL that was checked, exactly as found in the docs
    pub url: String,
    /// How the check ended
    pub outcome: LinkOutcome,
}

impl LinkCheckResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_success()
    }
}

// Creates the HTTP client shared by every check in a run
//
// Parameters:
//   timeout: per-request limit; None leaves requests unbounded
//   no_proxy: ignore proxy settings from the environment
//
// Redirects are followed (reqwest's default policy), so a link that moved
// permanently still counts as long as the final page answers 200.
pub fn build_client(timeout: Option<Duration>, no_proxy: bool) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    if no_proxy {
        builder = builder.no_proxy();
    }

    builder.build().context("failed to create HTTP client")
}

// Checks multiple links, one after the other
//
// Results come back in the same order as the input.
// A slow server holds up everything behind it; there is no concurrency.
pub async fn check_links<I>(client: &Client, urls: I) -> Vec<LinkCheckResult>
where
    I: IntoIterator<Item = String>,
{
    // then() waits for each future to finish before starting the next one,
    // unlike buffer_unordered() which would run them side by side
    stream::iter(urls)
        .then(|url| check_single_link(client, url))
        .collect()
        .await
}

// Checks a single link and prints progress to stdout
//
// Prints:
//   requesting... ---<url>---
//   <status line>
pub async fn check_single_link(client: &Client, url: String) -> LinkCheckResult {
    println!("requesting... ---{}--- ", url);

    let outcome = match client.get(&url).send().await {
        Ok(response) => analyze_status(response.status()),
        Err(e) => categorize_error(&e),
    };

    println!("{}", outcome);
    tracing::debug!(%url, ?outcome, "link checked");

    LinkCheckResult { url, outcome }
}

// Returns true only when the URL answers 200 OK
//
// Any other status, and any failure to get a response at all, is false.
pub async fn validate_url(client: &Client, url: &str) -> bool {
    check_single_link(client, url.to_string()).await.is_ok()
}

// Turns a status code into an outcome
//
// Only 200 itself is good. 204 or 206 are still "not the page we linked to".
fn analyze_status(status: StatusCode) -> LinkOutcome {
    if status == StatusCode::OK {
        LinkOutcome::Success
    } else {
        LinkOutcome::ProtocolError(status.as_u16())
    }
}

// Categorizes errors from reqwest
//
// A status error carries the code the server sent; everything else means
// we never got a usable response.
fn categorize_error(error: &reqwest::Error) -> LinkOutcome {
    if let Some(status) = error.status() {
        return LinkOutcome::ProtocolError(status.as_u16());
    }

    let reason = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_builder() {
        format!("invalid URL: {}", error)
    } else {
        error.to_string()
    };

    LinkOutcome::ConnectionFailure(reason)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why async if we check one link at a time?
//    - reqwest's main client is async; tokio runs it
//    - We just never start a second request before the first one is done
//    - main.rs uses a single-threaded runtime, so nothing runs in parallel
//
// 2. then() vs buffer_unordered()?
//    - then(f) maps each item through an async fn, one at a time, in order
//    - buffer_unordered(N) runs up to N at once and returns them out of order
//
// 3. Why is a failed request not an Err?
//    - A dead link is an expected result, not a bug in our program
//    - Putting it in LinkOutcome lets the run keep going and report it later
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_success() {
        assert_eq!(analyze_status(StatusCode::OK), LinkOutcome::Success);
        assert_eq!(analyze_status(StatusCode::NOT_FOUND), LinkOutcome::ProtocolError(404));
        assert_eq!(
            analyze_status(StatusCode::INTERNAL_SERVER_ERROR),
            LinkOutcome::ProtocolError(500)
        );
        assert_eq!(analyze_status(StatusCode::NO_CONTENT), LinkOutcome::ProtocolError(204));
    }

    #[test]
    fn test_link_result_is_ok() {
        let ok_result = LinkCheckResult {
            url: "https://stripe.com".to_string(),
            outcome: LinkOutcome::Success,
        };
        assert!(ok_result.is_ok());

        let broken_result = LinkCheckResult {
            url: "https://stripe.com/nope".to_string(),
            outcome: LinkOutcome::ProtocolError(404),
        };
        assert!(!broken_result.is_ok());

        let unreachable = LinkCheckResult {
            url: "https://github.invalid".to_string(),
            outcome: LinkOutcome::ConnectionFailure("dns".to_string()),
        };
        assert!(!unreachable.is_ok());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(LinkOutcome::Success.to_string(), "OK");
        assert_eq!(LinkOutcome::ProtocolError(404).to_string(), "HTTPError 404");
        assert_eq!(
            LinkOutcome::ConnectionFailure("request timed out".to_string()).to_string(),
            "URLError: request timed out"
        );
    }

    #[test]
    fn test_build_client_with_options() {
        assert!(build_client(None, false).is_ok());
        assert!(build_client(Some(Duration::from_secs(5)), true).is_ok());
    }
}
