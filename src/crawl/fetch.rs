// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages and decides whether they are worth parsing.
//
// A fetch either gives us HTML, or a SkipReason explaining why not:
// - The request failed (timeout, connection refused, DNS, TLS, ...)
// - The server answered with a non-2xx status
// - The response isn't HTML (PDFs, images, JSON, ...)
//
// There are no retries. A URL that fails once is skipped for the whole run.
//
// Rust concepts:
// - Result<T, E> where E is a plain enum, not an error type: skipping a
//   page is an expected outcome, not a failure of the program
// - serde tags: SkipReason serializes as {"reason": "http_status", ...}
// =============================================================================

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use super::config::CrawlConfig;

/// Why a URL was dequeued but not saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Further from the start page than max_depth
    DepthExceeded,
    /// robots.txt does not allow our user agent to fetch it
    RobotsDisallowed,
    /// The request took longer than the timeout
    Timeout,
    /// Could not connect (DNS failure, refused, unreachable)
    ConnectionFailed { message: String },
    /// Any other failure while sending the request or reading the body
    RequestFailed { message: String },
    /// The server answered, but not with 2xx
    HttpStatus { status: u16 },
    /// The response is not an HTML page
    UnsupportedContentType { content_type: String },
    /// Extraction produced too little text to be useful
    InsufficientContent { chars: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::DepthExceeded => write!(f, "depth limit exceeded"),
            SkipReason::RobotsDisallowed => write!(f, "blocked by robots.txt"),
            SkipReason::Timeout => write!(f, "request timed out"),
            SkipReason::ConnectionFailed { message } => write!(f, "connection failed: {}", message),
            SkipReason::RequestFailed { message } => write!(f, "request failed: {}", message),
            SkipReason::HttpStatus { status } => write!(f, "HTTP {}", status),
            SkipReason::UnsupportedContentType { content_type } if content_type.is_empty() => {
                write!(f, "no content type")
            }
            SkipReason::UnsupportedContentType { content_type } => {
                write!(f, "not HTML ({})", content_type)
            }
            SkipReason::InsufficientContent { chars } => {
                write!(f, "not enough text ({} chars)", chars)
            }
        }
    }
}

// An HTML page that was downloaded successfully
#[derive(Debug)]
pub struct FetchedPage {
    // Where we ended up after redirects; relative links resolve against this
    pub final_url: Url,
    pub html: String,
}

// Creates the HTTP client used for every request in a run
// (robots.txt included), with our timeout and user agent
pub fn build_client(config: &CrawlConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
}

// Fetches a page and returns its HTML, or why it should be skipped
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, SkipReason> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(categorize_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SkipReason::HttpStatus {
            status: status.as_u16(),
        });
    }

    // A missing header counts as "not HTML", same as an unknown type
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html(&content_type) {
        return Err(SkipReason::UnsupportedContentType { content_type });
    }

    let final_url = response.url().clone();
    let html = response.text().await.map_err(categorize_error)?;

    Ok(FetchedPage { final_url, html })
}

fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

// Sorts reqwest errors into the kinds of network failure we report
fn categorize_error(error: reqwest::Error) -> SkipReason {
    if error.is_timeout() {
        SkipReason::Timeout
    } else if error.is_connect() {
        SkipReason::ConnectionFailed {
            message: error.to_string(),
        }
    } else {
        SkipReason::RequestFailed {
            message: error.to_string(),
        }
    }
}
