// src/crawl/error.rs
// =============================================================================
// Errors that stop a crawl.
//
// There are very few of them on purpose. A page that can't be fetched,
// isn't HTML, or has no text is not an error, it is a skipped URL (see
// SkipReason in fetch.rs). Only problems that make the whole run
// meaningless end up here.
// =============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The start URL isn't an absolute http(s) URL
    #[error("Invalid start URL '{url}': {reason}")]
    InvalidStartUrl { url: String, reason: String },

    /// The HTTP client could not be created
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The crawl result could not be turned into JSON
    #[error("Failed to serialize crawl output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file (or its directory) could not be written
    #[error("Failed to write crawl output to {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
