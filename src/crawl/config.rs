// src/crawl/config.rs
// =============================================================================
// Settings for a single crawl run.
//
// The CLI fills these in from flags; tests build them directly.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

// Sent with every request, including the robots.txt fetch
pub const DEFAULT_USER_AGENT: &str = "RAG-Crawler/1.0 (+https://example.org)";

// Per-request timeout; a slower server is treated as a network failure
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

pub const DEFAULT_MAX_PAGES: usize = 20;
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_OUTPUT_PATH: &str = "data/pages.json";

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl begins (depth 0)
    pub start_url: String,
    /// Stop once this many pages have been saved
    pub max_pages: usize,
    /// Links further than this many hops from the start are not fetched
    pub max_depth: usize,
    /// Pause between consecutive page requests
    pub delay: Duration,
    /// The corpus JSON document is written here, replacing any old file
    pub output_path: PathBuf,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl CrawlConfig {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            max_pages: DEFAULT_MAX_PAGES,
            max_depth: DEFAULT_MAX_DEPTH,
            delay: DEFAULT_DELAY,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    // The name robots.txt groups are matched against: the product token of
    // the user agent ("RAG-Crawler" for "RAG-Crawler/1.0 (+https://...)")
    pub fn robots_agent(&self) -> &str {
        self.user_agent
            .split(|c: char| c == '/' || c.is_whitespace())
            .next()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::new("https://example.com");
        assert_eq!(config.max_pages, 20);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.delay, Duration::from_millis(500));
        assert_eq!(config.output_path, PathBuf::from("data/pages.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_robots_agent_is_product_token() {
        let mut config = CrawlConfig::new("https://example.com");
        assert_eq!(config.robots_agent(), "RAG-Crawler");

        config.user_agent = "PlainBot".to_string();
        assert_eq!(config.robots_agent(), "PlainBot");
    }
}
