// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Stays on the start URL's site (registrable domain, subdomains included)
// - Page budget and depth limit
// - Honors robots.txt, failing open when it can't be read
// - Polite crawling with a delay between requests
// - Saves the extracted text of every page as one JSON document
//
// Submodules:
// - config: settings for a run
// - fetch: downloading pages, and why a page gets skipped
// - robots: robots.txt permission checks
// - frontier: the BFS queue and visited set
// - crawler: the crawl loop
// - output: the crawl result and the JSON corpus document
// - error: the few errors that stop a crawl
// =============================================================================

mod config;
mod crawler;
mod error;
mod fetch;
mod frontier;
mod output;
mod robots;

pub use config::CrawlConfig;
pub use crawler::crawl;
pub use fetch::{build_client, fetch_page};
pub use output::CrawlSummary;
