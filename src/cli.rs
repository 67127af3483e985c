// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::crawl::CrawlConfig;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "rag-crawler",
    version,
    about = "Crawl a website politely and save its text as a corpus",
    long_about = "rag-crawler walks a website breadth-first, stays on the same site, honors robots.txt, \
                  and saves the main text of every page to a JSON document ready for indexing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and save the extracted text of its pages
    ///
    /// Example: rag-crawler crawl https://example.com --max-pages 50 --max-depth 3
    Crawl {
        /// Where to start crawling (e.g., https://example.com)
        start_url: String,

        /// Stop after this many pages have been saved
        #[arg(long, default_value_t = 20)]
        max_pages: usize,

        /// How many links away from the start URL to go
        ///
        /// Depth 0 = just the starting page
        /// Depth 1 = starting page + all pages it links to
        /// etc.
        #[arg(long, default_value_t = 2)]
        max_depth: usize,

        /// Seconds to wait between requests (fractions allowed, e.g. 0.25)
        #[arg(long, default_value = "0.5", value_parser = parse_delay)]
        delay: Duration,

        /// Where to write the JSON corpus (overwritten if it exists)
        #[arg(long, default_value = "data/pages.json")]
        out: PathBuf,

        /// Print the crawl report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch a single page and print the text that would be saved for it
    ///
    /// Example: rag-crawler extract https://example.com/blog/post
    Extract {
        /// Page to fetch
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

// Builds the crawl settings from the `crawl` subcommand's arguments
pub fn crawl_config(
    start_url: &str,
    max_pages: usize,
    max_depth: usize,
    delay: Duration,
    out: PathBuf,
) -> CrawlConfig {
    CrawlConfig {
        max_pages,
        max_depth,
        delay,
        output_path: out,
        ..CrawlConfig::new(start_url)
    }
}

// Parses "--delay 0.5" into a Duration, rejecting negative or NaN values
fn parse_delay(raw: &str) -> Result<Duration, String> {
    let seconds: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", raw))?;

    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("delay must be a finite, non-negative number of seconds, got {}", raw))
}
