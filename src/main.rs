// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (to stderr, so JSON on stdout stays clean)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Print the results
// 5. Exit with proper code (0 = pages saved, 1 = nothing saved, 2 = error)
//
// Rust concepts used:
// - async/await: network requests and the politeness delay
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod crawl;   // src/crawl/ - the crawler
mod extract; // src/extract/ - HTML -> text
mod links;   // src/links/ - link discovery, normalization, site scope

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use cli::{Cli, Commands};
use crawl::{CrawlConfig, CrawlSummary};
use extract::ContentExtractor;

// What `crawl` reports back: the crawl summary plus how long it took
#[derive(Debug, Serialize)]
struct CrawlReport {
    #[serde(flatten)]
    summary: CrawlSummary,
    duration_ms: f64,
}

// What `extract` reports back for a single page
#[derive(Debug, Serialize)]
struct ExtractReport {
    url: String,
    final_url: String,
    chars: usize,
    text: String,
}

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; RUST_LOG controls the level (default: info)
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

// Returns:
//   Ok(0) = at least one page saved / extracted
//   Ok(1) = finished, but nothing was saved
//   Err = something stopped the run
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            start_url,
            max_pages,
            max_depth,
            delay,
            out,
            json,
        } => {
            let config = cli::crawl_config(&start_url, max_pages, max_depth, delay, out);
            handle_crawl(config, json).await
        }
        Commands::Extract { url, json } => handle_extract(&url, json).await,
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(config: CrawlConfig, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Crawling website: {}", config.start_url);
        println!(
            "📊 Max pages: {}, max depth: {}, delay: {:?}",
            config.max_pages, config.max_depth, config.delay
        );
    }

    let output_path = config.output_path.clone();
    let started = Instant::now();
    let result = crawl::crawl(config).await?;

    let report = CrawlReport {
        summary: result.summary(),
        duration_ms: round_ms(started.elapsed()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
        println!("💾 Corpus written to {}", output_path.display());
    }

    if report.summary.page_count > 0 {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Handles the 'extract' subcommand
async fn handle_extract(raw_url: &str, json: bool) -> Result<i32> {
    let url = Url::parse(raw_url).with_context(|| format!("Invalid URL '{}'", raw_url))?;

    let client = crawl::build_client(&CrawlConfig::new(raw_url))?;

    let page = match crawl::fetch_page(&client, &url).await {
        Ok(page) => page,
        Err(reason) => {
            eprintln!("⚠️  Could not extract {}: {}", url, reason);
            return Ok(1);
        }
    };

    let text = ContentExtractor::default().extract(&page.html, &page.final_url);
    let report = ExtractReport {
        url: url.to_string(),
        final_url: page.final_url.to_string(),
        chars: text.chars().count(),
        text,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("📄 {} ({} chars)\n", report.final_url, report.chars);
        println!("{}", report.text);
    }

    if report.chars > 0 {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Milliseconds, rounded to two decimals
fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

// Prints the crawl report as a human-readable table
fn print_table(report: &CrawlReport) {
    let summary = &report.summary;

    println!();
    println!("{:<70} {:<30}", "URL", "STATUS");
    println!("{}", "=".repeat(100));

    for url in &summary.urls {
        println!("{:<70} {:<30}", truncate(url), "✅ SAVED");
    }
    for skipped in &summary.skipped {
        println!("{:<70} {:<30}", truncate(&skipped.url), format!("⏭️  {}", skipped.reason));
    }

    println!();
    println!("📊 Summary:");
    println!("   ✅ Saved: {}", summary.page_count);
    println!("   ⏭️  Skipped: {}", summary.skipped_count);
    println!("   ⏱️  Took: {:.0} ms", report.duration_ms);
}

// Shortens long URLs so the table stays aligned
fn truncate(url: &str) -> String {
    if url.chars().count() > 67 {
        format!("{}...", url.chars().take(67).collect::<String>())
    } else {
        url.to_string()
    }
}
