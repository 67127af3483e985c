// src/crawl/crawler.rs
// =============================================================================
// This module runs a crawl from start to finish.
//
// How it works:
// 1. Put the start URL in the frontier at depth 0
// 2. Read robots.txt for the start URL's host
// 3. Take the next URL off the frontier and, in order:
//      skip it if it's deeper than max_depth
//      skip it if robots.txt disallows it
//      fetch it (skip on network error, non-2xx, or non-HTML)
//      extract its text (skip if fewer than 30 characters)
//      save the text
//      queue its same-site links at depth + 1 (unless already at max_depth)
// 4. After a saved page, wait for the politeness delay, then repeat
// 5. Stop when the frontier is empty or max_pages pages are saved
// 6. Write the corpus JSON to the output path
//
// Everything happens one URL at a time; nothing runs concurrently.
// Every URL is fetched at most once per run, and a failed URL is never
// retried. The only error that stops a run is failing to write the output.
//
// Rust concepts:
// - tracing::Span: the crawler is handed a span when it is created and
//   every log line of the run is recorded inside it
// - Instrument: attaches that span to the async run
// =============================================================================

use reqwest::Client;
use tracing::{info, Instrument, Span};
use url::Url;

use super::config::CrawlConfig;
use super::error::CrawlError;
use super::fetch::{build_client, fetch_page, SkipReason};
use super::frontier::{Frontier, FrontierEntry, Next};
use super::output::{CrawlResult, SkippedUrl};
use super::robots::RobotsGate;
use crate::extract::ContentExtractor;
use crate::links::extract_links;

// Pages with less extracted text than this are not worth indexing
const MIN_PAGE_CHARS: usize = 30;

pub struct Crawler {
    config: CrawlConfig,
    client: Client,
    extractor: ContentExtractor,
    span: Span,
}

impl Crawler {
    // Creates a crawler for one run
    //
    // Parameters:
    //   config: what to crawl and how
    //   span: the tracing span all of this run's logs are recorded in
    pub fn new(config: CrawlConfig, span: Span) -> Result<Self, CrawlError> {
        let client = build_client(&config)?;

        Ok(Self {
            config,
            client,
            extractor: ContentExtractor::default(),
            span,
        })
    }

    // Runs the crawl and writes the corpus document
    pub async fn run(&self) -> Result<CrawlResult, CrawlError> {
        self.crawl().instrument(self.span.clone()).await
    }

    async fn crawl(&self) -> Result<CrawlResult, CrawlError> {
        let config = &self.config;
        let start = parse_start_url(&config.start_url)?;

        let mut frontier =
            Frontier::new(start.clone(), config.max_depth).ok_or_else(|| {
                CrawlError::InvalidStartUrl {
                    url: config.start_url.clone(),
                    reason: "URL has no host".to_string(),
                }
            })?;

        info!(
            site = frontier.site(),
            max_pages = config.max_pages,
            max_depth = config.max_depth,
            "Crawl start: {}",
            start
        );

        let robots = RobotsGate::fetch(&self.client, &start, config.robots_agent()).await;
        let mut result = CrawlResult::new(config.start_url.clone());

        while result.page_count() < config.max_pages {
            let entry = match frontier.next() {
                None => break,
                Some(Next::Duplicate(_)) => continue,
                Some(Next::TooDeep(entry)) => {
                    record_skip(&mut result, entry, SkipReason::DepthExceeded);
                    continue;
                }
                Some(Next::Fetch(entry)) => entry,
            };

            if !robots.can_fetch(&entry.url) {
                record_skip(&mut result, entry, SkipReason::RobotsDisallowed);
                continue;
            }

            info!(depth = entry.depth, "Fetching: {}", entry.url);
            match self.visit(&entry, &mut frontier).await {
                Ok(text) => {
                    info!("Saved text from {} (chars={})", entry.url, text.chars().count());
                    result.pages.insert(entry.url.to_string(), text);
                }
                Err(reason) => {
                    record_skip(&mut result, entry, reason);
                    continue;
                }
            }

            // Politeness: wait after each saved page, unless the loop is done
            if result.page_count() < config.max_pages && !frontier.is_empty() {
                tokio::time::sleep(config.delay).await;
            }
        }

        result.save(&config.output_path).await?;

        info!(
            pages = result.page_count(),
            skipped = result.skipped_count(),
            "Crawl finished, saved {}",
            config.output_path.display()
        );

        Ok(result)
    }

    // Fetches one page, extracts its text and queues its links
    //
    // Returns: the page text, or why the page was skipped
    async fn visit(&self, entry: &FrontierEntry, frontier: &mut Frontier) -> Result<String, SkipReason> {
        let page = fetch_page(&self.client, &entry.url).await?;

        let text = self.extractor.extract(&page.html, &page.final_url);
        let chars = text.chars().count();
        if chars < MIN_PAGE_CHARS {
            return Err(SkipReason::InsufficientContent { chars });
        }

        if frontier.admits_children(entry.depth) {
            for link in extract_links(&page.html, &page.final_url) {
                frontier.enqueue(link, entry.depth + 1);
            }
        }

        Ok(text)
    }
}

// Crawls a site with the given settings and writes the corpus document
//
// This is the main entry point: it creates a span for the run, builds a
// Crawler and runs it.
pub async fn crawl(config: CrawlConfig) -> Result<CrawlResult, CrawlError> {
    let span = tracing::info_span!("crawl", start_url = %config.start_url);
    Crawler::new(config, span)?.run().await
}

fn record_skip(result: &mut CrawlResult, entry: FrontierEntry, reason: SkipReason) {
    info!(depth = entry.depth, "Skipping {}: {}", entry.url, reason);
    result.skipped.push(SkippedUrl {
        url: entry.url.into(),
        depth: entry.depth,
        reason,
    });
}

// The start URL must be an absolute http(s) URL; its fragment is dropped
fn parse_start_url(raw: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: String| CrawlError::InvalidStartUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    url.set_fragment(None);

    Ok(url)
}
