// src/crawl/output.rs
// =============================================================================
// The result of a crawl, and how it is saved.
//
// Two shapes come out of a run:
//
// 1. The corpus document written to disk, read by the indexer:
//      { "start_url": ..., "page_count": N, "pages": { url: text, ... } }
//
// 2. The summary returned to whoever started the crawl:
//      { "page_count": N, "skipped_count": M, "urls": [...], "skipped": [...] }
//
// Pages keep the order they were saved in (IndexMap), so the JSON reads in
// crawl order.
// =============================================================================

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use super::error::CrawlError;
use super::fetch::SkipReason;

/// A URL that was dequeued but not saved, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedUrl {
    pub url: String,
    pub depth: usize,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Everything a finished crawl produced
#[derive(Debug, Clone, Default)]
pub struct CrawlResult {
    pub start_url: String,
    /// Saved URL -> extracted text, in the order pages were saved
    pub pages: IndexMap<String, String>,
    pub skipped: Vec<SkippedUrl>,
}

/// What the caller of a crawl gets back (no page text)
#[derive(Debug, Clone, Serialize)]
pub struct CrawlSummary {
    pub page_count: usize,
    pub skipped_count: usize,
    pub urls: Vec<String>,
    pub skipped: Vec<SkippedUrl>,
}

// The document persisted for the indexer
#[derive(Serialize)]
struct CorpusDocument<'a> {
    start_url: &'a str,
    page_count: usize,
    pages: &'a IndexMap<String, String>,
}

impl CrawlResult {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            ..Self::default()
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.pages.keys().cloned().collect()
    }

    pub fn summary(&self) -> CrawlSummary {
        CrawlSummary {
            page_count: self.page_count(),
            skipped_count: self.skipped_count(),
            urls: self.urls(),
            skipped: self.skipped.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CrawlError> {
        let document = CorpusDocument {
            start_url: &self.start_url,
            page_count: self.page_count(),
            pages: &self.pages,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    // Writes the corpus document to `path`, creating parent directories
    // and replacing whatever was there before
    pub async fn save(&self, path: &Path) -> Result<(), CrawlError> {
        let json = self.to_json()?;

        let io_error = |source: std::io::Error| CrawlError::Output {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        tokio::fs::write(path, json).await.map_err(io_error)?;

        Ok(())
    }
}
