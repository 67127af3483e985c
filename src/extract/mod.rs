// src/extract/mod.rs
// =============================================================================
// This module turns raw HTML into the plain text we store in the corpus.
//
// Extraction is an ordered list of strategies. Each one either returns text
// or an error, and the first acceptable result wins:
//
//   1. Readability: finds the main article body, drops navigation and ads.
//      Only accepted if it produced more than 10 characters.
//   2. Plain text: every visible text node in the document.
//
// If every strategy fails the result is an empty string. Extraction never
// returns an error to the crawler; a page with no text is simply skipped.
//
// Rust concepts:
// - Traits: ExtractionStrategy is the seam each strategy plugs into
// - Box<dyn Trait>: a list of different strategy types behind one interface
// =============================================================================

mod article;
mod plain_text;

pub use article::Readability;
pub use plain_text::PlainText;

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Why a single strategy could not produce text
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The underlying parser reported an error
    #[error("{strategy} failed: {message}")]
    Failed {
        strategy: &'static str,
        message: String,
    },

    /// The underlying parser panicked on this input
    #[error("{strategy} panicked while parsing")]
    Panicked { strategy: &'static str },
}

/// One way of getting text out of an HTML document
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce plain, whitespace-normalized text from `html`
    fn extract(&self, html: &str, url: &Url) -> Result<String, ExtractError>;

    /// Whether `text` is good enough to stop here instead of trying the
    /// next strategy. Accepts anything by default.
    fn accepts(&self, _text: &str) -> bool {
        true
    }
}

// Runs strategies in order until one produces acceptable text
pub struct ContentExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new(vec![Box::new(Readability), Box::new(PlainText)])
    }
}

impl ContentExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    // Extracts text from a page, always returning a String (possibly empty)
    pub fn extract(&self, html: &str, url: &Url) -> String {
        for strategy in &self.strategies {
            match strategy.extract(html, url) {
                Ok(text) if strategy.accepts(&text) => return text,
                Ok(text) => debug!(
                    strategy = strategy.name(),
                    chars = text.chars().count(),
                    "extraction result rejected for {}",
                    url
                ),
                Err(e) => debug!("extraction failed for {}: {}", url, e),
            }
        }

        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl ExtractionStrategy for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn extract(&self, _html: &str, _url: &Url) -> Result<String, ExtractError> {
            Err(ExtractError::Failed {
                strategy: "failing",
                message: "always fails".to_string(),
            })
        }
    }

    fn url() -> Url {
        Url::parse("https://example.com/article").unwrap()
    }

    const ARTICLE: &str = r#"
        <html>
          <head><title>Tide tables</title><script>var tracking = 1;</script></head>
          <body>
            <nav><a href="/">Home</a> <a href="/about">About</a></nav>
            <article>
              <h1>Understanding tide tables</h1>
              <p>Tide tables list the predicted times and heights of high and low
                 water for a given port, usually for a whole year at a time.</p>
              <p>Sailors read them together with charts to work out how much
                 water there will be under the keel when entering a harbour.</p>
            </article>
            <footer>Copyright 2024</footer>
          </body>
        </html>
    "#;

    #[test]
    fn test_extracts_article_text() {
        let text = ContentExtractor::default().extract(ARTICLE, &url());
        assert!(text.contains("predicted times and heights"));
        assert!(!text.contains("var tracking"));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = ContentExtractor::default();
        let first = extractor.extract(ARTICLE, &url());
        let second = extractor.extract(ARTICLE, &url());
        assert_eq!(first, second);
    }

    #[test]
    fn test_falls_through_failing_strategy() {
        let extractor = ContentExtractor::new(vec![Box::new(Failing), Box::new(PlainText)]);
        let text = extractor.extract("<p>Fallback text survives</p>", &url());
        assert_eq!(text, "Fallback text survives");
    }

    #[test]
    fn test_all_strategies_failing_gives_empty_string() {
        let extractor = ContentExtractor::new(vec![Box::new(Failing)]);
        assert_eq!(extractor.extract("<p>anything</p>", &url()), "");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(ContentExtractor::default().extract("", &url()), "");
    }
}
