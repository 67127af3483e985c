// src/extract/article.rs
// =============================================================================
// Main-content extraction with the `readability` crate (a port of Mozilla's
// Readability, the engine behind Firefox Reader View).
//
// Readability scores blocks of the page by how much prose they contain and
// returns the best one as an HTML fragment. We then flatten that fragment
// to plain text the same way the fallback strategy does.
//
// The parser is run under catch_unwind: a page that makes it panic is
// reported as a failed strategy so the next one gets a turn.
// =============================================================================

use std::panic::{self, AssertUnwindSafe};

use scraper::Html;
use url::Url;

use super::plain_text::visible_text;
use super::{ExtractError, ExtractionStrategy};

// Shorter results usually mean readability found no article at all
const MIN_ARTICLE_CHARS: usize = 10;

pub struct Readability;

impl ExtractionStrategy for Readability {
    fn name(&self) -> &'static str {
        "readability"
    }

    fn extract(&self, html: &str, url: &Url) -> Result<String, ExtractError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            readability::extractor::extract(&mut html.as_bytes(), url)
        }));

        let product = match outcome {
            Ok(Ok(product)) => product,
            Ok(Err(e)) => {
                return Err(ExtractError::Failed {
                    strategy: self.name(),
                    message: format!("{:?}", e),
                })
            }
            Err(_) => return Err(ExtractError::Panicked { strategy: self.name() }),
        };

        Ok(visible_text(&Html::parse_fragment(&product.content)))
    }

    fn accepts(&self, text: &str) -> bool {
        text.chars().count() > MIN_ARTICLE_CHARS
    }
}
