// src/extract/plain_text.rs
// =============================================================================
// The last-resort extraction strategy: strip all markup and keep the text.
//
// Text inside <script>, <style>, <noscript> and <template> is never visible
// on the page, so it is skipped. All runs of whitespace (spaces, newlines,
// tabs) collapse into a single space.
// =============================================================================

use scraper::Html;
use url::Url;

use super::{ExtractError, ExtractionStrategy};

const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

pub struct PlainText;

impl ExtractionStrategy for PlainText {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn extract(&self, html: &str, _url: &Url) -> Result<String, ExtractError> {
        Ok(visible_text(&Html::parse_document(html)))
    }
}

// Collects the visible text of a parsed document or fragment
pub(super) fn visible_text(document: &Html) -> String {
    let mut words: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map_or(false, |element| HIDDEN_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> String {
        let url = Url::parse("https://example.com").unwrap();
        PlainText.extract(html, &url).unwrap()
    }

    #[test]
    fn test_strips_tags_and_collapses_whitespace() {
        let text = extract("<div>\n  <h1>Title</h1>\n\n<p>Some   <b>bold</b>\ttext</p></div>");
        assert_eq!(text, "Title Some bold text");
    }

    #[test]
    fn test_skips_script_and_style() {
        let text = extract(
            "<html><head><style>p { color: red }</style></head>\
             <body><script>alert('x')</script><p>Visible</p></body></html>",
        );
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_comments_are_not_text() {
        assert_eq!(extract("<p>kept<!-- dropped --></p>"), "kept");
    }

    #[test]
    fn test_plain_string_input() {
        assert_eq!(extract("just some words"), "just some words");
    }
}
