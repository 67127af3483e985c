// src/links/normalize.rs
// =============================================================================
// This module turns an href found on a page into a URL we can crawl.
//
// Rules:
// - Empty hrefs, in-page anchors (#...), mailto:, tel: and javascript:
//   links are rejected outright
// - Relative links are resolved against the page they were found on
// - The fragment (#section) is removed, so /docs#a and /docs#b are one page
// - Anything that doesn't end up as http:// or https:// is rejected
//
// Rust concepts:
// - Option<T>: "no URL" is None, never an empty or magic string
// - Url::join: resolves relative references the same way a browser does
// =============================================================================

use url::Url;

// Schemes we know are not navigable pages, checked before resolving
// so that "javascript:void(0)" never reaches the URL parser
const REJECTED_PREFIXES: [&str; 3] = ["mailto:", "tel:", "javascript:"];

// Normalizes a discovered href relative to the page it came from
//
// Parameters:
//   base: the URL of the page the link was found on
//   raw_href: the href attribute exactly as written in the HTML
//
// Returns: Some(absolute, fragment-free URL) or None if it isn't crawlable
//
// Examples:
//   base = "https://example.com/guide/"
//   raw_href = "intro#setup" -> Some("https://example.com/guide/intro")
//   raw_href = "#top"        -> None
//   raw_href = "ftp://x.org" -> None
pub fn normalize(base: &Url, raw_href: &str) -> Option<Url> {
    let href = raw_href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if REJECTED_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix)) {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_fragment(None);

    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/guide/start").unwrap()
    }

    #[test]
    fn test_resolve_relative_link() {
        let url = normalize(&base(), "/docs").unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_sibling_link() {
        let url = normalize(&base(), "intro").unwrap();
        assert_eq!(url.as_str(), "https://example.com/guide/intro");
    }

    #[test]
    fn test_absolute_link_kept() {
        let url = normalize(&base(), "https://other.org/page").unwrap();
        assert_eq!(url.as_str(), "https://other.org/page");
    }

    #[test]
    fn test_fragments_are_equivalent() {
        let a = normalize(&base(), "/x#a");
        let b = normalize(&base(), "/x#b");
        assert_eq!(a, b);
        assert_eq!(a.unwrap().as_str(), "https://example.com/x");
    }

    #[test]
    fn test_skip_anchor() {
        assert_eq!(normalize(&base(), "#section"), None);
    }

    #[test]
    fn test_skip_empty_and_blank() {
        assert_eq!(normalize(&base(), ""), None);
        assert_eq!(normalize(&base(), "   "), None);
    }

    #[test]
    fn test_skip_special_schemes() {
        assert_eq!(normalize(&base(), "mailto:test@example.com"), None);
        assert_eq!(normalize(&base(), "tel:+15551234"), None);
        assert_eq!(normalize(&base(), "javascript:void(0)"), None);
        assert_eq!(normalize(&base(), "JavaScript:alert(1)"), None);
    }

    #[test]
    fn test_skip_non_http_result() {
        assert_eq!(normalize(&base(), "ftp://example.com/file"), None);
        assert_eq!(normalize(&base(), "data:text/plain,hello"), None);
    }

    #[test]
    fn test_whitespace_around_href_is_ignored() {
        let url = normalize(&base(), "  /about  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
    }
}
