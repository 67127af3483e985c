// src/links/mod.rs
// =============================================================================
// This module contains everything about links: finding them in HTML,
// turning them into crawlable URLs, and deciding which site they belong to.
//
// Submodules:
// - normalize: Resolves an href against its page and strips the fragment
// - domain: Maps a URL to its registrable domain (public-suffix aware)
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod domain;
mod normalize;

pub use domain::registrable_domain;
pub use normalize::normalize;

use scraper::{Html, Selector};
use url::Url;

// Extracts every crawlable link from an HTML page
//
// Parameters:
//   html: the HTML content to parse
//   base: the URL of the page (for resolving relative links)
//
// Returns: normalized absolute URLs, in document order
//
// Links are NOT filtered by site here; the frontier decides what is in scope.
// Duplicates are kept too, the frontier already ignores URLs it has seen.
pub fn extract_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    // Our selector "a[href]" is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| normalize(base, href))
        .collect()
}
