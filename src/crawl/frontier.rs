// src/crawl/frontier.rs
// =============================================================================
// The frontier is the list of pages we still want to visit.
//
// How it works:
// - A FIFO queue of (url, depth), so the crawl is breadth-first: every page
//   at depth d is handled before any page at depth d+1
// - A "queued" set and a "visited" set so we never queue or fetch a URL twice
// - Only URLs on the same registrable domain as the start URL get in
//
// Depth is checked in two places:
// - admits_children(): pages at max_depth don't add their links at all
// - next(): an entry deeper than max_depth is marked visited and reported
//   as TooDeep instead of being fetched, so it counts as one skip
//
// Rust concepts:
// - VecDeque: push_back() to enqueue, pop_front() to dequeue
// - HashSet: O(1) "have we seen this?" checks
// =============================================================================

use std::collections::{HashSet, VecDeque};

use url::Url;

use crate::links::registrable_domain;

// A page waiting to be crawled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: Url,
    // How many links away from the start URL (start = 0)
    pub depth: usize,
}

// What next() hands back to the crawler
#[derive(Debug, PartialEq, Eq)]
pub enum Next {
    // Not seen before and within depth: go fetch it. Already marked visited.
    Fetch(FrontierEntry),
    // Already visited, nothing to do
    Duplicate(FrontierEntry),
    // Deeper than max_depth. Marked visited without fetching.
    TooDeep(FrontierEntry),
}

#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    queued: HashSet<String>,
    visited: HashSet<String>,
    site: String,
    max_depth: usize,
}

impl Frontier {
    // Creates a frontier containing only the start URL at depth 0
    //
    // Returns None if the start URL has no host to scope the crawl to
    pub fn new(start: Url, max_depth: usize) -> Option<Self> {
        let site = registrable_domain(&start)?;

        let mut frontier = Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            site,
            max_depth,
        };
        frontier.enqueue(start, 0);

        Some(frontier)
    }

    // The registrable domain every crawled URL must share
    pub fn site(&self) -> &str {
        &self.site
    }

    // Adds a URL to the back of the queue
    //
    // Returns false (and does nothing) if the URL was already visited,
    // is already waiting in the queue, or belongs to another site
    pub fn enqueue(&mut self, url: Url, depth: usize) -> bool {
        let key = url.as_str();
        if self.visited.contains(key) || self.queued.contains(key) {
            return false;
        }

        if registrable_domain(&url).as_deref() != Some(self.site.as_str()) {
            return false;
        }

        self.queued.insert(key.to_string());
        self.queue.push_back(FrontierEntry { url, depth });
        true
    }

    // Takes the next entry off the front of the queue
    pub fn next(&mut self) -> Option<Next> {
        let entry = self.queue.pop_front()?;
        let key = entry.url.as_str();
        self.queued.remove(key);

        if !self.visited.insert(key.to_string()) {
            return Some(Next::Duplicate(entry));
        }

        if entry.depth > self.max_depth {
            return Some(Next::TooDeep(entry));
        }

        Some(Next::Fetch(entry))
    }

    // Whether links found on a page at `depth` should be followed
    pub fn admits_children(&self, depth: usize) -> bool {
        depth < self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn fetch_url(next: Option<Next>) -> String {
        match next {
            Some(Next::Fetch(entry)) => entry.url.to_string(),
            other => panic!("expected Fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_start_url_is_first() {
        let mut frontier = Frontier::new(url("https://example.com/"), 2).unwrap();
        assert_eq!(frontier.site(), "example.com");
        assert_eq!(
            frontier.next(),
            Some(Next::Fetch(FrontierEntry {
                url: url("https://example.com/"),
                depth: 0
            }))
        );
        assert!(frontier.is_empty());
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn test_breadth_first_order() {
        let mut frontier = Frontier::new(url("https://example.com/"), 3).unwrap();
        frontier.next();

        frontier.enqueue(url("https://example.com/a"), 1);
        frontier.enqueue(url("https://example.com/b"), 1);
        assert_eq!(fetch_url(frontier.next()), "https://example.com/a");

        // Found on /a, must wait until /b (same level) is done
        frontier.enqueue(url("https://example.com/a/child"), 2);
        assert_eq!(fetch_url(frontier.next()), "https://example.com/b");
        assert_eq!(fetch_url(frontier.next()), "https://example.com/a/child");
    }

    #[test]
    fn test_rejects_other_sites() {
        let mut frontier = Frontier::new(url("https://example.com/"), 2).unwrap();
        assert!(!frontier.enqueue(url("https://other.org/page"), 1));
        assert!(!frontier.enqueue(url("https://example.org/page"), 1));
    }

    #[test]
    fn test_accepts_subdomains() {
        let mut frontier = Frontier::new(url("https://example.com/"), 2).unwrap();
        assert!(frontier.enqueue(url("https://docs.example.com/intro"), 1));
    }

    #[test]
    fn test_rejects_already_queued() {
        let mut frontier = Frontier::new(url("https://example.com/"), 2).unwrap();
        assert!(frontier.enqueue(url("https://example.com/a"), 1));
        assert!(!frontier.enqueue(url("https://example.com/a"), 1));
        // The start URL is still queued too
        assert!(!frontier.enqueue(url("https://example.com/"), 1));
    }

    #[test]
    fn test_rejects_already_visited() {
        let mut frontier = Frontier::new(url("https://example.com/"), 2).unwrap();
        frontier.next();
        assert!(!frontier.enqueue(url("https://example.com/"), 1));
    }

    #[test]
    fn test_too_deep_entries_are_marked_visited() {
        let mut frontier = Frontier::new(url("https://example.com/"), 0).unwrap();
        frontier.next();

        assert!(frontier.enqueue(url("https://example.com/deep"), 1));
        assert!(matches!(frontier.next(), Some(Next::TooDeep(_))));
        assert!(!frontier.enqueue(url("https://example.com/deep"), 1));
    }

    #[test]
    fn test_admits_children_below_max_depth() {
        let frontier = Frontier::new(url("https://example.com/"), 2).unwrap();
        assert!(frontier.admits_children(0));
        assert!(frontier.admits_children(1));
        assert!(!frontier.admits_children(2));
    }
}
