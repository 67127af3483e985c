// src/crawl/robots.rs
// =============================================================================
// This module answers one question: may we fetch this URL?
//
// At the start of a crawl we download robots.txt from the start URL's host
// once and keep it for the whole run. The answer for each URL then comes
// from Google's robots.txt matching rules (the `robotstxt` crate).
// Subdomains in scope (docs.example.com) are checked against those same
// rules; their own robots.txt is never fetched.
//
// Failing open:
// - robots.txt missing, unreachable, or a server error -> everything allowed
// - robots.txt answered 401/403 -> the site forbids crawling, nothing allowed
// A broken robots.txt never stops the crawl, it only loosens it.
// =============================================================================

use reqwest::{Client, StatusCode};
use robotstxt::DefaultMatcher;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Clone)]
enum Policy {
    AllowAll,
    DisallowAll,
    Rules(String),
}

#[derive(Debug, Clone)]
pub struct RobotsGate {
    agent: String,
    policy: Policy,
}

impl RobotsGate {
    // Downloads and caches robots.txt for the host of `start`
    //
    // Parameters:
    //   client: the crawl's HTTP client (already carries our User-Agent)
    //   start: the start URL of the crawl
    //   agent: the name robots.txt groups are matched against
    pub async fn fetch(client: &Client, start: &Url, agent: &str) -> Self {
        let policy = match start.join("/robots.txt") {
            Ok(robots_url) => fetch_policy(client, &robots_url).await,
            Err(e) => {
                warn!("Couldn't build robots.txt URL for {} ({}), continuing without rules", start, e);
                Policy::AllowAll
            }
        };

        Self {
            agent: agent.to_string(),
            policy,
        }
    }

    pub fn can_fetch(&self, url: &Url) -> bool {
        match &self.policy {
            Policy::AllowAll => true,
            Policy::DisallowAll => false,
            Policy::Rules(rules) => {
                DefaultMatcher::default().one_agent_allowed_by_robots(rules, &self.agent, url.as_str())
            }
        }
    }
}

async fn fetch_policy(client: &Client, robots_url: &Url) -> Policy {
    let response = match client.get(robots_url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Couldn't read robots.txt at {} ({}), continuing without rules", robots_url, e);
            return Policy::AllowAll;
        }
    };

    let status = response.status();
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        info!("robots.txt at {} answered {}, nothing may be fetched", robots_url, status);
        return Policy::DisallowAll;
    }
    if !status.is_success() {
        info!("No robots.txt at {} (HTTP {}), continuing without rules", robots_url, status.as_u16());
        return Policy::AllowAll;
    }

    match response.text().await {
        Ok(rules) => Policy::Rules(rules),
        Err(e) => {
            warn!("Couldn't read robots.txt body at {} ({}), continuing without rules", robots_url, e);
            Policy::AllowAll
        }
    }
}
