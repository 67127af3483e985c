// src/links/domain.rs
// =============================================================================
// This module decides which "site" a URL belongs to.
//
// Comparing hostnames directly is too strict (blog.example.com would be a
// different site from example.com) and chopping off everything but the last
// two labels is wrong (example.co.uk would become co.uk). Instead we ask the
// public suffix list for the registrable domain:
//
//   https://example.com/a           -> example.com
//   https://docs.example.com/b      -> example.com
//   http://blog.example.co.uk/x     -> example.co.uk
//
// Hosts with no registrable domain (IP addresses, localhost) map to the
// host itself.
// =============================================================================

use url::{Host, Url};

// Returns the registrable domain of a URL, or None if it has no host
pub fn registrable_domain(url: &Url) -> Option<String> {
    let name = match url.host()? {
        Host::Domain(name) => name,
        Host::Ipv4(_) | Host::Ipv6(_) => return url.host_str().map(str::to_string),
    };

    let name = name.trim_end_matches('.');
    let domain = psl::domain_str(name).unwrap_or(name);

    Some(domain.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(url: &str) -> Option<String> {
        registrable_domain(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_plain_domain() {
        assert_eq!(domain("https://example.com/a").as_deref(), Some("example.com"));
    }

    #[test]
    fn test_subdomain_maps_to_base() {
        assert_eq!(domain("https://docs.example.com/b").as_deref(), Some("example.com"));
    }

    #[test]
    fn test_multi_label_suffix() {
        assert_eq!(
            domain("http://blog.example.co.uk/x").as_deref(),
            Some("example.co.uk")
        );
    }

    #[test]
    fn test_ip_address_is_its_own_site() {
        assert_eq!(domain("http://127.0.0.1:8080/").as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_localhost() {
        assert_eq!(domain("http://localhost:3000/").as_deref(), Some("localhost"));
    }
}
