//! Envoy URL parsing.
//!
//! # Responsibilities
//! - Recognize envoy-style URLs by scheme
//! - Extract `header_*` query parameters as proxy header directives
//!
//! # Design Decisions
//! - Pure functions, no side effects
//! - Query text is taken raw; no percent-decoding, matching what the proxy
//!   endpoint expects on the wire
//! - Malformed queries degrade to zero headers, never an error

use url::Url;

/// Query parameter key prefix marking a header directive.
const HEADER_PREFIX: &str = "header_";

/// Schemes accepted for envoy URLs.
const ENVOY_SCHEMES: [&str; 3] = ["envoy", "envoy+http", "envoy+https"];

/// Whether the URL is an envoy-style URL eligible for header extraction.
pub fn is_envoy_url(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }
    match Url::parse(raw) {
        Ok(url) => ENVOY_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// Extract proxy header directives from an envoy URL's query string.
///
/// Each query parameter whose key starts with `header_` (and is longer than
/// the prefix) yields one `(name, value)` pair, in query order. Parameters
/// without a value are skipped. A missing or malformed query yields an
/// empty vec.
pub fn proxy_headers(raw: &str) -> Vec<(String, String)> {
    let Ok(url) = Url::parse(raw) else {
        return Vec::new();
    };
    let Some(query) = url.query() else {
        return Vec::new();
    };

    let mut headers = Vec::new();
    for param in query.split('&') {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if let Some(name) = key.strip_prefix(HEADER_PREFIX) {
            if !name.is_empty() {
                headers.push((name.to_string(), value.to_string()));
            }
        }
    }
    headers
}
