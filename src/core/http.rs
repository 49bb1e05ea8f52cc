//! HTTP utilities for draft API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

pub const DEFAULT_USER_AGENT: &str = concat!("draft-live/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every upstream request; `DRAFT_USER_AGENT` overrides the agent.
pub fn default_header_map() -> Result<HeaderMap> {
    let agent =
        std::env::var("DRAFT_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    header_map_with_agent(&agent)
}

/// The draft API rejects some requests without a browser-like `Accept`
/// and `Accept-Language`.
pub fn header_map_with_agent(agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("*/*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(USER_AGENT, HeaderValue::from_str(agent)?);
    Ok(h)
}
