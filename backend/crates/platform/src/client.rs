//! HTTP client utilities
//!
//! The outbound client shared by the provider integrations, and helpers
//! for reading values off inbound request headers.

use axum::http::HeaderMap;

const USER_AGENT: &str = concat!("devresmgr/", env!("CARGO_PKG_VERSION"));

/// Build the outbound HTTP client
///
/// Built once at startup and cloned into each provider client; clones share
/// one connection pool. No request timeout is configured, so a provider that
/// never answers holds the calling request open.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Error when reading a request header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
    #[error("Header is not valid visible ASCII: {0}")]
    InvalidHeader(String),
}

/// Read a required header as a string
///
/// ## Returns
/// * `Ok(&str)` - The header value
/// * `Err(HeaderError)` - Header absent or not representable as a string
pub fn extract_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, HeaderError> {
    let value = headers
        .get(name)
        .ok_or_else(|| HeaderError::MissingHeader(name.to_string()))?;

    value
        .to_str()
        .map_err(|_| HeaderError::InvalidHeader(name.to_string()))
}
