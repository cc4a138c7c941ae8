//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

/// Default name of the request header carrying the bearer token
pub const DEFAULT_TOKEN_HEADER: &str = "token";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared secret: signs tokens and gates registration
    pub token_secret: String,
    /// Header the token guard reads
    pub token_header: String,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"<redacted>")
            .field("token_header", &self.token_header)
            .finish()
    }
}
