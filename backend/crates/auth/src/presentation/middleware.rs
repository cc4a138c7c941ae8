//! Token Guard
//!
//! Middleware for routes that require a bearer token. Layer it with
//! `axum::middleware::from_fn_with_state(config, require_token)`.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::extract_header;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::verify_token;
use crate::error::AuthError;

/// Caller identity stored in request extensions for downstream handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The uid as written in the token; not checked against the users table
    pub uid: String,
}

/// Middleware that requires a valid bearer token
pub async fn require_token(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_header(req.headers(), &config.token_header)?;
    let uid = verify_token(token, &config.token_secret)?;

    tracing::debug!(uid = %uid, "Bearer token accepted");
    req.extensions_mut().insert(AuthenticatedUser { uid });

    Ok(next.run(req).await)
}
