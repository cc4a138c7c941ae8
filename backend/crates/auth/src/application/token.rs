//! Token Scheme
//!
//! `"{uid}.{hex(sha256(uid + secret))}"`. Nothing is stored server-side: a
//! token is valid for as long as the secret is unchanged. Verification hands
//! back the uid exactly as it appears in the token; it is not looked up.

use std::fmt::Display;

use platform::crypto::{constant_time_eq, sha256_hex};

/// Why a presented token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Not exactly two `.`-separated parts
    #[error("malformed token")]
    Malformed,
    /// Digest does not match the uid under the current secret
    #[error("token digest mismatch")]
    DigestMismatch,
}

fn digest(uid: &str, secret: &str) -> String {
    let mut material = String::with_capacity(uid.len() + secret.len());
    material.push_str(uid);
    material.push_str(secret);
    sha256_hex(material.as_bytes())
}

/// Issue a token for `user_id`
pub fn issue_token(user_id: impl Display, secret: &str) -> String {
    let uid = user_id.to_string();
    let digest = digest(&uid, secret);
    format!("{uid}.{digest}")
}

/// Verify a presented token, returning the uid it carries
pub fn verify_token(token: &str, secret: &str) -> Result<String, TokenError> {
    let (uid, presented) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if presented.contains('.') {
        return Err(TokenError::Malformed);
    }

    let expected = digest(uid, secret);
    if !constant_time_eq(expected.as_bytes(), presented.as_bytes()) {
        return Err(TokenError::DigestMismatch);
    }

    Ok(uid.to_string())
}
