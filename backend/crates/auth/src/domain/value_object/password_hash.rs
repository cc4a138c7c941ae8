//! Password Hash Value Object
//!
//! Stored as lowercase hex of an unsalted SHA-256 of the plaintext, which is
//! the format existing rows already use.

use platform::crypto::{constant_time_eq, sha256_hex};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_plaintext(plaintext: &str) -> Self {
        Self(sha256_hex(plaintext.as_bytes()))
    }

    /// Rebuild from a stored row
    pub fn from_stored(hex_digest: String) -> Self {
        Self(hex_digest)
    }

    pub fn verify(&self, plaintext: &str) -> bool {
        let candidate = sha256_hex(plaintext.as_bytes());
        constant_time_eq(candidate.as_bytes(), self.0.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
