//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-SHA256, hex)
//! - The process-wide in-memory cache
//! - Outbound HTTP client construction and request header helpers

pub mod cache;
pub mod client;
pub mod crypto;
