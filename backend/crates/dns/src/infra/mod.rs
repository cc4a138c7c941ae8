//! Infrastructure Layer

pub mod cloudflare;

pub use cloudflare::CloudflareClient;
