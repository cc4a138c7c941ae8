//! DNS Proxy Backend Module
//!
//! Manages A records of the configured second-level domain through the
//! Cloudflare v4 API. The API token and the domain both come from the
//! credential store; the zone id is looked up fresh on every operation.
//!
//! Clean Architecture structure:
//! - `domain/` - Record and zone shapes, provider trait
//! - `application/` - Zone resolution, paginated listing, record writes
//! - `infra/` - Cloudflare HTTP client
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::dns_service::DnsService;
pub use domain::provider::CloudflareApi;
pub use domain::record::{ARecordRequest, DomainRecord};
pub use domain::zone::Zone;
pub use error::{DnsError, DnsResult};
pub use infra::cloudflare::CloudflareClient;
pub use presentation::router::dns_router;
