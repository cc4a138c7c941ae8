//! Compute Proxy Backend Module
//!
//! Lists instances across the fixed region set and manages instance
//! firewall rules through the Tencent Cloud Lighthouse API.
//!
//! Clean Architecture structure:
//! - `domain/` - Firewall rule shape, region set, provider trait
//! - `application/` - Cached instance listing and firewall operations
//! - `infra/` - Lighthouse HTTP client and TC3-HMAC-SHA256 signing
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! All routes expect the auth token guard to be layered on by the caller.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::instance_service::{INSTANCE_CACHE_KEY, InstanceCache, InstanceService};
pub use domain::firewall_rule::{FirewallAction, FirewallProtocol, FirewallRule};
pub use domain::provider::{InstancePage, LighthouseApi};
pub use domain::region::{REGIONS, Region};
pub use error::{InstanceError, InstanceResult, TencentCloudError};
pub use infra::tencent::TencentLighthouseClient;
pub use presentation::router::instance_router;

#[cfg(test)]
mod tests;
