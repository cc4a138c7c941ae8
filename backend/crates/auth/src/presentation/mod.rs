//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the token guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthenticatedUser, require_token};
pub use router::auth_router;
