//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Token scheme and login/register use cases
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers, DTOs, router, token guard
//!
//! ## Security Model
//! - A single operator account; passwords stored as unsalted SHA-256 hex
//! - Stateless bearer tokens `"{user_id}.{hex(sha256(user_id + secret))}"`
//!   sent in a `token` header; no expiry, revoked only by rotating the secret
//! - Registration is gated by the same shared secret, not by an existing token

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenError, issue_token, verify_token};
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthenticatedUser, require_token};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
