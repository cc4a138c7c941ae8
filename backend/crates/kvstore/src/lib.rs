//! Credential Store Backend Module
//!
//! The `kvstore` table is a generic settings table. Provider integrations
//! read their secrets from it through [`CredentialStore`]; the operator
//! writes them through the generic upsert.
//!
//! Clean Architecture structure:
//! - `domain/` - Entry entity, known setting keys, repository trait
//! - `application/` - Credential lookup and upsert service
//! - `infra/` - Database implementation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::credential_store::{CredentialStore, TencentCredentials};
pub use domain::entity::{KvEntry, KvEntryView};
pub use domain::repository::KvRepository;
pub use domain::setting_key::SettingKey;
pub use error::{KvError, KvResult};
pub use infra::postgres::PgKvRepository;
