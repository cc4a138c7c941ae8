//! Domain Layer

pub mod provider;
pub mod record;
pub mod zone;

pub use provider::CloudflareApi;
pub use record::{ARecordRequest, DomainRecord};
pub use zone::Zone;
