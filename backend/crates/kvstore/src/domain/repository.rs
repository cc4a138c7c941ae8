//! Repository Traits

use crate::domain::entity::KvEntry;
use crate::error::KvResult;

/// Settings table access
#[trait_variant::make(KvRepository: Send)]
pub trait LocalKvRepository {
    /// Insert `key` or overwrite its value in place
    async fn upsert(&self, key: &str, value: &str) -> KvResult<KvEntry>;

    /// Stored value for `key`, if it was ever written
    async fn find_value(&self, key: &str) -> KvResult<Option<String>>;
}
