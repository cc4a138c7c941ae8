//! KVStore Entry

use kernel::id::KvEntryId;
use serde::Serialize;

/// One row of the settings table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvEntry {
    pub id: KvEntryId,
    /// Unique setting name
    pub key: String,
    pub value: String,
}

/// Wire shape of a stored entry; the id is not exposed
#[derive(Debug, Serialize)]
pub struct KvEntryView {
    pub key: String,
    pub value: String,
}

impl From<KvEntry> for KvEntryView {
    fn from(entry: KvEntry) -> Self {
        Self {
            key: entry.key,
            value: entry.value,
        }
    }
}
