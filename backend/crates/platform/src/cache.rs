//! In-process cache
//!
//! A keyed, process-lifetime store for values that are expensive to fetch.
//! Entries never expire: a value stays until it is overwritten by
//! [`MemoryCache::set`]. Concurrent writers to the same key are last-writer-wins.
//! Nothing is shared across processes.

use dashmap::DashMap;

/// Keyed in-memory cache, meant to be created once and shared behind an `Arc`
#[derive(Debug)]
pub struct MemoryCache<V> {
    entries: DashMap<String, V>,
}

impl<V: Clone> MemoryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get a clone of the value stored under `key`
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store `value` under `key`, returning the value it replaced
    pub fn set(&self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }
}

impl<V: Clone> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
