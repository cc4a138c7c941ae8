//! Instance Service
//!
//! Cached multi-region instance listing and the firewall rule operations.
//! Credentials are resolved before any provider call; a missing key fails
//! without touching the network.

use platform::cache::MemoryCache;
use serde_json::Value;
use std::sync::Arc;

use kvstore::{CredentialStore, KvRepository};

use crate::domain::firewall_rule::FirewallRule;
use crate::domain::provider::LighthouseApi;
use crate::domain::region::REGIONS;
use crate::error::{InstanceError, InstanceResult};

/// Cache slot holding the aggregated instance list
pub const INSTANCE_CACHE_KEY: &str = "all_instances";

/// `DescribeInstances` page size
const INSTANCE_PAGE_LIMIT: u64 = 100;

/// Process-wide cache of the aggregated instance list
///
/// A stored list is returned until the next refresh overwrites it.
pub type InstanceCache = MemoryCache<Arc<Vec<Value>>>;

pub struct InstanceService<R, L> {
    credentials: CredentialStore<R>,
    api: Arc<L>,
    cache: Arc<InstanceCache>,
}

impl<R, L> InstanceService<R, L>
where
    R: KvRepository,
    L: LighthouseApi,
{
    pub fn new(credentials: CredentialStore<R>, api: Arc<L>, cache: Arc<InstanceCache>) -> Self {
        Self {
            credentials,
            api,
            cache,
        }
    }

    /// Every instance in every region
    ///
    /// Served from the cache unless `refresh` is set or nothing non-empty
    /// is cached. A provider failure in any region fails the whole call and
    /// leaves the cache as it was.
    pub async fn list_all(&self, refresh: bool) -> InstanceResult<Arc<Vec<Value>>> {
        if !refresh {
            if let Some(cached) = self.cache.get(INSTANCE_CACHE_KEY) {
                if !cached.is_empty() {
                    tracing::debug!(count = cached.len(), "Instance list served from cache");
                    return Ok(cached);
                }
            }
        }

        let credentials = self.credentials.tencent_credentials().await?;

        let mut all = Vec::new();
        for region in REGIONS {
            let mut offset = 0;
            loop {
                let page = self
                    .api
                    .describe_instances(&credentials, region.id, offset, INSTANCE_PAGE_LIMIT)
                    .await?;
                let fetched = page.instances.len() as u64;
                all.extend(page.instances);
                offset += fetched;
                if fetched == 0 || offset >= page.total_count {
                    break;
                }
            }
        }

        let all = Arc::new(all);
        self.cache.set(INSTANCE_CACHE_KEY, all.clone());
        tracing::info!(count = all.len(), "Instance list refreshed");

        Ok(all)
    }

    pub async fn firewall_rules(&self, instance_id: &str, region: &str) -> InstanceResult<Value> {
        let credentials = self.credentials.tencent_credentials().await?;
        self.api
            .describe_firewall_rules(&credentials, region, instance_id)
            .await
    }

    /// Create one rule; returns the provider response as JSON text
    pub async fn add_firewall_rule(
        &self,
        instance_id: &str,
        region: &str,
        rule: FirewallRule,
    ) -> InstanceResult<String> {
        let credentials = self.credentials.tencent_credentials().await?;
        let response = self
            .api
            .create_firewall_rules(&credentials, region, instance_id, &[rule])
            .await?;

        tracing::info!(instance_id = %instance_id, region = %region, "Firewall rule added");
        to_text(&response)
    }

    /// Delete one rule; the description is not sent
    pub async fn delete_firewall_rule(
        &self,
        instance_id: &str,
        region: &str,
        rule: FirewallRule,
    ) -> InstanceResult<String> {
        let credentials = self.credentials.tencent_credentials().await?;
        let response = self
            .api
            .delete_firewall_rules(&credentials, region, instance_id, &[rule])
            .await?;

        tracing::info!(instance_id = %instance_id, region = %region, "Firewall rule deleted");
        to_text(&response)
    }
}

fn to_text(response: &Value) -> InstanceResult<String> {
    serde_json::to_string(response).map_err(|e| InstanceError::Internal(e.to_string()))
}
