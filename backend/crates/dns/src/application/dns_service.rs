//! DNS Service
//!
//! Each record operation reads the API token and the managed domain from
//! the credential store, then resolves the zone id before the actual call.

use kvstore::{CredentialStore, KvEntry, KvRepository, SettingKey};
use serde_json::Value;
use std::sync::Arc;

use crate::application::pagination::{RECORDS_PER_PAGE, ZONES_PER_PAGE, collect_pages};
use crate::domain::provider::CloudflareApi;
use crate::domain::record::{ARecordRequest, DomainRecord};
use crate::domain::zone::find_zone_id;
use crate::error::{DnsError, DnsResult};

/// API token, managed domain and its zone id
struct ZoneContext {
    token: String,
    domain: String,
    zone_id: String,
}

pub struct DnsService<R, C> {
    credentials: CredentialStore<R>,
    api: Arc<C>,
}

impl<R, C> DnsService<R, C>
where
    R: KvRepository,
    C: CloudflareApi,
{
    pub fn new(credentials: CredentialStore<R>, api: Arc<C>) -> Self {
        Self { credentials, api }
    }

    /// Zone id of `domain` among all zones visible to `token`
    pub async fn resolve_zone_id(&self, token: &str, domain: &str) -> DnsResult<String> {
        let api = self.api.as_ref();
        let zones =
            collect_pages(move |page| api.list_zones_page(token, page, ZONES_PER_PAGE)).await?;

        find_zone_id(&zones, domain).ok_or_else(|| DnsError::ZoneNotFound(domain.to_string()))
    }

    async fn zone_context(&self) -> DnsResult<ZoneContext> {
        let token = self.credentials.require(SettingKey::CloudflareApi).await?;
        let domain = self.credentials.require(SettingKey::Sld).await?;
        let zone_id = self.resolve_zone_id(&token, &domain).await?;
        Ok(ZoneContext {
            token,
            domain,
            zone_id,
        })
    }

    /// Every record of the managed domain's zone
    pub async fn list_records(&self) -> DnsResult<Vec<DomainRecord>> {
        let zone = self.zone_context().await?;
        let api = self.api.as_ref();
        let (token, zone_id) = (zone.token.as_str(), zone.zone_id.as_str());

        let records = collect_pages(move |page| {
            api.list_records_page(token, zone_id, page, RECORDS_PER_PAGE)
        })
        .await?;

        tracing::debug!(domain = %zone.domain, count = records.len(), "Listed DNS records");
        Ok(records)
    }

    /// Create `prefix.<managed domain>` pointing at `address`
    pub async fn create_a_record(&self, prefix: &str, address: &str) -> DnsResult<Value> {
        let zone = self.zone_context().await?;
        let record = ARecordRequest::new(prefix, &zone.domain, address);

        let reply = self
            .api
            .create_record(&zone.token, &zone.zone_id, &record)
            .await?;

        tracing::info!(name = %record.name, content = %record.content, "DNS record created");
        Ok(reply)
    }

    pub async fn delete_record(&self, record_id: &str) -> DnsResult<()> {
        let zone = self.zone_context().await?;

        self.api
            .delete_record(&zone.token, &zone.zone_id, record_id)
            .await?;

        tracing::info!(record_id = %record_id, "DNS record deleted");
        Ok(())
    }

    /// Change the managed domain
    pub async fn set_managed_domain(&self, domain: &str) -> DnsResult<KvEntry> {
        Ok(self.credentials.set(SettingKey::Sld, domain).await?)
    }

    /// Generic credential write
    pub async fn update_setting(&self, key: &str, value: &str) -> DnsResult<KvEntry> {
        Ok(self.credentials.upsert(key, value).await?)
    }
}
