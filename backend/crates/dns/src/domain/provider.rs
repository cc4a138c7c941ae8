//! Provider Trait
//!
//! The Cloudflare endpoints this service uses. Listing calls take a 1-based
//! page number; an empty page marks the end.

use serde_json::Value;

use crate::domain::record::{ARecordRequest, DomainRecord};
use crate::domain::zone::Zone;
use crate::error::DnsResult;

#[trait_variant::make(CloudflareApi: Send)]
pub trait LocalCloudflareApi {
    /// `GET /zones`
    async fn list_zones_page(
        &self,
        token: &str,
        page: u32,
        per_page: u32,
    ) -> DnsResult<Vec<Zone>>;

    /// `GET /zones/{zone_id}/dns_records`
    async fn list_records_page(
        &self,
        token: &str,
        zone_id: &str,
        page: u32,
        per_page: u32,
    ) -> DnsResult<Vec<DomainRecord>>;

    /// `POST /zones/{zone_id}/dns_records`; returns the raw reply body
    async fn create_record(
        &self,
        token: &str,
        zone_id: &str,
        record: &ARecordRequest,
    ) -> DnsResult<Value>;

    /// `DELETE /zones/{zone_id}/dns_records/{record_id}`
    async fn delete_record(&self, token: &str, zone_id: &str, record_id: &str) -> DnsResult<()>;
}
