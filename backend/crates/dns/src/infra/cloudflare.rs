//! Cloudflare v4 HTTP Client

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::provider::CloudflareApi;
use crate::domain::record::{ARecordRequest, DomainRecord};
use crate::domain::zone::Zone;
use crate::error::{DnsError, DnsResult};

pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare API client over the shared HTTP client
#[derive(Clone)]
pub struct CloudflareClient {
    http: reqwest::Client,
    base_url: String,
}

impl CloudflareClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, CLOUDFLARE_API_BASE)
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Send with the bearer token, failing on any non-success status
    async fn send(&self, request: RequestBuilder, token: &str) -> DnsResult<Response> {
        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(DnsError::UpstreamStatus {
            status: status.as_u16(),
            message: error_message(&body).unwrap_or(body),
        })
    }

    /// `result` of a list reply; absent means an empty page
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        page: u32,
        per_page: u32,
    ) -> DnsResult<Vec<T>> {
        let request = self
            .http
            .get(self.url(path))
            .query(&[("page", page), ("per_page", per_page)]);
        let reply: ListReply<T> = self.send(request, token).await?.json().await?;
        Ok(reply.result.unwrap_or_default())
    }
}

#[derive(Deserialize)]
struct ListReply<T> {
    result: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct ErrorReply {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// First `errors[].message` of a failure body, if it has one
fn error_message(body: &str) -> Option<String> {
    let reply: ErrorReply = serde_json::from_str(body).ok()?;
    reply.errors.into_iter().next().map(|e| e.message)
}

impl CloudflareApi for CloudflareClient {
    async fn list_zones_page(
        &self,
        token: &str,
        page: u32,
        per_page: u32,
    ) -> DnsResult<Vec<Zone>> {
        self.list("/zones", token, page, per_page).await
    }

    async fn list_records_page(
        &self,
        token: &str,
        zone_id: &str,
        page: u32,
        per_page: u32,
    ) -> DnsResult<Vec<DomainRecord>> {
        self.list(&format!("/zones/{zone_id}/dns_records"), token, page, per_page)
            .await
    }

    async fn create_record(
        &self,
        token: &str,
        zone_id: &str,
        record: &ARecordRequest,
    ) -> DnsResult<Value> {
        let request = self
            .http
            .post(self.url(&format!("/zones/{zone_id}/dns_records")))
            .json(record);
        Ok(self.send(request, token).await?.json().await?)
    }

    async fn delete_record(&self, token: &str, zone_id: &str, record_id: &str) -> DnsResult<()> {
        let request = self
            .http
            .delete(self.url(&format!("/zones/{zone_id}/dns_records/{record_id}")));
        self.send(request, token).await?;
        Ok(())
    }
}
