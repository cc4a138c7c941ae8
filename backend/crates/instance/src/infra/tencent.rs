//! Lighthouse HTTP Client
//!
//! Every action is a signed JSON `POST /` to the regional API. The reply is
//! always `{"Response": {...}}`; a failure carries `Response.Error`.

use chrono::Utc;
use kvstore::TencentCredentials;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::domain::firewall_rule::FirewallRule;
use crate::domain::provider::{InstancePage, LighthouseApi};
use crate::error::{InstanceError, InstanceResult, TencentCloudError};
use crate::infra::signer::{CONTENT_TYPE, SigningInput};

pub const LIGHTHOUSE_HOST: &str = "lighthouse.tencentcloudapi.com";
const SERVICE: &str = "lighthouse";
const API_VERSION: &str = "2020-03-24";

/// Page size of `DescribeFirewallRules`
const FIREWALL_RULE_LIMIT: u64 = 100;

/// Lighthouse API client over the shared HTTP client
#[derive(Clone)]
pub struct TencentLighthouseClient {
    http: reqwest::Client,
    scheme: &'static str,
    host: String,
}

impl TencentLighthouseClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_endpoint(http, "https", LIGHTHOUSE_HOST)
    }

    /// Client for another endpoint; `host` is also what gets signed
    pub fn with_endpoint(
        http: reqwest::Client,
        scheme: &'static str,
        host: impl Into<String>,
    ) -> Self {
        Self {
            http,
            scheme,
            host: host.into(),
        }
    }

    async fn call(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        action: &str,
        payload: &Value,
    ) -> InstanceResult<Map<String, Value>> {
        let body =
            serde_json::to_string(payload).map_err(|e| InstanceError::Internal(e.to_string()))?;
        let signing = SigningInput {
            host: &self.host,
            service: SERVICE,
            action,
            payload: &body,
            timestamp: Utc::now(),
        };

        tracing::debug!(action = %action, region = %region, "Calling compute provider");

        let response = self
            .http
            .post(format!("{}://{}/", self.scheme, self.host))
            .header("Authorization", signing.authorization(credentials))
            .header("Content-Type", CONTENT_TYPE)
            .header("X-TC-Action", action)
            .header("X-TC-Timestamp", signing.timestamp.timestamp().to_string())
            .header("X-TC-Version", API_VERSION)
            .header("X-TC-Region", region)
            .body(body)
            .send()
            .await
            .map_err(TencentCloudError::network)?;

        let envelope: Envelope = response
            .json()
            .await
            .map_err(TencentCloudError::network)?;

        Ok(envelope.into_result()?)
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Response")]
    response: Map<String, Value>,
}

#[derive(Deserialize)]
struct ProviderError {
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
}

impl Envelope {
    fn into_result(mut self) -> Result<Map<String, Value>, TencentCloudError> {
        let Some(error) = self.response.remove("Error") else {
            return Ok(self.response);
        };
        let request_id = self
            .response
            .get("RequestId")
            .and_then(Value::as_str)
            .map(str::to_string);
        let error: ProviderError =
            serde_json::from_value(error).map_err(TencentCloudError::network)?;

        Err(TencentCloudError {
            code: error.code,
            message: error.message,
            request_id,
        })
    }
}

impl LighthouseApi for TencentLighthouseClient {
    async fn describe_instances(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        offset: u64,
        limit: u64,
    ) -> InstanceResult<InstancePage> {
        let mut response = self
            .call(
                credentials,
                region,
                "DescribeInstances",
                &json!({ "Offset": offset, "Limit": limit }),
            )
            .await?;

        let total_count = response
            .get("TotalCount")
            .and_then(Value::as_u64)
            .unwrap_or_default();
        let instances = match response.remove("InstanceSet") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        Ok(InstancePage {
            total_count,
            instances,
        })
    }

    async fn describe_firewall_rules(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        instance_id: &str,
    ) -> InstanceResult<Value> {
        let mut response = self
            .call(
                credentials,
                region,
                "DescribeFirewallRules",
                &json!({
                    "InstanceId": instance_id,
                    "Offset": 0,
                    "Limit": FIREWALL_RULE_LIMIT,
                }),
            )
            .await?;

        Ok(response
            .remove("FirewallRuleSet")
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn create_firewall_rules(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        instance_id: &str,
        rules: &[FirewallRule],
    ) -> InstanceResult<Value> {
        let response = self
            .call(
                credentials,
                region,
                "CreateFirewallRules",
                &json!({ "InstanceId": instance_id, "FirewallRules": rules }),
            )
            .await?;

        Ok(Value::Object(response))
    }

    async fn delete_firewall_rules(
        &self,
        credentials: &TencentCredentials,
        region: &str,
        instance_id: &str,
        rules: &[FirewallRule],
    ) -> InstanceResult<Value> {
        let selectors: Vec<_> = rules.iter().map(FirewallRule::selector).collect();
        let response = self
            .call(
                credentials,
                region,
                "DeleteFirewallRules",
                &json!({ "InstanceId": instance_id, "FirewallRules": selectors }),
            )
            .await?;

        Ok(Value::Object(response))
    }
}
