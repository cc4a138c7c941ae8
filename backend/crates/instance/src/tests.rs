//! Service and router tests against an in-memory settings table and a
//! scripted provider, plus HTTP client tests against a local Lighthouse stand-in

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use kernel::id::KvEntryId;
use kvstore::{CredentialStore, KvEntry, KvRepository, KvResult, SettingKey, TencentCredentials};
use serde_json::{Value, json};

use crate::application::instance_service::{INSTANCE_CACHE_KEY, InstanceCache, InstanceService};
use crate::domain::firewall_rule::FirewallRule;
use crate::domain::provider::{InstancePage, LighthouseApi};
use crate::domain::region::REGIONS;
use crate::error::{InstanceError, InstanceResult, TencentCloudError};

#[derive(Default)]
struct MemoryKvRepository {
    rows: Mutex<HashMap<String, String>>,
}

impl KvRepository for MemoryKvRepository {
    async fn upsert(&self, key: &str, value: &str) -> KvResult<KvEntry> {
        self.rows
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(KvEntry {
            id: KvEntryId::from_i32(1),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    async fn find_value(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.rows.lock().unwrap().get(key).cloned())
    }
}

/// Provider returning `per_region` instances in every region, paged
#[derive(Default)]
struct ScriptedLighthouse {
    per_region: u64,
    failing_region: Option<&'static str>,
    describe_calls: AtomicUsize,
    rule_calls: AtomicUsize,
    last_rules: Mutex<Vec<FirewallRule>>,
}

impl ScriptedLighthouse {
    fn with_instances(per_region: u64) -> Self {
        Self {
            per_region,
            ..Self::default()
        }
    }
}

impl LighthouseApi for ScriptedLighthouse {
    async fn describe_instances(
        &self,
        _credentials: &TencentCredentials,
        region: &str,
        offset: u64,
        limit: u64,
    ) -> InstanceResult<InstancePage> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_region.is_some_and(|r| r == region) {
            return Err(TencentCloudError {
                code: "UnauthorizedOperation".to_string(),
                message: "region disabled".to_string(),
                request_id: Some("req-1".to_string()),
            }
            .into());
        }
        let end = (offset + limit).min(self.per_region);
        let instances = (offset..end)
            .map(|i| json!({ "InstanceId": format!("{region}-{i}"), "Region": region }))
            .collect();
        Ok(InstancePage {
            total_count: self.per_region,
            instances,
        })
    }

    async fn describe_firewall_rules(
        &self,
        _credentials: &TencentCredentials,
        _region: &str,
        instance_id: &str,
    ) -> InstanceResult<Value> {
        self.rule_calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!([{ "Protocol": "TCP", "Port": "22", "InstanceId": instance_id }]))
    }

    async fn create_firewall_rules(
        &self,
        _credentials: &TencentCredentials,
        _region: &str,
        _instance_id: &str,
        rules: &[FirewallRule],
    ) -> InstanceResult<Value> {
        self.rule_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_rules.lock().unwrap() = rules.to_vec();
        Ok(json!({ "RequestId": "req-create" }))
    }

    async fn delete_firewall_rules(
        &self,
        _credentials: &TencentCredentials,
        _region: &str,
        _instance_id: &str,
        rules: &[FirewallRule],
    ) -> InstanceResult<Value> {
        self.rule_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_rules.lock().unwrap() = rules.to_vec();
        Ok(json!({ "RequestId": "req-delete" }))
    }
}

type TestService = InstanceService<MemoryKvRepository, ScriptedLighthouse>;

async fn service_with(
    api: ScriptedLighthouse,
    configured: bool,
) -> (Arc<TestService>, Arc<ScriptedLighthouse>, Arc<InstanceCache>) {
    let store = CredentialStore::new(Arc::new(MemoryKvRepository::default()));
    if configured {
        store.set(SettingKey::TencentSecretId, "AKID").await.unwrap();
        store.set(SettingKey::TencentSecretKey, "key").await.unwrap();
    }
    let api = Arc::new(api);
    let cache = Arc::new(InstanceCache::new());
    let service = Arc::new(InstanceService::new(store, api.clone(), cache.clone()));
    (service, api, cache)
}

fn rule_body() -> Value {
    json!({
        "Protocol": "TCP",
        "Port": "443",
        "CidrBlock": "0.0.0.0/0",
        "Ipv6CidrBlock": "::/0",
        "Action": "ACCEPT",
        "FirewallRuleDescription": "https"
    })
}

#[cfg(test)]
mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_scans_every_region() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(2), true).await;

        let all = service.list_all(false).await.unwrap();

        assert_eq!(all.len(), 2 * REGIONS.len());
        assert_eq!(api.describe_calls.load(Ordering::SeqCst), REGIONS.len());
        assert_eq!(all[0]["Region"], json!(REGIONS[0].id));
    }

    #[tokio::test]
    async fn test_list_all_pages_large_regions() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(150), true).await;

        let all = service.list_all(false).await.unwrap();

        assert_eq!(all.len(), 150 * REGIONS.len());
        assert_eq!(api.describe_calls.load(Ordering::SeqCst), 2 * REGIONS.len());
    }

    #[tokio::test]
    async fn test_cached_list_is_returned_without_provider_call() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(1), true).await;

        let first = service.list_all(false).await.unwrap();
        let second = service.list_all(false).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(api.describe_calls.load(Ordering::SeqCst), REGIONS.len());
    }

    #[tokio::test]
    async fn test_refresh_always_calls_provider() {
        let (service, api, cache) = service_with(ScriptedLighthouse::with_instances(1), true).await;

        let first = service.list_all(false).await.unwrap();
        let refreshed = service.list_all(true).await.unwrap();

        assert!(!Arc::ptr_eq(&first, &refreshed));
        assert_eq!(api.describe_calls.load(Ordering::SeqCst), 2 * REGIONS.len());
        let cached = cache.get(INSTANCE_CACHE_KEY).unwrap();
        assert!(Arc::ptr_eq(&cached, &refreshed));
    }

    #[tokio::test]
    async fn test_empty_cached_list_is_refetched() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(0), true).await;

        service.list_all(false).await.unwrap();
        service.list_all(false).await.unwrap();

        assert_eq!(api.describe_calls.load(Ordering::SeqCst), 2 * REGIONS.len());
    }

    #[tokio::test]
    async fn test_region_failure_discards_partial_results() {
        let api = ScriptedLighthouse {
            per_region: 3,
            failing_region: Some("ap-seoul"),
            ..ScriptedLighthouse::default()
        };
        let (service, _, cache) = service_with(api, true).await;

        let err = service.list_all(false).await.unwrap_err();

        assert!(matches!(err, InstanceError::Upstream(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("region disabled"));
        assert!(cache.get(INSTANCE_CACHE_KEY).is_none());
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_provider() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(1), false).await;

        let err = service.firewall_rules("lhins-1", "ap-tokyo").await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Tencent credentials not found");
        assert_eq!(api.rule_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_add_rule_sends_single_rule_and_returns_text() {
        let (service, api, _) = service_with(ScriptedLighthouse::default(), true).await;
        let rule: FirewallRule = serde_json::from_value(rule_body()).unwrap();

        let text = service
            .add_firewall_rule("lhins-1", "ap-tokyo", rule.clone())
            .await
            .unwrap();

        assert_eq!(text, r#"{"RequestId":"req-create"}"#);
        assert_eq!(*api.last_rules.lock().unwrap(), vec![rule]);
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::presentation::router::instance_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn with_rule(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_info_all_with_refresh_flag() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(1), true).await;
        let app = instance_router(service);

        for uri in ["/info/all", "/info/all", "/info/all?refresh=true"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body.as_array().unwrap().len(), REGIONS.len());
        }

        assert_eq!(api.describe_calls.load(Ordering::SeqCst), 2 * REGIONS.len());
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_refresh_accepts_flag_words() {
        let (service, api, _) = service_with(ScriptedLighthouse::with_instances(1), true).await;
        let app = instance_router(service);

        // The first request fills the cache; falsy words keep serving it
        let expected_scans = [
            ("refresh=0", 1),
            ("refresh=off", 1),
            ("refresh=False", 1),
            ("refresh=1", 2),
            ("refresh=True", 3),
            ("refresh=yes", 4),
            ("refresh=on", 5),
        ];
        for (query, scans) in expected_scans {
            let response = app
                .clone()
                .oneshot(get(&format!("/info/all?{query}")))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{query}");
            assert_eq!(
                api.describe_calls.load(Ordering::SeqCst),
                scans * REGIONS.len(),
                "{query}"
            );
        }

        let response = app.oneshot(get("/info/all?refresh=maybe")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_firewall_rules_without_credentials_is_404() {
        let (service, _, _) = service_with(ScriptedLighthouse::default(), false).await;

        let response = instance_router(service)
            .oneshot(
                Request::builder()
                    .uri("/firewallRules?instance_id=lhins-1&region=ap-tokyo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["detail"], json!("Tencent credentials not found"));
    }

    #[tokio::test]
    async fn test_delete_rule_accepts_full_body() {
        let (service, api, _) = service_with(ScriptedLighthouse::default(), true).await;

        let response = instance_router(service)
            .oneshot(with_rule(
                "DELETE",
                "/firewallRules?instance_id=lhins-1&region=ap-tokyo",
                rule_body(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(r#"{"RequestId":"req-delete"}"#));
        assert_eq!(api.last_rules.lock().unwrap()[0].port, "443");
    }

    #[tokio::test]
    async fn test_bad_protocol_is_422() {
        let (service, api, _) = service_with(ScriptedLighthouse::default(), true).await;
        let mut body = rule_body();
        body["Protocol"] = json!("SCTP");

        let response = instance_router(service)
            .oneshot(with_rule(
                "POST",
                "/firewallRules?instance_id=lhins-1&region=ap-tokyo",
                body,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api.rule_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_query_is_422() {
        let (service, _, _) = service_with(ScriptedLighthouse::default(), true).await;

        let response = instance_router(service)
            .oneshot(
                Request::builder()
                    .uri("/firewallRules?region=ap-tokyo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;
    use crate::error::CLIENT_NETWORK_ERROR;
    use crate::infra::signer::SigningInput;
    use crate::infra::tencent::TencentLighthouseClient;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::{Json, Router};
    use chrono::DateTime;

    /// Action, region and decoded body of every call that passed the signature check
    type Calls = Arc<Mutex<Vec<(String, String, Value)>>>;

    fn credentials() -> TencentCredentials {
        TencentCredentials {
            secret_id: "AKID".to_string(),
            secret_key: "key".to_string(),
        }
    }

    fn header(headers: &HeaderMap, name: &str) -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn provider_error(code: &str, message: &str, request_id: &str) -> Value {
        json!({
            "Response": {
                "Error": { "Code": code, "Message": message },
                "RequestId": request_id
            }
        })
    }

    /// Lighthouse stand-in: verifies the TC3 signature against the `Host` it
    /// was reached on, then answers by action and region
    async fn lighthouse(
        State(calls): State<Calls>,
        headers: HeaderMap,
        body: String,
    ) -> Response {
        let action = header(&headers, "x-tc-action");
        let region = header(&headers, "x-tc-region");
        let host = header(&headers, "host");
        let timestamp = header(&headers, "x-tc-timestamp")
            .parse::<i64>()
            .unwrap_or_default();
        let expected = SigningInput {
            host: &host,
            service: "lighthouse",
            action: &action,
            payload: &body,
            timestamp: DateTime::from_timestamp(timestamp, 0).unwrap_or_default(),
        }
        .authorization(&credentials());
        if header(&headers, "authorization") != expected {
            let reply =
                provider_error("AuthFailure.SignatureFailure", "signature mismatch", "r-sig");
            return Json(reply).into_response();
        }

        let payload = serde_json::from_str(&body).unwrap_or(Value::Null);
        calls
            .lock()
            .unwrap()
            .push((action.clone(), region.clone(), payload));

        let reply = match (action.as_str(), region.as_str()) {
            (_, "ap-chengdu") => {
                return (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response();
            }
            ("DescribeInstances", "ap-seoul") => {
                provider_error("UnauthorizedOperation", "region disabled", "r-seoul")
            }
            ("DescribeInstances", _) => json!({
                "Response": {
                    "TotalCount": 1,
                    "InstanceSet": [{ "InstanceId": "lhins-1" }],
                    "RequestId": "r-list"
                }
            }),
            ("DescribeFirewallRules", _) => json!({
                "Response": {
                    "TotalCount": 1,
                    "FirewallRuleSet": [{ "Protocol": "TCP", "Port": "22" }],
                    "RequestId": "r-rules"
                }
            }),
            _ => json!({ "Response": { "RequestId": "r-write" } }),
        };
        Json(reply).into_response()
    }

    async fn fake_lighthouse() -> (TencentLighthouseClient, Calls) {
        let calls = Calls::default();
        let app = Router::new()
            .route("/", post(lighthouse))
            .with_state(calls.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = TencentLighthouseClient::with_endpoint(
            reqwest::Client::new(),
            "http",
            addr.to_string(),
        );
        (client, calls)
    }

    fn upstream(err: InstanceError) -> TencentCloudError {
        match err {
            InstanceError::Upstream(e) => e,
            other => panic!("expected a provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_describe_instances_signed_and_unwrapped() {
        let (client, calls) = fake_lighthouse().await;

        let page = client
            .describe_instances(&credentials(), "ap-tokyo", 0, 100)
            .await
            .unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.instances[0]["InstanceId"], json!("lhins-1"));
        assert_eq!(
            *calls.lock().unwrap(),
            vec![(
                "DescribeInstances".to_string(),
                "ap-tokyo".to_string(),
                json!({ "Offset": 0, "Limit": 100 })
            )]
        );
    }

    #[tokio::test]
    async fn test_wrong_secret_fails_signature_check() {
        let (client, calls) = fake_lighthouse().await;
        let wrong = TencentCredentials {
            secret_id: "AKID".to_string(),
            secret_key: "not-the-key".to_string(),
        };

        let err = client
            .describe_instances(&wrong, "ap-tokyo", 0, 100)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(upstream(err).code, "AuthFailure.SignatureFailure");
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_keeps_request_id() {
        let (client, _) = fake_lighthouse().await;

        let err = client
            .describe_instances(&credentials(), "ap-seoul", 0, 100)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "[TencentCloudSDKException] code:UnauthorizedOperation \
             message:region disabled requestId:r-seoul"
        );
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_network_error() {
        let (client, _) = fake_lighthouse().await;

        let err = client
            .describe_firewall_rules(&credentials(), "ap-chengdu", "lhins-1")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        let err = upstream(err);
        assert_eq!(err.code, CLIENT_NETWORK_ERROR);
        assert_eq!(err.request_id, None);
    }

    #[tokio::test]
    async fn test_firewall_rules_listed_with_limit() {
        let (client, calls) = fake_lighthouse().await;

        let rules = client
            .describe_firewall_rules(&credentials(), "ap-tokyo", "lhins-1")
            .await
            .unwrap();

        assert_eq!(rules, json!([{ "Protocol": "TCP", "Port": "22" }]));
        assert_eq!(
            calls.lock().unwrap()[0].2,
            json!({ "InstanceId": "lhins-1", "Offset": 0, "Limit": 100 })
        );
    }

    #[tokio::test]
    async fn test_create_sends_full_rule() {
        let (client, calls) = fake_lighthouse().await;
        let rule: FirewallRule = serde_json::from_value(rule_body()).unwrap();

        let reply = client
            .create_firewall_rules(&credentials(), "ap-tokyo", "lhins-1", &[rule])
            .await
            .unwrap();

        assert_eq!(reply, json!({ "RequestId": "r-write" }));
        let (action, _, body) = calls.lock().unwrap()[0].clone();
        assert_eq!(action, "CreateFirewallRules");
        assert_eq!(
            body,
            json!({ "InstanceId": "lhins-1", "FirewallRules": [rule_body()] })
        );
    }

    #[tokio::test]
    async fn test_delete_sends_rule_without_description() {
        let (client, calls) = fake_lighthouse().await;
        let rule: FirewallRule = serde_json::from_value(rule_body()).unwrap();

        client
            .delete_firewall_rules(&credentials(), "ap-tokyo", "lhins-1", &[rule])
            .await
            .unwrap();

        let (action, region, body) = calls.lock().unwrap()[0].clone();
        assert_eq!(action, "DeleteFirewallRules");
        assert_eq!(region, "ap-tokyo");
        assert_eq!(
            body,
            json!({
                "InstanceId": "lhins-1",
                "FirewallRules": [{
                    "Protocol": "TCP",
                    "Port": "443",
                    "CidrBlock": "0.0.0.0/0",
                    "Ipv6CidrBlock": "::/0",
                    "Action": "ACCEPT"
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_service_scan_over_http_stops_on_failing_region() {
        let (client, calls) = fake_lighthouse().await;
        let store = CredentialStore::new(Arc::new(MemoryKvRepository::default()));
        store.set(SettingKey::TencentSecretId, "AKID").await.unwrap();
        store.set(SettingKey::TencentSecretKey, "key").await.unwrap();
        let cache = Arc::new(InstanceCache::new());
        let service = InstanceService::new(store, Arc::new(client), cache.clone());

        let err = service.list_all(false).await.unwrap_err();

        assert_eq!(upstream(err).code, CLIENT_NETWORK_ERROR);
        assert!(cache.get(INSTANCE_CACHE_KEY).is_none());
        let regions: Vec<_> = calls.lock().unwrap().iter().map(|c| c.1.clone()).collect();
        let first_failing = REGIONS.iter().position(|r| r.id == "ap-chengdu").unwrap();
        assert_eq!(regions.len(), first_failing + 1);
    }
}
