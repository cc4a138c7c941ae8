//! HTTP Handlers

use auth::AuthenticatedUser;
use axum::extract::State;
use axum::{Extension, Json};
use kernel::extract::{ValidJson, ValidQuery};
use kvstore::KvRepository;
use serde_json::Value;
use std::sync::Arc;

use crate::application::instance_service::InstanceService;
use crate::domain::firewall_rule::FirewallRule;
use crate::domain::provider::LighthouseApi;
use crate::error::InstanceResult;
use crate::presentation::dto::{InstanceQuery, ListQuery};

/// Shared state for instance handlers
pub type InstanceState<R, L> = State<Arc<InstanceService<R, L>>>;

fn caller(user: &Option<Extension<AuthenticatedUser>>) -> &str {
    user.as_ref().map_or("-", |Extension(u)| u.uid.as_str())
}

/// GET /instance/info/all?refresh=
pub async fn list_all<R, L>(
    State(service): InstanceState<R, L>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> InstanceResult<Json<Arc<Vec<Value>>>>
where
    R: KvRepository + Send + Sync + 'static,
    L: LighthouseApi + Send + Sync + 'static,
{
    let instances = service.list_all(query.refresh).await?;
    Ok(Json(instances))
}

/// GET /instance/firewallRules?instance_id=&region=
pub async fn list_firewall_rules<R, L>(
    State(service): InstanceState<R, L>,
    ValidQuery(query): ValidQuery<InstanceQuery>,
) -> InstanceResult<Json<Value>>
where
    R: KvRepository + Send + Sync + 'static,
    L: LighthouseApi + Send + Sync + 'static,
{
    let rules = service
        .firewall_rules(&query.instance_id, &query.region)
        .await?;
    Ok(Json(rules))
}

/// POST /instance/firewallRules?instance_id=&region=
///
/// Responds with the provider's reply as a JSON string.
pub async fn add_firewall_rule<R, L>(
    State(service): InstanceState<R, L>,
    user: Option<Extension<AuthenticatedUser>>,
    ValidQuery(query): ValidQuery<InstanceQuery>,
    ValidJson(rule): ValidJson<FirewallRule>,
) -> InstanceResult<Json<String>>
where
    R: KvRepository + Send + Sync + 'static,
    L: LighthouseApi + Send + Sync + 'static,
{
    tracing::info!(uid = caller(&user), port = %rule.port, "Adding firewall rule");
    let response = service
        .add_firewall_rule(&query.instance_id, &query.region, rule)
        .await?;
    Ok(Json(response))
}

/// DELETE /instance/firewallRules?instance_id=&region=
pub async fn delete_firewall_rule<R, L>(
    State(service): InstanceState<R, L>,
    user: Option<Extension<AuthenticatedUser>>,
    ValidQuery(query): ValidQuery<InstanceQuery>,
    ValidJson(rule): ValidJson<FirewallRule>,
) -> InstanceResult<Json<String>>
where
    R: KvRepository + Send + Sync + 'static,
    L: LighthouseApi + Send + Sync + 'static,
{
    tracing::info!(uid = caller(&user), port = %rule.port, "Deleting firewall rule");
    let response = service
        .delete_firewall_rule(&query.instance_id, &query.region, rule)
        .await?;
    Ok(Json(response))
}
