//! Instance Router

use axum::Router;
use axum::routing::get;
use kvstore::KvRepository;
use std::sync::Arc;

use crate::application::instance_service::InstanceService;
use crate::domain::provider::LighthouseApi;
use crate::presentation::handlers;

/// Create the instance router
///
/// Unguarded as returned; layer `auth::require_token` on it.
pub fn instance_router<R, L>(service: Arc<InstanceService<R, L>>) -> Router
where
    R: KvRepository + Send + Sync + 'static,
    L: LighthouseApi + Send + Sync + 'static,
{
    Router::new()
        .route("/info/all", get(handlers::list_all::<R, L>))
        .route(
            "/firewallRules",
            get(handlers::list_firewall_rules::<R, L>)
                .post(handlers::add_firewall_rule::<R, L>)
                .delete(handlers::delete_firewall_rule::<R, L>),
        )
        .with_state(service)
}
