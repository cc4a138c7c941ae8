//! Router composition

use auth::{AuthConfig, UserRepository, auth_router, require_token};
use axum::Router;
use axum::middleware::from_fn_with_state;
use dns::{CloudflareApi, DnsService, dns_router};
use instance::{InstanceService, LighthouseApi, instance_router};
use kvstore::KvRepository;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Everything the handlers need, built once at startup
pub struct AppServices<U, R, L, C> {
    pub users: U,
    pub auth_config: Arc<AuthConfig>,
    pub instance: Arc<InstanceService<R, L>>,
    pub dns: Arc<DnsService<R, C>>,
}

/// Compose the route groups
///
/// `/instance` always sits behind the token guard; `/domain` only when
/// `protect_domain` is set.
pub fn build_router<U, R, L, C>(
    services: AppServices<U, R, L, C>,
    protect_domain: bool,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: KvRepository + Send + Sync + 'static,
    L: LighthouseApi + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    let guard = from_fn_with_state(services.auth_config.clone(), require_token);

    let instance = instance_router(services.instance).route_layer(guard.clone());
    let mut domain = dns_router(services.dns);
    if protect_domain {
        domain = domain.route_layer(guard);
    }

    // Mirrors the caller's origin so credentialed requests are allowed
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .nest("/auth", auth_router(services.users, services.auth_config))
        .nest("/instance", instance)
        .nest("/domain", domain)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
