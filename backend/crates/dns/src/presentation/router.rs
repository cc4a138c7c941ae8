//! DNS Router

use axum::Router;
use axum::routing::{get, post};
use kvstore::KvRepository;
use std::sync::Arc;

use crate::application::dns_service::DnsService;
use crate::domain::provider::CloudflareApi;
use crate::presentation::handlers;

/// Create the DNS router
///
/// Unguarded as returned.
pub fn dns_router<R, C>(service: Arc<DnsService<R, C>>) -> Router
where
    R: KvRepository + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    Router::new()
        .route("/domains", get(handlers::list_records::<R, C>))
        .route(
            "/deleteDomainRecordByCfID",
            post(handlers::delete_record::<R, C>),
        )
        .route("/createDomainRecord", post(handlers::create_record::<R, C>))
        .route("/setSLD", post(handlers::set_managed_domain::<R, C>))
        .route("/update_kvstore", get(handlers::update_setting::<R, C>))
        .with_state(service)
}
