//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use kernel::extract::ValidQuery;
use kvstore::{KvEntryView, KvRepository};
use serde_json::Value;
use std::sync::Arc;

use crate::application::dns_service::DnsService;
use crate::domain::provider::CloudflareApi;
use crate::domain::record::DomainRecord;
use crate::error::DnsResult;
use crate::presentation::dto::{
    CreateRecordQuery, DeleteRecordQuery, MessageResponse, SetDomainQuery, UpdateSettingQuery,
};

pub type DnsState<R, C> = State<Arc<DnsService<R, C>>>;

/// GET /domain/domains
pub async fn list_records<R, C>(
    State(service): DnsState<R, C>,
) -> DnsResult<Json<Vec<DomainRecord>>>
where
    R: KvRepository + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    Ok(Json(service.list_records().await?))
}

/// POST /domain/deleteDomainRecordByCfID?cf_id=
pub async fn delete_record<R, C>(
    State(service): DnsState<R, C>,
    ValidQuery(query): ValidQuery<DeleteRecordQuery>,
) -> DnsResult<Json<MessageResponse>>
where
    R: KvRepository + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    service.delete_record(&query.cf_id).await?;
    Ok(Json(MessageResponse::SUCCESS))
}

/// POST /domain/createDomainRecord?prefix=&a_record=
///
/// Responds with the provider's reply body unchanged.
pub async fn create_record<R, C>(
    State(service): DnsState<R, C>,
    ValidQuery(query): ValidQuery<CreateRecordQuery>,
) -> DnsResult<Json<Value>>
where
    R: KvRepository + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    let reply = service
        .create_a_record(&query.prefix, &query.a_record)
        .await?;
    Ok(Json(reply))
}

/// POST /domain/setSLD?domain_name=
pub async fn set_managed_domain<R, C>(
    State(service): DnsState<R, C>,
    ValidQuery(query): ValidQuery<SetDomainQuery>,
) -> DnsResult<Json<MessageResponse>>
where
    R: KvRepository + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    service.set_managed_domain(&query.domain_name).await?;
    Ok(Json(MessageResponse::SUCCESS))
}

/// GET /domain/update_kvstore?key=&value=
pub async fn update_setting<R, C>(
    State(service): DnsState<R, C>,
    ValidQuery(query): ValidQuery<UpdateSettingQuery>,
) -> DnsResult<Json<KvEntryView>>
where
    R: KvRepository + Send + Sync + 'static,
    C: CloudflareApi + Send + Sync + 'static,
{
    let entry = service.update_setting(&query.key, &query.value).await?;
    Ok(Json(entry.into()))
}
