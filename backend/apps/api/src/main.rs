//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are each
//! crate's error type rendered through `kernel::error::AppError`.

mod config;
mod router;

use auth::{AuthConfig, PgUserRepository};
use dns::{CloudflareClient, DnsService};
use instance::{InstanceCache, InstanceService, TencentLighthouseClient};
use kvstore::{CredentialStore, PgKvRepository};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::router::{AppServices, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,kvstore=info,instance=info,dns=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(config.connect_options())
        .await?;

    tracing::info!(host = %config.db_host, database = %config.db_name, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Provider clients share one connection pool
    let http = platform::client::build_http_client()?;
    let credentials = CredentialStore::new(Arc::new(PgKvRepository::new(pool.clone())));

    let services = AppServices {
        users: PgUserRepository::new(pool.clone()),
        auth_config: Arc::new(AuthConfig::new(config.token_secret.clone())),
        instance: Arc::new(InstanceService::new(
            credentials.clone(),
            Arc::new(TencentLighthouseClient::new(http.clone())),
            Arc::new(InstanceCache::new()),
        )),
        dns: Arc::new(DnsService::new(
            credentials,
            Arc::new(CloudflareClient::new(http)),
        )),
    };

    if !config.protect_domain_routes {
        tracing::warn!("/domain routes are served without the token guard");
    }
    let app = build_router(services, config.protect_domain_routes);

    // Start server
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
