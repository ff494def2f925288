mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod kv;
mod memory;
mod models;
mod routes;
mod spanner;
mod state;
mod students;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::{Config, StoreBackend};
use kv::KvStore;
use memory::MemoryKvStore;
use spanner::SpannerClient;
use state::AppState;
use students::StudentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("rust-spanner-students starting");

    let config = Config::from_env()?;
    config.log_startup();

    let kv: Arc<dyn KvStore> = match (config.store_backend, &config.spanner) {
        (StoreBackend::Spanner, Some(spanner_config)) => {
            Arc::new(SpannerClient::from_config(spanner_config).await?)
        }
        (StoreBackend::Spanner, None) => anyhow::bail!("Spanner backend selected without Spanner configuration"),
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Arc::new(MemoryKvStore::new())
        }
    };

    let bind_address = config.bind_address();
    let state = AppState {
        students: StudentStore::new(kv),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("rust-spanner-students stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
