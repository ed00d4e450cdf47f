use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod metrics;
mod models;
mod server;
mod shopify;

use config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment (RUST_LOG included)
    dotenvy::dotenv().ok();

    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_relay=debug")),
        )
        .init();

    tracing::info!("🚀 Starting Shopify order relay");

    let config = AppConfig::from_env();
    tracing::info!(
        store_host = %config.store_host,
        api_version = %config.api_version,
        "Configuration loaded"
    );

    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!(
        "📊 Metrics registry created with {} metrics",
        metrics.registry().gather().len()
    );

    server::start_server(config, metrics).await?;

    Ok(())
}
