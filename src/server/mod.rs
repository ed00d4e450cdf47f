mod form;
mod handlers;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::shopify::ShopifyClient;

// ============================================================================
// HTTP Server - Inbound Surface
// ============================================================================
//
// One resource at `/` with three dispositions (GET form, POST submit,
// anything else 405), plus `/health` and `/metrics` for operations.
// Handlers are stateless; shared state is the upstream client and the
// metrics registry, injected once at construction.
//
// ============================================================================

pub struct AppState {
    pub client: ShopifyClient,
    pub metrics: Arc<Metrics>,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::serve_form))
            .route(web::post().to(handlers::submit_order))
            .route(web::route().to(handlers::method_not_allowed)),
    )
    .route("/health", web::get().to(handlers::health_handler))
    .route("/metrics", web::get().to(handlers::metrics_handler));
}

/// Run the relay server until shutdown.
pub async fn start_server(config: AppConfig, metrics: Arc<Metrics>) -> std::io::Result<()> {
    let state = web::Data::new(AppState {
        client: ShopifyClient::from_config(&config),
        metrics,
    });

    tracing::info!(
        "Starting order relay on http://{}:{}",
        config.bind_addr,
        config.port
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind((config.bind_addr.as_str(), config.port))?
        .run()
        .await
}
