use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod handlers;
mod models;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    service_common::init_tracing("info,shipping_service=debug");

    let config = Config::from_env()?;

    info!("Shipping Service starting");

    let app = build_router();

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(service_common::shutdown_signal())
        .await?;

    info!("Shipping Service stopped");
    Ok(())
}

fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/rate/", get(handlers::rate::get_shipping_rate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
