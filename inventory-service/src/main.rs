use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod catalog;
mod config;
mod error;
mod handlers;
mod models;

use crate::config::Config;

/// Shared application state. The catalog itself is not held here; it is read
/// from `catalog_path` on every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog_path: Arc<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    service_common::init_tracing("info,inventory_service=debug");

    let config = Config::from_env()?;

    info!("Inventory Service starting");
    info!(catalog = %config.catalog_path.display(), "Serving catalog from file");

    if !config.catalog_path.exists() {
        warn!(
            catalog = %config.catalog_path.display(),
            "Catalog file not found; set CATALOG_PATH or run from the crate directory. GET /products/ answers 500 until it exists"
        );
    }

    let state = AppState {
        catalog_path: Arc::new(config.catalog_path.clone()),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(service_common::shutdown_signal())
        .await?;

    info!("Inventory Service stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/products/", get(handlers::products::list_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn bundled_state() -> AppState {
        AppState {
            catalog_path: Arc::new(
                PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/products.json"),
            ),
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = build_router(bundled_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "inventory-service");
    }

    #[tokio::test]
    async fn route_without_trailing_slash_is_not_found() {
        let response = build_router(bundled_state())
            .oneshot(Request::get("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_rejects_post() {
        let response = build_router(bundled_state())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
