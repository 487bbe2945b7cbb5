use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use crate::{catalog, error::AppResult, AppState};

// ── GET /products/ ───────────────────────────────────────────────────────────

/// Serve the backing file as decoded: no filtering, no sorting, no rewriting.
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let start = Instant::now();
    let products = catalog::load_catalog(&state.catalog_path).await?;
    let elapsed = start.elapsed();

    info!(
        count = products.as_array().map_or(0, Vec::len),
        elapsed_ms = elapsed.as_millis(),
        "Listed products"
    );

    Ok((StatusCode::OK, Json(products)))
}
