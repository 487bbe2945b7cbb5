use axum::{http::StatusCode, Json};
use tracing::debug;

use crate::models::ShippingRate;

// ── GET /rate/ ───────────────────────────────────────────────────────────────

/// Quote a fresh random shipping rate.
///
/// `thread_rng` is a per-thread generator, so concurrent requests never share
/// generator state.
pub async fn get_shipping_rate() -> (StatusCode, Json<ShippingRate>) {
    let rate = ShippingRate::generate(&mut rand::thread_rng());

    debug!(value = rate.value, "Quoted shipping rate");

    (StatusCode::OK, Json(rate))
}
