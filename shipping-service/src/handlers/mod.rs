pub mod rate;

use axum::{http::StatusCode, Json};
use service_common::HealthStatus;

pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    (
        StatusCode::OK,
        Json(HealthStatus::ok(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )),
    )
}
