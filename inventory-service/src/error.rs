use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::catalog::CatalogError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Catalog(err) => {
                error!(error = %err, "Catalog unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "catalog unavailable")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Internal Server Error"),
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn catalog_error_maps_to_500_without_details() {
        let err = AppError::from(CatalogError::Io {
            path: PathBuf::from("/secret/products.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "catalog unavailable");
        assert!(!bytes.windows(6).any(|w| w == b"secret"));
    }
}
