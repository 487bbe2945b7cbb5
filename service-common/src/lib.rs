//! Plumbing shared by the inventory and shipping binaries: log setup, the
//! health body, and the shutdown signal.

use serde::Serialize;
use tracing::{info, warn};

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    /// Pass `env!("CARGO_PKG_NAME")` and `env!("CARGO_PKG_VERSION")` from the
    /// calling binary so the body names the service, not this crate.
    pub fn ok(service: &'static str, version: &'static str) -> Self {
        Self {
            status: "ok",
            service,
            version,
        }
    }
}

/// Compact `fmt` subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn health_names_the_calling_service() {
        let body = serde_json::to_value(HealthStatus::ok("shipping-service", "1.2.3")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "status": "ok",
                "service": "shipping-service",
                "version": "1.2.3",
            })
        );
    }

    #[tokio::test]
    async fn shutdown_signal_waits_for_a_signal() {
        let waited = tokio::time::timeout(Duration::from_millis(50), shutdown_signal()).await;
        assert!(waited.is_err(), "must stay pending until a signal arrives");
    }
}
