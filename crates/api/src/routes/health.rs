use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of stored reports, absent if the store could not be read.
    pub report_count: Option<usize>,
    /// Configured data directory of the report store.
    pub data_dir: String,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let report_count = match state.store.count().await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(error = %e, "Report store unreadable during health check");
            None
        }
    };

    let status = if report_count.is_some() { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        report_count,
        data_dir: state.config.data_dir.display().to_string(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
