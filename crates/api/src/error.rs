use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stockwatch_clients::ClientError;
use stockwatch_core::error::CoreError;
use stockwatch_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `stockwatch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the local report store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A remote service call failed.
    #[error(transparent)]
    Upstream(#[from] ClientError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Store(err) => match err {
                StoreError::Core(core) => classify_core_error(core),
                other => {
                    tracing::error!(error = %other, "Report store error");
                    internal()
                }
            },

            AppError::Upstream(err) => classify_client_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}

/// Remote failures become 502. A non-2xx answer passes the upstream body
/// text through; transport failures get a generic message.
fn classify_client_error(err: &ClientError) -> (StatusCode, &'static str, String) {
    match err {
        ClientError::Api {
            service,
            status,
            body,
        } => {
            tracing::warn!(service, status, "Upstream service returned an error");
            (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", body.clone())
        }
        other => {
            tracing::error!(error = %other, "Upstream request failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Upstream service unavailable".to_string(),
            )
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
