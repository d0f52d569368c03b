//! Per-machine views served from the remote status and votes services.
//!
//! These forward a single call so the browser only talks to this origin.
//! Upstream failures surface as 502 via [`AppError::Upstream`].
//!
//! [`AppError::Upstream`]: crate::error::AppError::Upstream

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use stockwatch_core::post_ids::machine_post_id;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /machines/{machine_id}/status
pub async fn get_machine_status(
    State(state): State<AppState>,
    Path(machine_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let status = state.remote.status.get_machine_status(&machine_id).await?;
    Ok(Json(status))
}

/// GET /machines/{machine_id}/votes
///
/// Vote stats for the machine's own discussion thread.
pub async fn get_machine_votes(
    State(state): State<AppState>,
    Path(machine_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let stats = state
        .remote
        .votes
        .get_stats(&machine_post_id(&machine_id))
        .await?;
    Ok(Json(stats))
}
