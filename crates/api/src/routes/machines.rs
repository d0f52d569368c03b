//! Route definitions for per-machine remote views.
//!
//! Mounted at `/machines` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::machines;
use crate::state::AppState;

/// ```text
/// GET /{machine_id}/status   -> get_machine_status
/// GET /{machine_id}/votes    -> get_machine_votes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{machine_id}/status", get(machines::get_machine_status))
        .route("/{machine_id}/votes", get(machines::get_machine_votes))
}
