pub mod health;
pub mod machines;
pub mod reports;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reports                                         list recent, create
/// /reports/{id}                                    get, delete
/// /reports/{id}/photo                              set photo URL (PUT)
/// /reports/machine/{machine_id}                    reports for a machine
///
/// /machines/{machine_id}/status                    remote status (proxy)
/// /machines/{machine_id}/votes                     remote vote stats (proxy)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/reports", reports::router())
        .nest("/machines", machines::router())
}
