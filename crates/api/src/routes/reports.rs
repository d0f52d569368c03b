//! Route definitions for stock reports.
//!
//! Mounted at `/reports` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// POST   /                       -> create_report
/// GET    /                       -> list_recent_reports
/// GET    /{id}                   -> get_report
/// DELETE /{id}                   -> delete_report
/// PUT    /{id}/photo             -> update_report_photo
/// GET    /machine/{machine_id}   -> list_machine_reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reports::list_recent_reports).post(reports::create_report),
        )
        .route(
            "/{id}",
            get(reports::get_report).delete(reports::delete_report),
        )
        .route("/{id}/photo", put(reports::update_report_photo))
        .route("/machine/{machine_id}", get(reports::list_machine_reports))
}
