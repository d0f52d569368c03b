//! Handlers for stock reports.
//!
//! Thin translation between HTTP and the local [`ReportStore`]: parse the
//! request, call the store, serialize the result.
//!
//! [`ReportStore`]: stockwatch_store::ReportStore

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::Deserialize;

use stockwatch_core::error::CoreError;
use stockwatch_core::report::{format_timestamp, ReportDraft};

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Fields of the report submission form.
///
/// Accepted as `multipart/form-data` (browser form with a photo input) or
/// `application/x-www-form-urlencoded`.
#[derive(Debug, Default)]
pub struct ReportForm {
    pub machine_id: Option<String>,
    pub in_stock: Option<String>,
    pub comment: Option<String>,
    /// File name of the `photo` part. The file itself is not stored.
    pub photo_name: Option<String>,
}

impl ReportForm {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "machineId" => self.machine_id = Some(value),
            "inStock" => self.in_stock = Some(value),
            "comment" => self.comment = Some(value),
            _ => {} // ignore unknown fields
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == "photo" {
                form.photo_name = field.file_name().filter(|n| !n.is_empty()).map(String::from);
                continue;
            }
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            form.set_field(&name, text);
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for ReportForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut form = Self::default();
        for (name, value) in fields {
            form.set_field(&name, value);
        }
        Ok(form)
    }
}

/// Body of `PUT /reports/{id}/photo`.
#[derive(Debug, Deserialize)]
pub struct UpdateReportPhoto {
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

// ---------------------------------------------------------------------------
// POST /reports
// ---------------------------------------------------------------------------

/// Submit a new report for a machine.
///
/// `inStock` is true unless the form sends something other than `"true"`.
pub async fn create_report(
    State(state): State<AppState>,
    form: ReportForm,
) -> AppResult<impl IntoResponse> {
    let machine_id = form
        .machine_id
        .filter(|m| !m.is_empty())
        .ok_or_else(|| CoreError::Validation("machineId required".into()))?;

    let in_stock = form.in_stock.as_deref().map_or(true, |v| v == "true");

    if let Some(ref photo) = form.photo_name {
        tracing::debug!(machine_id = %machine_id, photo = %photo, "Photo upload ignored");
    }

    let draft = ReportDraft {
        id: Some(uuid::Uuid::new_v4().to_string()),
        machine_id: Some(machine_id),
        in_stock: serde_json::Value::Bool(in_stock),
        comment: Some(form.comment.unwrap_or_default()),
        photo_url: None,
        created_at: Some(format_timestamp(chrono::Utc::now())),
        status: None,
    };

    let report = state.store.add_report(draft).await?;

    tracing::info!(
        report_id = %report.id,
        machine_id = %report.machine_id,
        in_stock = report.in_stock,
        "Report submitted",
    );

    Ok((StatusCode::CREATED, Json(report)))
}

// ---------------------------------------------------------------------------
// GET /reports
// ---------------------------------------------------------------------------

/// Most recent reports across all machines, newest first.
pub async fn list_recent_reports(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.resolve()?;
    let reports = state.store.list_recent_reports(limit).await?;
    Ok(Json(reports))
}

// ---------------------------------------------------------------------------
// GET /reports/{id}
// ---------------------------------------------------------------------------

/// Get a single report by ID.
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let report = state
        .store
        .get_report_by_id(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;

    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// PUT /reports/{id}/photo
// ---------------------------------------------------------------------------

/// Attach a photo URL to an existing report.
pub async fn update_report_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateReportPhoto>,
) -> AppResult<impl IntoResponse> {
    if input.photo_url.trim().is_empty() {
        return Err(CoreError::Validation("photoURL must not be empty".into()).into());
    }

    let updated = state
        .store
        .update_report_photo(&id, &input.photo_url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id: id.clone(),
        }))?;

    tracing::info!(report_id = %id, "Report photo updated");

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /reports/{id}
// ---------------------------------------------------------------------------

/// Delete a report. 204 on success, 404 if there was nothing to delete.
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.store.delete_report(&id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }));
    }

    tracing::info!(report_id = %id, "Report deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /reports/machine/{machine_id}
// ---------------------------------------------------------------------------

/// Reports for one machine, newest first. Empty array if there are none.
pub async fn list_machine_reports(
    State(state): State<AppState>,
    Path(machine_id): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.resolve()?;
    let reports = state.store.get_reports_by_machine(&machine_id, limit).await?;
    Ok(Json(reports))
}
