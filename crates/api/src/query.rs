//! Shared query parameter types for API handlers.

use serde::Deserialize;
use stockwatch_core::limits::{clamp_limit, DEFAULT_REPORT_LIMIT, MAX_REPORT_LIMIT};

use crate::error::{AppError, AppResult};

/// `?limit=` for report listings.
///
/// Kept as a raw string so an unparseable value produces the standard JSON
/// error body instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    /// Parse and clamp the limit to `[1, MAX_REPORT_LIMIT]`, defaulting to
    /// `DEFAULT_REPORT_LIMIT`.
    pub fn resolve(&self) -> AppResult<usize> {
        let requested = match self.limit.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                AppError::BadRequest(format!("limit must be an integer, got '{raw}'"))
            })?),
        };
        Ok(clamp_limit(requested, DEFAULT_REPORT_LIMIT, MAX_REPORT_LIMIT))
    }
}
