//! The report entity and its normalization rules.
//!
//! A [`Report`] is the only persisted entity. Input arrives as a loosely
//! typed [`ReportDraft`] (form fields, JSON from other tools, hand-edited
//! files) and must pass through [`normalize_report`] before it is written,
//! so the on-disk document is always well-formed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{ReportId, Timestamp};

// ---------------------------------------------------------------------------
// Moderation status
// ---------------------------------------------------------------------------

/// Moderation state of a report.
///
/// The store carries this value through unchanged; it never sets or checks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Visible,
    Flagged,
    Removed,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A user-submitted observation of a machine's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub machine_id: String,
    pub in_stock: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Canonical UTC timestamp, see [`canonical_timestamp`].
    pub created_at: String,
    #[serde(default)]
    pub status: ReportStatus,
}

/// Untrusted, partially populated report input.
///
/// `in_stock` is kept as raw JSON so non-boolean values can be coerced by
/// truthiness instead of rejected. Every other field deserializes leniently:
/// a value of the wrong type (or an unknown `status`) reads as absent, so
/// normalization decides what to do with it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub machine_id: Option<String>,
    #[serde(default)]
    pub in_stock: serde_json::Value,
    #[serde(default, deserialize_with = "lenient")]
    pub comment: Option<String>,
    #[serde(rename = "photoURL", default, deserialize_with = "lenient")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ReportStatus>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

impl From<&Report> for ReportDraft {
    fn from(report: &Report) -> Self {
        Self {
            id: Some(report.id.clone()),
            machine_id: Some(report.machine_id.clone()),
            in_stock: serde_json::Value::Bool(report.in_stock),
            comment: Some(report.comment.clone()),
            photo_url: report.photo_url.clone(),
            created_at: Some(report.created_at.clone()),
            status: Some(report.status),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn a draft into a fully populated report, stamping `now` when the draft
/// has no usable timestamp.
pub fn normalize_report(draft: ReportDraft) -> Result<Report, CoreError> {
    normalize_report_at(draft, Utc::now())
}

/// Same as [`normalize_report`] with an explicit clock reading.
pub fn normalize_report_at(draft: ReportDraft, now: Timestamp) -> Result<Report, CoreError> {
    let id = required(draft.id, "id")?;
    let machine_id = required(draft.machine_id, "machineId")?;

    let created_at = draft
        .created_at
        .as_deref()
        .and_then(canonical_timestamp)
        .unwrap_or_else(|| format_timestamp(now));

    Ok(Report {
        id,
        machine_id,
        in_stock: is_truthy(&draft.in_stock),
        comment: draft.comment.unwrap_or_default(),
        photo_url: draft.photo_url.filter(|url| !url.is_empty()),
        created_at,
        status: draft.status.unwrap_or_default(),
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("Report missing {field}"))),
    }
}

/// Loose boolean coercion for report flags.
///
/// `null`, `false`, `0` and `""` are false; everything else is true.
pub fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Render a timestamp in the single format stored on disk:
/// UTC, millisecond precision, `Z` suffix.
///
/// Every stored `createdAt` shares this shape, which keeps string ordering
/// equal to chronological ordering.
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp and re-render it in the stored format.
///
/// Returns `None` for anything that does not parse.
pub fn canonical_timestamp(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|ts| format_timestamp(ts.with_timezone(&Utc)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
