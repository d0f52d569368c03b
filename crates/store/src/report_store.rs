//! JSON document store for reports.
//!
//! File layout (`<data_dir>/reports.json`):
//!
//! ```text
//! {
//!   "reports": [ { id, machineId, inStock, comment, photoURL?, createdAt, status } ]
//! }
//! ```
//!
//! Every mutation is a full read-modify-write of the document, performed
//! while holding the store's write guard. Reads hold the read guard, so they
//! always see the last committed document. Writes land in a sibling temp
//! file that is renamed over the real one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use stockwatch_core::report::{normalize_report, Report, ReportDraft};

use crate::error::StoreError;

/// File name of the document inside the data directory.
pub const STORE_FILE_NAME: &str = "reports.json";

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = ".data";

/// On-disk shape of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub reports: Vec<Report>,
}

/// Single-file report store.
///
/// Designed to be wrapped in `Arc` and shared across handlers. All access to
/// the file goes through the interior `RwLock`.
pub struct ReportStore {
    data_dir: PathBuf,
    path: PathBuf,
    lock: RwLock<()>,
}

impl ReportStore {
    /// Create a store rooted at `data_dir`. Nothing touches the disk until
    /// the first operation.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let path = data_dir.join(STORE_FILE_NAME);
        Self {
            data_dir,
            path,
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Normalize and insert a report, replacing any entry with the same id.
    ///
    /// Validation happens before the file is touched.
    pub async fn add_report(&self, draft: ReportDraft) -> Result<Report, StoreError> {
        let next = normalize_report(draft)?;

        let _guard = self.lock.write().await;
        let mut doc = self.read_all().await?;

        match doc.reports.iter_mut().find(|r| r.id == next.id) {
            Some(existing) => {
                tracing::debug!(report_id = %next.id, "Replacing existing report");
                *existing = next.clone();
            }
            None => doc.reports.push(next.clone()),
        }

        self.write_all(&doc).await?;
        Ok(next)
    }

    /// Set the photo URL of an existing report, keeping every other field.
    /// The merged record is normalized again, so an empty URL clears it.
    ///
    /// Returns `None` without writing when no report has this id.
    pub async fn update_report_photo(
        &self,
        id: &str,
        photo_url: &str,
    ) -> Result<Option<Report>, StoreError> {
        let _guard = self.lock.write().await;
        let mut doc = self.read_all().await?;

        let Some(report) = doc.reports.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        let updated = normalize_report(ReportDraft {
            photo_url: Some(photo_url.to_string()),
            ..ReportDraft::from(&*report)
        })?;
        *report = updated.clone();

        self.write_all(&doc).await?;
        Ok(Some(updated))
    }

    /// Remove a report. The file is rewritten only if something was removed.
    pub async fn delete_report(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.write().await;
        let mut doc = self.read_all().await?;

        let before = doc.reports.len();
        doc.reports.retain(|r| r.id != id);
        let changed = doc.reports.len() != before;

        if changed {
            self.write_all(&doc).await?;
        }
        Ok(changed)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Look up a single report.
    pub async fn get_report_by_id(&self, id: &str) -> Result<Option<Report>, StoreError> {
        let doc = self.snapshot().await?;
        Ok(doc.reports.into_iter().find(|r| r.id == id))
    }

    /// Newest-first reports for one machine, at most `limit` of them.
    pub async fn get_reports_by_machine(
        &self,
        machine_id: &str,
        limit: usize,
    ) -> Result<Vec<Report>, StoreError> {
        let doc = self.snapshot().await?;
        let matching = doc
            .reports
            .into_iter()
            .filter(|r| r.machine_id == machine_id)
            .collect();
        Ok(newest_first(matching, limit))
    }

    /// Newest-first reports across all machines, at most `limit` of them.
    pub async fn list_recent_reports(&self, limit: usize) -> Result<Vec<Report>, StoreError> {
        let doc = self.snapshot().await?;
        Ok(newest_first(doc.reports, limit))
    }

    /// Number of stored reports.
    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.snapshot().await?.reports.len())
    }

    // -----------------------------------------------------------------------
    // File handling
    // -----------------------------------------------------------------------

    /// Read the committed document for a query.
    ///
    /// The common case only needs the read guard. Creating a missing file is
    /// a write, so that path upgrades to the write guard.
    async fn snapshot(&self) -> Result<StoreDocument, StoreError> {
        {
            let _guard = self.lock.read().await;
            if let Some(doc) = self.load_existing().await? {
                return Ok(doc);
            }
        }

        let _guard = self.lock.write().await;
        self.read_all().await
    }

    /// Read the document, creating the directory and an empty file first if
    /// needed. Caller must hold the write guard.
    async fn read_all(&self) -> Result<StoreDocument, StoreError> {
        if let Some(doc) = self.load_existing().await? {
            return Ok(doc);
        }

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StoreError::io(&self.data_dir, e))?;

        let empty = StoreDocument::default();
        self.write_all(&empty).await?;
        tracing::info!(path = %self.path.display(), "Created empty report store");
        Ok(empty)
    }

    /// Read and parse the file, or `None` if it does not exist.
    async fn load_existing(&self) -> Result<Option<StoreDocument>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(parse_document(&raw, &self.path))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    /// Replace the file contents with `doc`. Caller must hold the write guard.
    async fn write_all(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        let rendered = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, rendered)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            report_count = doc.reports.len(),
            "Report store written",
        );
        Ok(())
    }
}

/// Parse the store file.
///
/// Invalid JSON, or a document whose `reports` is not an array, reads as an
/// empty document. Otherwise each entry is normalized on its own and only
/// entries that cannot become a report (no `id` or `machineId`) are dropped.
/// Nothing is written back here; only a later successful write replaces the
/// file.
fn parse_document(raw: &str, path: &Path) -> StoreDocument {
    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Report store is not valid JSON, serving an empty document",
            );
            return StoreDocument::default();
        }
    };

    let Some(entries) = value.get("reports").and_then(serde_json::Value::as_array) else {
        tracing::warn!(
            path = %path.display(),
            "Report store has no reports array, serving an empty document",
        );
        return StoreDocument::default();
    };

    let reports = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| recover_report(index, entry, path))
        .collect();
    StoreDocument { reports }
}

/// Normalize one stored entry, or log and skip it.
fn recover_report(index: usize, entry: &serde_json::Value, path: &Path) -> Option<Report> {
    let normalized = ReportDraft::deserialize(entry)
        .map_err(|e| e.to_string())
        .and_then(|draft| normalize_report(draft).map_err(|e| e.to_string()));

    match normalized {
        Ok(report) => Some(report),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                index,
                error = %error,
                "Skipping unrecoverable report entry",
            );
            None
        }
    }
}

/// Sort by `createdAt` descending and keep the first `limit`.
///
/// Stored timestamps share one canonical format, so string order is
/// chronological order.
fn newest_first(mut reports: Vec<Report>, limit: usize) -> Vec<Report> {
    reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    reports.truncate(limit);
    reports
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use stockwatch_core::report::ReportStatus;

    use super::*;

    fn report(id: &str, created_at: &str) -> Report {
        Report {
            id: id.into(),
            machine_id: "m1".into(),
            in_stock: true,
            comment: String::new(),
            photo_url: None,
            created_at: created_at.into(),
            status: ReportStatus::Visible,
        }
    }

    #[test]
    fn invalid_json_parses_to_empty_document() {
        let doc = parse_document("{ not json", Path::new("reports.json"));
        assert!(doc.reports.is_empty());
    }

    #[test]
    fn non_sequence_reports_field_parses_to_empty_document() {
        let doc = parse_document(r#"{ "reports": 5 }"#, Path::new("reports.json"));
        assert!(doc.reports.is_empty());
    }

    #[test]
    fn missing_reports_field_parses_to_empty_document() {
        let doc = parse_document("{}", Path::new("reports.json"));
        assert!(doc.reports.is_empty());
    }

    #[test]
    fn entries_without_optional_fields_still_parse() {
        let raw = r#"{ "reports": [
            { "id": "r1", "machineId": "m1", "inStock": true, "createdAt": "2024-05-01T12:00:00.000Z" }
        ] }"#;
        let doc = parse_document(raw, Path::new("reports.json"));
        assert_eq!(doc.reports.len(), 1);
        assert_eq!(doc.reports[0].comment, "");
        assert_eq!(doc.reports[0].status, ReportStatus::Visible);
    }

    #[test]
    fn off_shape_entries_are_normalized_not_discarded() {
        let raw = r#"{ "reports": [
            { "id": "keep", "machineId": "m1", "inStock": true, "createdAt": "2024-05-01T12:00:00.000Z" },
            { "id": "legacy", "machineId": "m1", "inStock": 1, "status": "archived" }
        ] }"#;
        let doc = parse_document(raw, Path::new("reports.json"));

        assert_eq!(doc.reports.len(), 2);
        let legacy = &doc.reports[1];
        assert_eq!(legacy.id, "legacy");
        assert!(legacy.in_stock);
        assert_eq!(legacy.status, ReportStatus::Visible);
        assert!(legacy.created_at.ends_with('Z'));
    }

    #[test]
    fn entries_without_machine_id_are_skipped() {
        let raw = r#"{ "reports": [
            { "id": "orphan", "inStock": true },
            "not an object",
            { "id": "keep", "machineId": "m1", "inStock": false }
        ] }"#;
        let doc = parse_document(raw, Path::new("reports.json"));

        let ids: Vec<_> = doc.reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["keep"]);
    }

    #[test]
    fn newest_first_sorts_descending_and_truncates() {
        let reports = vec![
            report("old", "2024-01-01T00:00:00.000Z"),
            report("new", "2024-03-01T00:00:00.000Z"),
            report("mid", "2024-02-01T00:00:00.000Z"),
        ];
        let ids: Vec<_> = newest_first(reports, 2).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["new", "mid"]);
    }
}
