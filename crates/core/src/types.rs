/// Report identifiers are caller-assigned strings (UUIDs in practice).
pub type ReportId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
