//! Result-size limits for report listings.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of reports returned by listing endpoints and store queries.
pub const DEFAULT_REPORT_LIMIT: usize = 50;

/// Maximum number of reports a single listing request may ask for.
pub const MAX_REPORT_LIMIT: usize = 500;

/// Default page size used when asking the remote reports service.
pub const DEFAULT_REMOTE_REPORT_LIMIT: usize = 25;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: usize, max: usize) -> usize {
    match limit {
        None => default.clamp(1, max),
        Some(n) if n < 1 => 1,
        Some(n) => usize::try_from(n).map_or(max, |n| n.min(max)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
