//! Thread keys shared with the external voting and comment services.
//!
//! Votes and comments are attached to a "post". A machine's own thread and a
//! single report's thread use distinct prefixes so the two never collide.

/// Post id for the discussion thread of a machine.
pub fn machine_post_id(machine_id: &str) -> String {
    format!("machine:{machine_id}")
}

/// Post id for the discussion thread of a single report.
pub fn report_post_id(report_key: &str) -> String {
    format!("report:{report_key}")
}
