//! File-backed persistence for stock reports.
//!
//! One pretty-printed JSON document holds every report. [`ReportStore`] is
//! the only code that reads or writes it.

pub mod error;
pub mod report_store;

pub use error::StoreError;
pub use report_store::{ReportStore, StoreDocument};
