//! Domain types and pure helpers for stockwatch.
//!
//! This crate has no I/O. The store, clients, and API crates all build on
//! the report entity and error types defined here.

pub mod error;
pub mod limits;
pub mod post_ids;
pub mod report;
pub mod types;
