use std::path::PathBuf;

use stockwatch_core::error::CoreError;

/// Errors from the report store.
///
/// A corrupt document is not an error: reads recover to an empty view.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The report failed normalization. Nothing was written.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading, writing, or renaming the store file failed.
    #[error("Store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("Failed to serialize store document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
