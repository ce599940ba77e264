//! Error types for corpus construction.
//!
//! Only construction can fail. Query-time problems (unparseable citations,
//! unknown books, missing chapters) are reported as empty results instead.

use std::path::PathBuf;

/// Result type alias using [`CorpusError`].
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors raised while loading and validating the data file.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The data file does not exist.
    #[error("data file not found: {}", path.display())]
    DataNotFound { path: PathBuf },

    /// The file parsed as JSON but does not have the expected shape.
    #[error("data file {} is corrupt: {reason}", path.display())]
    DataCorrupt { path: PathBuf, reason: String },

    /// The file is not valid JSON, or a book record is missing fields.
    #[error("data file {} is corrupt: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file exists but could not be read.
    #[error("failed to read data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CorpusError::DataCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for every failure caused by the file's contents rather than its
    /// absence or unreadability.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            CorpusError::DataCorrupt { .. } | CorpusError::Json { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CorpusError::DataNotFound { .. })
    }
}
