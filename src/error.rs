//! Crate-wide error type

use std::path::PathBuf;

/// Errors surfaced while reading sources or writing artifacts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object or array of objects in {}", path.display())]
    JsonShape { path: PathBuf },

    #[error("Entry {index} in {} is not a JSON object", path.display())]
    JsonEntry { path: PathBuf, index: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
