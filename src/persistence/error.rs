use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the storage layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// A file could not be read, written or renamed into place.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded or decoded as JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither an explicit directory nor a home directory was available.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// The key is not usable as a file name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
