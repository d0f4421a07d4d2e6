//! Error types for repo-sweep.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fetch, store and delete operations.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("please create \"{path}\" from \"{template}\"")]
    ConfigNotFound { path: PathBuf, template: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("GitHub API error ({status}): {message}")]
    GitHub { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Repository list not found at {0}")]
    StoreNotFound(PathBuf),

    #[error("Failed to parse repository list {path}: {source}")]
    StoreParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SweepError {
    /// Whether this error means the local repository list has not been created yet.
    pub fn is_missing_store(&self) -> bool {
        matches!(self, SweepError::StoreNotFound(_))
    }
}

/// A specialized Result type for repo-sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
