use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing the output document.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize value set document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
