//! Error types for value set workbook ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a value set workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Workbook file not found.
    #[error("workbook not found: {path}")]
    FileNotFound { path: PathBuf },

    // === Workbook Errors ===
    /// The file could not be opened as a workbook.
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has fewer sheets than the layout requires.
    #[error("workbook {path} has no sheet at position {index}")]
    SheetMissing { path: PathBuf, index: usize },

    /// A sheet exists but its cells could not be read.
    #[error("failed to read sheet {index} of {path}: {source}")]
    SheetRead {
        path: PathBuf,
        index: usize,
        #[source]
        source: calamine::Error,
    },

    // === Content Errors ===
    /// Required label not present in the metadata sheet.
    #[error("required field '{field}' not found in metadata sheet")]
    MissingField { field: String },

    /// The expansion sheet does not carry the `Code` header where expected.
    #[error("Unexpected file structure.")]
    StructuralMismatch {
        /// Text found at the header position, `None` when the cell is absent.
        found: Option<String>,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
