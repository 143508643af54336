//! Value set workbook ingestion.
//!
//! Reads the two positional sheets of a value set workbook:
//!
//! - **Metadata** (sheet 0): label/value rows describing the value set
//! - **Expansion** (sheet 1): a fixed 12-row preamble ending in a `Code`
//!   header, followed by one concept code per row
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vs_ingest::read_value_set_workbook;
//!
//! let workbook = read_value_set_workbook(Path::new("valueset.xlsx"))?;
//! let metadata = workbook.metadata.value_set_metadata()?;
//! let codes = workbook.expansion.concept_codes()?;
//! ```

mod cell;
mod error;
mod expansion;
pub mod layout;
mod metadata;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Cells ===
pub use cell::{cell_text, cell_to_scalar};

// === Sheets ===
pub use expansion::ExpansionSheet;
pub use metadata::MetadataSheet;
pub use workbook::{ValueSetWorkbook, read_value_set_workbook};
