//! Value set extraction pipeline.
//!
//! The pipeline runs these stages in order:
//! 1. **Ingest**: Open the workbook and load the metadata and expansion sheets
//! 2. **Describe**: Derive the `ValueSet` descriptor from the metadata fields
//! 3. **Validate**: Check the `Code` header of the expansion sheet
//! 4. **Extract**: Slice the concept codes below the header
//! 5. **Output**: Write `[descriptor, codes]` as JSON
//!
//! Any failure stops the run before the output file is touched.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info, info_span, warn};

use vs_ingest::{IngestError, ValueSetWorkbook, read_value_set_workbook};
use vs_model::{ValueSetDescriptor, ValueSetDocument, scalar_text};
use vs_output::{JsonOutputOptions, OutputError, write_value_set_json};

/// Failures of an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input missing, unreadable, not a workbook, or short of sheets.
    #[error(transparent)]
    InputRead(IngestError),

    /// A required metadata label is absent.
    #[error("required field '{field}' not found in metadata sheet")]
    MissingField { field: String },

    /// The expansion sheet does not follow the fixed template.
    #[error("Unexpected file structure.")]
    StructuralMismatch,

    /// The output document could not be produced or written.
    #[error(transparent)]
    OutputWrite(OutputError),
}

impl From<IngestError> for ExtractError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::MissingField { field } => Self::MissingField { field },
            IngestError::StructuralMismatch { .. } => Self::StructuralMismatch,
            other => Self::InputRead(other),
        }
    }
}

impl From<OutputError> for ExtractError {
    fn from(err: OutputError) -> Self {
        Self::OutputWrite(err)
    }
}

/// Options for an extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub output: JsonOutputOptions,
}

impl ExtractOptions {
    #[must_use]
    pub fn with_output(mut self, output: JsonOutputOptions) -> Self {
        self.output = output;
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub value_set_id: String,
    pub oid: String,
    pub code_count: usize,
    pub output_path: PathBuf,
}

/// Convert the workbook at `input` into the JSON document at `output`.
pub fn extract(input: &Path, output: &Path) -> Result<ExtractSummary, ExtractError> {
    extract_with_options(input, output, &ExtractOptions::default())
}

/// [`extract`] with explicit output options.
pub fn extract_with_options(
    input: &Path,
    output: &Path,
    options: &ExtractOptions,
) -> Result<ExtractSummary, ExtractError> {
    let span = info_span!("extract", input = %input.display());
    let _guard = span.enter();
    let started = Instant::now();
    info!(output = %output.display(), "extracting value set");

    let workbook = read_value_set_workbook(input)?;
    let document = build_document(&workbook)?;
    write_value_set_json(output, &document, &options.output)?;

    let descriptor = document.descriptor();
    let summary = ExtractSummary {
        value_set_id: descriptor.id.clone(),
        oid: descriptor.oid_text().unwrap_or_default(),
        code_count: document.codes().len(),
        output_path: output.to_path_buf(),
    };
    info!(
        id = %summary.value_set_id,
        oid = %summary.oid,
        code_count = summary.code_count,
        duration_ms = started.elapsed().as_millis(),
        "value set extracted"
    );
    Ok(summary)
}

/// Build `[descriptor, codes]` from loaded sheets.
///
/// The descriptor is derived before the expansion layout is checked, so a
/// missing metadata field is reported ahead of a structural mismatch.
pub fn build_document(workbook: &ValueSetWorkbook) -> Result<ValueSetDocument, ExtractError> {
    let metadata = workbook.metadata.value_set_metadata()?;
    let descriptor = ValueSetDescriptor::from_metadata(&metadata);
    debug!(
        id = %descriptor.id,
        version = %scalar_text(&descriptor.version),
        publisher = %descriptor.publisher,
        "derived value set descriptor"
    );

    let codes = workbook.expansion.concept_codes().inspect_err(|err| {
        if let IngestError::StructuralMismatch { found } = err {
            error!(
                id = %descriptor.id,
                found = found.as_deref().unwrap_or("<absent>"),
                "expansion sheet has no Code header at row 12, column A"
            );
        }
    })?;
    if codes.is_empty() {
        warn!(id = %descriptor.id, "expansion sheet lists no concept codes");
    }
    Ok(ValueSetDocument::new(descriptor, codes))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use vs_ingest::IngestError;
    use vs_output::OutputError;

    use super::ExtractError;

    #[test]
    fn ingest_errors_map_to_taxonomy() {
        let missing: ExtractError = IngestError::MissingField {
            field: "OID".to_string(),
        }
        .into();
        assert!(matches!(missing, ExtractError::MissingField { .. }));

        let mismatch: ExtractError = IngestError::StructuralMismatch { found: None }.into();
        assert!(matches!(mismatch, ExtractError::StructuralMismatch));
        assert_eq!(mismatch.to_string(), "Unexpected file structure.");

        let read: ExtractError = IngestError::FileNotFound {
            path: PathBuf::from("in.xlsx"),
        }
        .into();
        assert!(matches!(read, ExtractError::InputRead(_)));
        assert_eq!(read.to_string(), "workbook not found: in.xlsx");
    }

    #[test]
    fn output_errors_are_output_write() {
        let err: ExtractError = OutputError::Write {
            path: PathBuf::from("out.json"),
            source: std::io::Error::other("disk full"),
        }
        .into();
        assert!(matches!(err, ExtractError::OutputWrite(_)));
        assert_eq!(err.to_string(), "failed to write out.json: disk full");
    }
}
