//! Expansion sheet: a 12-row preamble followed by the concept code listing.

use calamine::{Data, Range};
use serde_json::Value;

use crate::cell::{cell_text, cell_to_scalar};
use crate::error::{IngestError, Result};
use crate::layout::{CODE_COLUMN, CODE_HEADER_ROW, CODE_HEADER_TEXT, FIRST_CODE_ROW};

/// Raw expansion table. The first worksheet row is data, not a header.
#[derive(Debug, Clone)]
pub struct ExpansionSheet {
    range: Range<Data>,
}

impl ExpansionSheet {
    pub fn from_range(range: Range<Data>) -> Self {
        Self { range }
    }

    /// Number of worksheet rows up to and including the last used row.
    pub fn row_count(&self) -> usize {
        self.range.end().map_or(0, |(row, _)| row as usize + 1)
    }

    /// Cell at an absolute worksheet position, `None` outside the used area.
    pub fn cell(&self, row: u32, column: u32) -> Option<&Data> {
        self.range.get_value((row, column))
    }

    /// Check that the `Code` header sits at its fixed position.
    pub fn validate_layout(&self) -> Result<()> {
        match self.cell(CODE_HEADER_ROW, CODE_COLUMN) {
            Some(Data::String(text)) if text == CODE_HEADER_TEXT => Ok(()),
            other => Err(IngestError::StructuralMismatch {
                found: other.map(cell_text),
            }),
        }
    }

    /// Concept codes below the header, in sheet order.
    ///
    /// Blank cells inside the listing are kept as `null`.
    pub fn concept_codes(&self) -> Result<Vec<Value>> {
        self.validate_layout()?;
        let Some((last_row, _)) = self.range.end() else {
            return Ok(Vec::new());
        };
        let codes = (FIRST_CODE_ROW..=last_row)
            .map(|row| self.cell(row, CODE_COLUMN).map_or(Value::Null, cell_to_scalar))
            .collect();
        Ok(codes)
    }
}
