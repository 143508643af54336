//! Key-value metadata sheet.

use calamine::{Data, Range};
use serde_json::Value;
use vs_model::{ValueSetMetadata, scalar_text};

use crate::cell::{cell_text, cell_to_scalar};
use crate::error::{IngestError, Result};
use crate::layout::{
    FIELD_DEFINITION_VERSION, FIELD_OID, FIELD_PURPOSE, FIELD_STEWARD, FIELD_VALUE_SET_NAME,
    LABEL_COLUMN, VALUE_COLUMN,
};

/// Metadata rows keyed by the label in the first column.
///
/// Rows keep their sheet order; lookups return the first row with a
/// matching label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataSheet {
    entries: Vec<(String, Value)>,
}

impl MetadataSheet {
    /// Read every row with a non-blank label. Missing value cells become `null`.
    pub fn from_range(range: &Range<Data>) -> Self {
        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return Self::default();
        };
        let entries = (start.0..=end.0)
            .filter_map(|row| {
                let label = range
                    .get_value((row, LABEL_COLUMN))
                    .map(cell_text)
                    .unwrap_or_default();
                let label = label.trim();
                if label.is_empty() {
                    return None;
                }
                let value = range
                    .get_value((row, VALUE_COLUMN))
                    .map_or(Value::Null, cell_to_scalar);
                Some((label.to_string(), value))
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value)
    }

    /// Look up a label that must be present.
    pub fn require(&self, label: &str) -> Result<&Value> {
        self.get(label).ok_or_else(|| IngestError::MissingField {
            field: label.to_string(),
        })
    }

    /// Collect the five fields the value set descriptor is built from.
    pub fn value_set_metadata(&self) -> Result<ValueSetMetadata> {
        Ok(ValueSetMetadata {
            name: scalar_text(self.require(FIELD_VALUE_SET_NAME)?),
            oid: self.require(FIELD_OID)?.clone(),
            version: self.require(FIELD_DEFINITION_VERSION)?.clone(),
            steward: scalar_text(self.require(FIELD_STEWARD)?),
            purpose: scalar_text(self.require(FIELD_PURPOSE)?),
        })
    }
}
