//! Fixed positions of the value set workbook template.
//!
//! Rows and columns are zero-based absolute worksheet coordinates.

/// Position of the key-value metadata sheet.
pub const METADATA_SHEET_INDEX: usize = 0;

/// Position of the expansion (code listing) sheet.
pub const EXPANSION_SHEET_INDEX: usize = 1;

/// Metadata column holding the field labels.
pub const LABEL_COLUMN: u32 = 0;

/// Metadata column holding the field values.
pub const VALUE_COLUMN: u32 = 1;

/// Expansion column holding the concept codes.
pub const CODE_COLUMN: u32 = 0;

/// Expansion row that must hold [`CODE_HEADER_TEXT`]; ends the 12-row preamble.
pub const CODE_HEADER_ROW: u32 = 11;

/// Exact header text expected at [`CODE_HEADER_ROW`].
pub const CODE_HEADER_TEXT: &str = "Code";

/// First expansion row holding a concept code.
pub const FIRST_CODE_ROW: u32 = CODE_HEADER_ROW + 1;

// Metadata labels consumed by the descriptor.
pub const FIELD_VALUE_SET_NAME: &str = "Value Set Name";
pub const FIELD_OID: &str = "OID";
pub const FIELD_DEFINITION_VERSION: &str = "Definition Version";
pub const FIELD_STEWARD: &str = "Steward";
pub const FIELD_PURPOSE: &str = "Purpose: Clinical Focus";
