//! Value set data model.
//!
//! Types shared by the ingest, output, and CLI crates:
//!
//! - [`ValueSetMetadata`]: the raw fields read from a workbook's metadata sheet
//! - [`ValueSetDescriptor`]: the `ValueSet` resource derived from that metadata
//! - [`ValueSetDocument`]: the `[descriptor, codes]` pair handed to the
//!   terminology bundle generator

pub mod document;
pub mod scalar;
pub mod valueset;

pub use document::ValueSetDocument;
pub use scalar::scalar_text;
pub use valueset::{
    ID_PREFIX, IDENTIFIER_SYSTEM, Identifier, RESOURCE_TYPE, URL_BASE, ValueSetDescriptor,
    ValueSetMetadata, value_set_acronym, value_set_id, value_set_url,
};
