//! The two-element output document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::valueset::ValueSetDescriptor;

/// `[descriptor, codes]`, serialized as a JSON array of length two.
///
/// Codes keep the order and scalar type they had in the expansion sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSetDocument(pub ValueSetDescriptor, pub Vec<Value>);

impl ValueSetDocument {
    pub fn new(descriptor: ValueSetDescriptor, codes: Vec<Value>) -> Self {
        Self(descriptor, codes)
    }

    pub fn descriptor(&self) -> &ValueSetDescriptor {
        &self.0
    }

    pub fn codes(&self) -> &[Value] {
        &self.1
    }
}
