//! The `ValueSet` resource emitted for the terminology bundle generator.
//!
//! A descriptor is derived from five metadata fields:
//!
//! | Metadata label              | Descriptor key(s)                  |
//! |-----------------------------|------------------------------------|
//! | `Value Set Name`            | `id` (acronym), `description`      |
//! | `OID`                       | `identifier[0].value`, `url`       |
//! | `Definition Version`        | `version` (type preserved)         |
//! | `Steward`                   | `publisher` (trimmed)              |
//! | `Purpose: Clinical Focus`   | `purpose` (trimmed)                |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scalar::scalar_text;

/// Value of the `resourceType` key.
pub const RESOURCE_TYPE: &str = "ValueSet";

/// Prefix of every generated value set id.
pub const ID_PREFIX: &str = "rxnorm-vs-";

/// Base URL the OID is appended to.
pub const URL_BASE: &str = "http://cts.nlm.nih.gov/fhir/ValueSet/";

/// Identifier system for OIDs expressed as URIs.
pub const IDENTIFIER_SYSTEM: &str = "urn:ietf:rfc:3986";

/// Raw metadata fields read from a value set workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSetMetadata {
    /// `Value Set Name`, as text.
    pub name: String,
    /// `OID`, type preserved.
    pub oid: Value,
    /// `Definition Version`, type preserved.
    pub version: Value,
    /// `Steward`, untrimmed.
    pub steward: String,
    /// `Purpose: Clinical Focus`, untrimmed.
    pub purpose: String,
}

/// A single entry of the descriptor's `identifier` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub system: String,
    pub value: Value,
}

impl Identifier {
    /// Build the URI identifier for a value set OID.
    pub fn oid(oid: Value) -> Self {
        Self {
            system: IDENTIFIER_SYSTEM.to_string(),
            value: oid,
        }
    }
}

/// The `ValueSet` resource.
///
/// Field order here is the key order of the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValueSetDescriptor {
    pub resource_type: String,
    pub id: String,
    pub description: String,
    pub version: Value,
    pub identifier: Vec<Identifier>,
    pub url: String,
    pub publisher: String,
    pub purpose: String,
}

impl ValueSetDescriptor {
    /// Derive the descriptor from workbook metadata.
    pub fn from_metadata(metadata: &ValueSetMetadata) -> Self {
        Self {
            resource_type: RESOURCE_TYPE.to_string(),
            id: value_set_id(&metadata.name),
            description: metadata.name.clone(),
            version: metadata.version.clone(),
            identifier: vec![Identifier::oid(metadata.oid.clone())],
            url: value_set_url(&metadata.oid),
            publisher: metadata.steward.trim().to_string(),
            purpose: metadata.purpose.trim().to_string(),
        }
    }

    /// The OID carried by the first identifier, as text.
    pub fn oid_text(&self) -> Option<String> {
        self.identifier.first().map(|id| scalar_text(&id.value))
    }
}

/// Lowercased first character of every whitespace-separated word.
///
/// `"Diabetes Medications"` becomes `"dm"`. Characters whose lowercase form
/// spans several code points contribute all of them.
pub fn value_set_acronym(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `rxnorm-vs-` followed by the name's acronym.
pub fn value_set_id(name: &str) -> String {
    format!("{ID_PREFIX}{}", value_set_acronym(name))
}

/// Canonical URL for an OID. The OID is inserted verbatim.
pub fn value_set_url(oid: &Value) -> String {
    format!("{URL_BASE}{}", scalar_text(oid))
}
