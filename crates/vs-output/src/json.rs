//! JSON serialization of the value set document.

use std::fs;
use std::path::Path;

use tracing::debug;
use vs_model::ValueSetDocument;

use crate::error::{OutputError, Result};

/// Options for JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOutputOptions {
    /// Indent the document and end it with a newline. Compact otherwise.
    pub pretty: bool,
}

impl JsonOutputOptions {
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Serialize the document to JSON text.
pub fn render_value_set_json(
    document: &ValueSetDocument,
    options: &JsonOutputOptions,
) -> Result<String> {
    if options.pretty {
        let json = serde_json::to_string_pretty(document)?;
        Ok(format!("{json}\n"))
    } else {
        Ok(serde_json::to_string(document)?)
    }
}

/// Write the document to `path`, replacing any existing file.
pub fn write_value_set_json(
    path: &Path,
    document: &ValueSetDocument,
    options: &JsonOutputOptions,
) -> Result<()> {
    let json = render_value_set_json(document, options)?;
    fs::write(path, &json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "wrote value set json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;
    use vs_model::{ValueSetDescriptor, ValueSetDocument, ValueSetMetadata};

    use super::{JsonOutputOptions, render_value_set_json, write_value_set_json};
    use crate::error::OutputError;

    fn document() -> ValueSetDocument {
        let metadata = ValueSetMetadata {
            name: "Diabetes Medications".to_string(),
            oid: json!("2.16.840.1.113883.3.464.1003.196.12.1001"),
            version: json!("20210101"),
            steward: " NLM ".to_string(),
            purpose: " Identify diabetes drugs ".to_string(),
        };
        ValueSetDocument::new(
            ValueSetDescriptor::from_metadata(&metadata),
            vec![json!("1000001"), json!("1000002"), json!("1000003")],
        )
    }

    #[test]
    fn compact_output_matches_bundle_format() {
        let text = render_value_set_json(&document(), &JsonOutputOptions::default())
            .expect("render json");
        insta::assert_snapshot!(text, @r#"[{"resourceType":"ValueSet","id":"rxnorm-vs-dm","description":"Diabetes Medications","version":"20210101","identifier":[{"system":"urn:ietf:rfc:3986","value":"2.16.840.1.113883.3.464.1003.196.12.1001"}],"url":"http://cts.nlm.nih.gov/fhir/ValueSet/2.16.840.1.113883.3.464.1003.196.12.1001","publisher":"NLM","purpose":"Identify diabetes drugs"},["1000001","1000002","1000003"]]"#);
    }

    #[test]
    fn pretty_output_parses_to_same_document() {
        let options = JsonOutputOptions::default().with_pretty(true);
        let text = render_value_set_json(&document(), &options).expect("render json");
        assert!(text.ends_with("]\n"));
        assert!(text.contains("\n  {\n    \"resourceType\": \"ValueSet\""));
        let parsed: ValueSetDocument = serde_json::from_str(&text).expect("parse json");
        assert_eq!(parsed, document());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("valueset.json");
        fs::write(&path, "stale contents that are longer than nothing").expect("seed file");

        write_value_set_json(&path, &document(), &JsonOutputOptions::default())
            .expect("write json");

        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("[{\"resourceType\":\"ValueSet\""));
        assert!(written.ends_with("]]"));
    }

    #[test]
    fn unwritable_path_is_write_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing-dir").join("valueset.json");
        let err = write_value_set_json(&path, &document(), &JsonOutputOptions::default())
            .expect_err("parent directory does not exist");
        assert!(matches!(err, OutputError::Write { .. }));
    }
}
