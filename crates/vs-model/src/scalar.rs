//! Helpers for scalar cell values.
//!
//! Cell values travel through the model as [`serde_json::Value`] so that
//! their original type (text, integer, float, boolean) survives into the
//! output document unchanged.

use serde_json::Value;

/// Render a scalar as plain text.
///
/// Strings are returned without quotes, `null` becomes the empty string, and
/// every other scalar uses its JSON text form.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::scalar_text;

    #[test]
    fn strings_are_unquoted() {
        assert_eq!(scalar_text(&json!("2.16.840.1")), "2.16.840.1");
    }

    #[test]
    fn numbers_and_null() {
        assert_eq!(scalar_text(&json!(20210101)), "20210101");
        assert_eq!(scalar_text(&json!(1.5)), "1.5");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&Value::Null), "");
    }
}
