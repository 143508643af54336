//! Value set output generation.
//!
//! Writes the `[descriptor, codes]` document consumed by the terminology
//! bundle generator as UTF-8 JSON.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{JsonOutputOptions, render_value_set_json, write_value_set_json};
