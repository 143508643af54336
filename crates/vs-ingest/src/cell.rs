//! Conversion of spreadsheet cells into JSON scalars.

use calamine::Data;
use serde_json::{Number, Value};

use vs_model::scalar_text;

/// Convert a cell into the scalar carried by the model.
///
/// Whole-number floats become integers, matching how spreadsheet readers
/// report numeric cells typed as `20210101`.
pub fn cell_to_scalar(cell: &Data) -> Value {
    match cell {
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_to_scalar(*f),
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Value::String(naive.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => float_to_scalar(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(err) => Value::String(err.to_string()),
        Data::Empty => Value::Null,
    }
}

/// Plain-text form of a cell.
pub fn cell_text(cell: &Data) -> String {
    scalar_text(&cell_to_scalar(cell))
}

fn float_to_scalar(f: f64) -> Value {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}
