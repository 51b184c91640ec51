//! Shape Normalizer
//!
//! Coerces the loosely-typed payload into the declared record schema.
//! The upstream model's output shape is not contractually guaranteed:
//! a declared sequence may arrive as a single object, a scalar, or not
//! at all. After normalization every declared sequence field is a JSON
//! array, so presentation code can iterate and index without type
//! inspection.

use crate::error::PipelineError;
use medgenius_domain::{FieldShape, NormalizedRecord, RecordSchema};
use serde_json::{Map, Value};
use tracing::debug;

/// Parse the candidate text and normalize it against the schema.
///
/// Parse failure is terminal ([`PipelineError::Normalize`]); the
/// caller decides whether a fallback record substitutes for it.
/// Reply fields not declared in the schema are dropped.
pub fn normalize(candidate: &str, schema: &RecordSchema) -> Result<NormalizedRecord, PipelineError> {
    let parsed: Value = serde_json::from_str(candidate.trim())
        .map_err(|e| PipelineError::Normalize(e.to_string()))?;

    let mut source = match parsed {
        Value::Object(map) => map,
        other => {
            return Err(PipelineError::Normalize(format!(
                "expected a JSON object, got {}",
                kind_name(&other)
            )));
        }
    };

    let mut record = NormalizedRecord::new();
    for (name, shape) in schema.fields() {
        let value = source.remove(name).unwrap_or(Value::Null);
        record.insert(name, coerce(value, shape));
    }

    if !source.is_empty() {
        debug!(
            "Dropped {} undeclared reply field(s): {:?}",
            source.len(),
            source.keys().collect::<Vec<_>>()
        );
    }

    Ok(record)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coerce one field value into its declared shape.
fn coerce(value: Value, shape: FieldShape) -> Value {
    match shape {
        FieldShape::Scalar => value,
        FieldShape::Record => coerce_record(value),
        FieldShape::ScalarSeq => Value::Array(coerce_scalar_seq(value)),
        FieldShape::RecordSeq => Value::Array(coerce_record_seq(value)),
    }
}

/// A declared mapping: objects pass through; an array degenerates to
/// its first object element; everything else becomes an empty mapping.
fn coerce_record(value: Value) -> Value {
    match value {
        Value::Object(_) => value,
        Value::Array(items) => items
            .into_iter()
            .next()
            .filter(Value::is_object)
            .unwrap_or_else(|| Value::Object(Map::new())),
        _ => Value::Object(Map::new()),
    }
}

/// A declared sequence of strings.
fn coerce_scalar_seq(value: Value) -> Vec<Value> {
    match value {
        Value::Null => vec![],
        Value::Array(items) => items
            .into_iter()
            .map(|item| Value::String(stringify(item)))
            .collect(),
        // A single stray mapping flattens into its values' string forms
        Value::Object(map) => flatten_mapping(map).into_iter().map(Value::String).collect(),
        other => vec![Value::String(stringify(other))],
    }
}

/// A declared sequence of mappings: arrays pass through, a single
/// non-null value wraps into a one-element sequence.
fn coerce_record_seq(value: Value) -> Vec<Value> {
    match value {
        Value::Null => vec![],
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// String form of a value: strings as-is, everything else compact JSON.
fn stringify(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Flatten a nested mapping into the string forms of its values, in
/// source insertion order. Nested mappings flatten recursively;
/// nested arrays are stringified element-wise.
fn flatten_mapping(map: Map<String, Value>) -> Vec<String> {
    let mut out = Vec::new();
    for (_, value) in map {
        match value {
            Value::String(s) => out.push(s),
            Value::Array(items) => out.extend(items.into_iter().map(stringify)),
            Value::Object(inner) => out.extend(flatten_mapping(inner)),
            other => out.push(other.to_string()),
        }
    }
    out
}
