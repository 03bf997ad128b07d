#![deny(missing_docs)]

//! # Description Document Loading
//!
//! Turns YAML (or JSON) text into an order-preserving `serde_json::Value` tree.
//! The rest of the crate walks that tree directly instead of typed models, so
//! unknown keys and malformed sections survive untouched.

use crate::error::{AppError, AppResult};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;

/// Reads and parses a description document from disk.
pub fn load_document(path: &Path) -> AppResult<Value> {
    let raw = fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {:?}", raw.len(), path);
    parse_document(&raw)
}

/// Parses description document text.
///
/// JSON input is accepted as a YAML subset. Mapping order is kept as declared.
/// Non-string keys (e.g. unquoted `200:` status codes) become strings.
pub fn parse_document(content: &str) -> AppResult<Value> {
    let yaml: YamlValue = serde_yaml::from_str(content)
        .map_err(|e| AppError::Parse(format!("Failed to parse OpenAPI document: {}", e)))?;
    Ok(yaml_to_json(yaml))
}

fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => yaml_number_to_json(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, item) in mapping {
                object.insert(coerce_to_string(&yaml_to_json(key)), yaml_to_json(item));
            }
            Value::Object(object)
        }
        // Tags carry no meaning for an OpenAPI document.
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Value::Number(u.into());
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        // .inf / .nan have no JSON form
        .unwrap_or_else(|| Value::String(n.to_string()))
}

/// Coerces a node to the string a UI would display for it.
///
/// Strings pass through, numbers and booleans use their literal form,
/// integral floats drop the trailing `.0` and `null` renders as `"null"`.
///
/// Composite nodes render as compact JSON (`[1,"a"]`), not as a comma-joined
/// list (`1,a`). Large floats keep Rust's exponent form (`1e21`, not `1e+21`).
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are false, everything else is true.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
