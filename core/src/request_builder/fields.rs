#![deny(missing_docs)]

//! # Field Configuration
//!
//! Maps a parameter schema to the input widget the console renders for it.
//!
//! Mapping is total. Anything the rules below do not recognise (absent schema,
//! non-object schema, unresolved `$ref`, empty `enum`) renders as a text field.

use crate::oas::document::{coerce_to_string, is_truthy};
use crate::oas::models::{OperationRecord, ParameterRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input affordance for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    /// Free text input.
    Text,
    /// Choice among the schema's `enum` values.
    Select,
    /// Boolean toggle.
    Checkbox,
}

/// Rendering contract for one parameter input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Chosen widget.
    pub widget: Widget,
    /// Allowed values; empty unless `widget` is `Select`.
    pub options: Vec<String>,
    /// Initial value. Checkboxes use `"true"` for checked and `""` for unchecked.
    pub default_value: String,
}

/// Field config for a parameter record.
pub fn field_config_for_parameter(parameter: &ParameterRecord) -> FieldConfig {
    field_config_for_schema(&parameter.schema)
}

/// Initial query values of an operation's form: every `query` parameter
/// whose field has a non-empty default, in declaration order.
pub fn default_query_values(operation: &OperationRecord) -> IndexMap<String, String> {
    operation
        .parameters
        .iter()
        .filter(|param| param.location == "query")
        .map(|param| (param.name.clone(), field_config_for_parameter(param).default_value))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

/// Field config for a raw parameter schema.
///
/// First match wins:
/// 1. Non-empty `enum` -> select. Default is `default` if set, else the first
///    enum value. The default is not checked against the enum.
/// 2. `type: boolean` -> checkbox, checked when `default` is truthy.
/// 3. Anything else -> text with `default` (if set) as initial value.
pub fn field_config_for_schema(schema: &Value) -> FieldConfig {
    let declared_default = schema.get("default").filter(|v| !v.is_null());

    if let Some(values) = schema
        .get("enum")
        .and_then(Value::as_array)
        .filter(|values| !values.is_empty())
    {
        let options: Vec<String> = values.iter().map(coerce_to_string).collect();
        let default_value = match declared_default {
            Some(default) => coerce_to_string(default),
            None => options[0].clone(),
        };
        return FieldConfig {
            widget: Widget::Select,
            options,
            default_value,
        };
    }

    if schema.get("type").and_then(Value::as_str) == Some("boolean") {
        let checked = declared_default.is_some_and(is_truthy);
        return FieldConfig {
            widget: Widget::Checkbox,
            options: Vec::new(),
            default_value: if checked { "true".into() } else { String::new() },
        };
    }

    FieldConfig {
        widget: Widget::Text,
        options: Vec::new(),
        default_value: declared_default.map(coerce_to_string).unwrap_or_default(),
    }
}
