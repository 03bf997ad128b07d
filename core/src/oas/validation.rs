#![deny(missing_docs)]

//! # OpenAPI Validation
//!
//! Minimal structural preflight run before a docs model is generated.
//!
//! Checks, in order, stopping at the first failure:
//! - The document root is an object.
//! - `openapi` is declared and starts with the supported major version.
//! - `paths` is present and is an object.
//! - Every configured required route exists under `paths`.

use crate::config::ValidationRules;
use crate::error::{AppError, AppResult};
use crate::oas::document::{coerce_to_string, is_truthy};
use serde_json::Value;

/// Validates a parsed description document against `rules`.
pub fn validate_document(document: &Value, rules: &ValidationRules) -> AppResult<()> {
    let Some(root) = document.as_object() else {
        return Err(AppError::Validation(
            "OpenAPI document must parse to an object".into(),
        ));
    };

    let version = root
        .get("openapi")
        .filter(|v| is_truthy(v))
        .map(coerce_to_string);
    match version {
        Some(v) if v.starts_with(&rules.version_prefix) => {}
        Some(v) => {
            return Err(AppError::Validation(format!(
                "OpenAPI document must declare OpenAPI {}x, found '{}'",
                rules.version_prefix, v
            )));
        }
        None => {
            return Err(AppError::Validation(format!(
                "OpenAPI document must declare OpenAPI {}x",
                rules.version_prefix
            )));
        }
    }

    let Some(paths) = root.get("paths").and_then(Value::as_object) else {
        return Err(AppError::Validation(
            "OpenAPI document must contain paths".into(),
        ));
    };

    for endpoint in &rules.required_paths {
        if !paths.get(endpoint).is_some_and(is_truthy) {
            return Err(AppError::Validation(format!(
                "Missing required path: {}",
                endpoint
            )));
        }
    }

    Ok(())
}
