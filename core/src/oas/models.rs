#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Normalized records emitted by the operation extractor.
//!
//! Every field is always present: optional text defaults to `""`, optional
//! flags to `false` and optional sequences to `[]`. Opaque sections
//! (`schema`, `requestBody`, `info`, `servers`) are carried as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// HTTP methods surfaced in the docs model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Matches a path item key case-insensitively. Other methods yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The artifact consumed by the web console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsModel {
    /// Top-level `info` object, verbatim (`{}` when absent).
    pub info: Value,
    /// Top-level `servers` list, verbatim (`[]` when absent).
    pub servers: Value,
    /// Flattened operations in route order, then method order.
    pub operations: Vec<OperationRecord>,
}

impl DocsModel {
    /// Finds an operation by its (possibly fabricated) id.
    pub fn find_operation(&self, operation_id: &str) -> Option<&OperationRecord> {
        self.operations
            .iter()
            .find(|op| op.operation_id == operation_id)
    }
}

/// One (method, route) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    /// Declared `operationId`, or `<method>_<route>` when absent.
    pub operation_id: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Route template as declared (e.g. "/users/{id}").
    pub path: String,
    /// Short summary.
    pub summary: String,
    /// Long description.
    pub description: String,
    /// Tags in declared order.
    pub tags: Vec<String>,
    /// Parameters with their top-level reference resolved.
    pub parameters: Vec<ParameterRecord>,
    /// Raw `requestBody` node, `null` when absent.
    pub request_body: Value,
    /// Responses in declared order.
    pub responses: Vec<ResponseRecord>,
}

/// A resolved operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Parameter name.
    pub name: String,
    /// Location (query, path, header, cookie), not validated.
    #[serde(rename = "in")]
    pub location: String,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// Description text.
    pub description: String,
    /// Raw schema. Nested references are left unresolved.
    pub schema: Value,
}

/// A resolved response entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    /// Status key as declared ("200", "default", ...).
    pub status: String,
    /// Description text.
    pub description: String,
    /// Media types under `content`, in declaration order.
    pub content_types: Vec<String>,
}
