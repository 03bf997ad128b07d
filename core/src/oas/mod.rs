#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: YAML/JSON loading into an ordered JSON tree.
//! - **ref_utils**: Shallow resolution of local `$ref` markers.
//! - **models**: Normalized docs model records.
//! - **routes**: Flattening of `paths` into operations.
//! - **validation**: Structural preflight checks.

pub mod document;
pub mod models;
pub mod ref_utils;
pub mod routes;
pub mod validation;

pub use document::{load_document, parse_document};
pub use models::{DocsModel, HttpMethod, OperationRecord, ParameterRecord, ResponseRecord};
pub use ref_utils::resolve_ref;
pub use routes::{extract_docs_model, extract_operations};
pub use validation::validate_document;
