#![deny(missing_docs)]

//! # Apidoc Core
//!
//! Core library for the API console generator: normalizes an OpenAPI
//! description into a flat docs model and backs the console's request builder.

/// Shared error types.
pub mod error;

/// Validation rules and fixed request-builder settings.
pub mod config;

/// OpenAPI (OAS) loading, resolution, extraction and validation.
pub mod oas;

/// Field configs and curl previews for the request builder.
pub mod request_builder;

pub use config::ValidationRules;
pub use error::{AppError, AppResult};
pub use oas::{
    extract_docs_model, extract_operations, load_document, parse_document, resolve_ref,
    validate_document, DocsModel, HttpMethod, OperationRecord, ParameterRecord, ResponseRecord,
};
pub use request_builder::{
    build_curl_preview, build_curl_preview_for_operation, default_query_values,
    field_config_for_parameter, field_config_for_schema, FieldConfig, Widget,
};
