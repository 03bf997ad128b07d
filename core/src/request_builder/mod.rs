#![deny(missing_docs)]

//! # Request Builder
//!
//! Pieces behind the console's "try it" form.
//!
//! - **fields**: parameter schema -> input widget.
//! - **preview**: operation + form values -> `curl` command line.

pub mod fields;
pub mod preview;

pub use fields::{
    default_query_values, field_config_for_parameter, field_config_for_schema, FieldConfig, Widget,
};
pub use preview::{build_curl_preview, build_curl_preview_for_operation};
