#![deny(missing_docs)]

//! # Fields Command
//!
//! Prints the request-builder field of every parameter of one operation.

use crate::args::SpecArgs;
use apidoc_core::{
    extract_docs_model, field_config_for_parameter, AppError, AppResult, DocsModel, FieldConfig,
    OperationRecord,
};
use serde::Serialize;

/// Arguments for the fields command.
#[derive(clap::Args, Debug, Clone)]
pub struct FieldsArgs {
    #[clap(flatten)]
    pub spec: SpecArgs,

    /// operationId (or `<method>_<route>` for operations without one).
    #[clap(long)]
    pub operation: String,
}

/// One rendered form row.
#[derive(Debug, Serialize)]
pub struct FieldRow<'a> {
    /// Parameter name.
    pub name: &'a str,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: &'a str,
    /// Whether the parameter is mandatory.
    pub required: bool,
    /// Widget and initial value.
    pub field: FieldConfig,
}

/// Executes the fields command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &FieldsArgs) -> AppResult<()> {
    let model = extract_docs_model(&args.spec.load()?);
    let operation = find_operation(&model, &args.operation)?;

    let rendered = serde_json::to_string_pretty(&field_rows(operation))
        .map_err(|e| AppError::General(format!("Failed to serialize fields: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Looks up an operation or names the missing id.
pub fn find_operation<'a>(
    model: &'a DocsModel,
    operation_id: &str,
) -> AppResult<&'a OperationRecord> {
    model
        .find_operation(operation_id)
        .ok_or_else(|| AppError::General(format!("Unknown operation: {}", operation_id)))
}

/// Field rows of an operation, in parameter order.
pub fn field_rows(operation: &OperationRecord) -> Vec<FieldRow<'_>> {
    operation
        .parameters
        .iter()
        .map(|param| FieldRow {
            name: &param.name,
            location: &param.location,
            required: param.required,
            field: field_config_for_parameter(param),
        })
        .collect()
}
