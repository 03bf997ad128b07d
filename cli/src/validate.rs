#![deny(missing_docs)]

//! # Validate Command
//!
//! Structural preflight of the OpenAPI document. Prints a confirmation on success.

use crate::args::{RulesArgs, SpecArgs};
use apidoc_core::{validate_document, AppResult};

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[clap(flatten)]
    pub spec: SpecArgs,

    #[clap(flatten)]
    pub rules: RulesArgs,
}

/// Executes the validation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &ValidateArgs) -> AppResult<()> {
    let document = args.spec.load()?;
    validate_document(&document, &args.rules.rules())?;

    println!("{} validation passed", args.spec.display_name());
    Ok(())
}
