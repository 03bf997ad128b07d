#![deny(missing_docs)]

//! # Generate Command
//!
//! Pipeline: OpenAPI document -> structural validation -> docs model JSON.

use crate::args::{RulesArgs, SpecArgs};
use apidoc_core::{extract_docs_model, validate_document, AppError, AppResult};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub spec: SpecArgs,

    /// Output path for the docs model.
    #[clap(long, env = "APIDOC_OUT", default_value = "web/src/generated/docs-model.json")]
    pub out: PathBuf,

    #[clap(flatten)]
    pub rules: RulesArgs,

    /// Skip the structural validation gate.
    #[clap(long)]
    pub skip_validation: bool,
}

/// Executes the docs model generation.
///
/// Nothing is written when validation fails.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    // 1. Read Document
    let document = args.spec.load()?;

    // 2. Gate
    if args.skip_validation {
        log::warn!("Structural validation skipped (--skip-validation)");
    } else {
        validate_document(&document, &args.rules.rules())?;
    }

    // 3. Extract
    let model = extract_docs_model(&document);
    let rendered = serde_json::to_string_pretty(&model)
        .map_err(|e| AppError::General(format!("Failed to serialize docs model: {}", e)))?;

    // 4. Write File
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.out, rendered)?;

    println!(
        "Wrote {} operations to {}",
        model.operations.len(),
        args.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    const YAML: &str = r#"
openapi: 3.0.3
info: {title: Clock, version: '1'}
paths:
  /now:
    get:
      operationId: getNow
      parameters:
        - $ref: '#/components/parameters/Format'
      responses:
        '200': {description: OK}
components:
  parameters:
    Format:
      name: format
      in: query
      schema: {type: string, enum: [seconds, iso]}
"#;

    fn args_for(dir: &std::path::Path, required: &[&str]) -> GenerateArgs {
        GenerateArgs {
            spec: SpecArgs {
                spec: dir.join("openapi.yaml"),
            },
            out: dir.join("web/src/generated/docs-model.json"),
            rules: RulesArgs {
                required_paths: required.iter().map(|p| p.to_string()).collect(),
            },
            skip_validation: false,
        }
    }

    #[test]
    fn test_execute_writes_model() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("openapi.yaml"), YAML).unwrap();
        let args = args_for(dir.path(), &["/now"]);

        execute(&args).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&args.out).unwrap()).unwrap();
        assert_eq!(written["info"], json!({"title": "Clock", "version": "1"}));
        assert_eq!(written["servers"], json!([]));
        assert_eq!(written["operations"][0]["operationId"], "getNow");
        assert_eq!(written["operations"][0]["parameters"][0]["name"], "format");
    }

    #[test]
    fn test_execute_validation_blocks_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("openapi.yaml"), YAML).unwrap();
        let args = args_for(dir.path(), &["/now", "/validate"]);

        let err = execute(&args).unwrap_err();
        assert!(format!("{}", err).contains("Missing required path: /validate"));
        assert!(!args.out.exists());
    }

    #[test]
    fn test_execute_skip_validation() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("openapi.yaml"), YAML).unwrap();
        let mut args = args_for(dir.path(), &["/validate"]);
        args.skip_validation = true;

        execute(&args).unwrap();
        assert!(args.out.exists());
    }
}
