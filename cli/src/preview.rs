#![deny(missing_docs)]

//! # Preview Command
//!
//! Prints the curl command the console would show for an operation.

use crate::args::{parse_key_val, SpecArgs};
use crate::fields::find_operation;
use apidoc_core::{
    build_curl_preview_for_operation, default_query_values, extract_docs_model, AppResult,
    OperationRecord,
};

/// Arguments for the preview command.
#[derive(clap::Args, Debug, Clone)]
pub struct PreviewArgs {
    #[clap(flatten)]
    pub spec: SpecArgs,

    /// operationId (or `<method>_<route>` for operations without one).
    #[clap(long)]
    pub operation: String,

    /// API base URL. Empty renders a relative command.
    #[clap(long, env = "APIDOC_API_BASE", default_value = "")]
    pub api_base: String,

    /// Query value as `key=value`. Overrides schema defaults.
    #[clap(long, value_parser = parse_key_val)]
    pub query: Vec<(String, String)>,

    /// Raw request body.
    #[clap(long, default_value = "")]
    pub body: String,
}

/// Executes the preview command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &PreviewArgs) -> AppResult<()> {
    let model = extract_docs_model(&args.spec.load()?);
    let operation = find_operation(&model, &args.operation)?;

    println!("{}", render(args, operation)?);
    Ok(())
}

/// Renders the preview, starting from the form's default values.
fn render(args: &PreviewArgs, operation: &OperationRecord) -> AppResult<String> {
    let mut query = default_query_values(operation);
    for (key, value) in &args.query {
        query.insert(key.clone(), value.clone());
    }
    build_curl_preview_for_operation(&args.api_base, operation, &query, &args.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_core::{parse_document, AppError};
    use pretty_assertions::assert_eq;

    const YAML: &str = r#"
openapi: 3.0.3
paths:
  /now:
    get:
      operationId: getNow
      parameters:
        - name: format
          in: query
          schema: {type: string, enum: [seconds, iso]}
        - name: tz
          in: query
          schema: {type: string}
  /validate:
    post:
      operationId: validate
"#;

    fn args(operation: &str, api_base: &str, query: &[(&str, &str)], body: &str) -> PreviewArgs {
        PreviewArgs {
            spec: SpecArgs {
                spec: "unused.yaml".into(),
            },
            operation: operation.into(),
            api_base: api_base.into(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.into(),
        }
    }

    #[test]
    fn test_render_uses_schema_defaults() {
        let model = extract_docs_model(&parse_document(YAML).unwrap());
        let op = find_operation(&model, "getNow").unwrap();

        let curl = render(&args("getNow", "", &[], ""), op).unwrap();
        assert_eq!(curl, r#"curl -X GET "/now?format=seconds""#);
    }

    #[test]
    fn test_render_explicit_query_wins() {
        let model = extract_docs_model(&parse_document(YAML).unwrap());
        let op = find_operation(&model, "getNow").unwrap();

        let curl = render(
            &args("getNow", "http://localhost:8080", &[("format", "iso"), ("tz", "")], ""),
            op,
        )
        .unwrap();
        assert_eq!(curl, r#"curl -X GET "http://localhost:8080/now?format=iso""#);
    }

    #[test]
    fn test_render_with_body() {
        let model = extract_docs_model(&parse_document(YAML).unwrap());
        let op = find_operation(&model, "validate").unwrap();

        let curl = render(&args("validate", "", &[], r#"{"a":1}"#), op).unwrap();
        assert_eq!(
            curl,
            r#"curl -X POST "/validate" -H "content-type: application/json" -d '{"a":1}'"#
        );
    }

    #[test]
    fn test_render_bad_base() {
        let model = extract_docs_model(&parse_document(YAML).unwrap());
        let op = find_operation(&model, "getNow").unwrap();

        let err = render(&args("getNow", "localhost", &[], ""), op).unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }
}
