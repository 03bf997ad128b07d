#![deny(missing_docs)]

//! Flattening of OpenAPI `paths` into the docs model.
//!
//! Iterates routes in declared order and, within each route, methods in declared
//! order. Parameter and response entries are resolved one level via
//! [`resolve_ref`]; everything below that level is copied as-is.

use crate::oas::document::{coerce_to_string, is_truthy};
use crate::oas::models::{DocsModel, HttpMethod, OperationRecord, ParameterRecord, ResponseRecord};
use crate::oas::ref_utils::resolve_ref;
use serde_json::{Map, Value};

/// Builds the docs model from a parsed description document.
///
/// Never fails: missing sections default to empty values and unsupported
/// method keys are skipped.
pub fn extract_docs_model(document: &Value) -> DocsModel {
    DocsModel {
        info: document
            .get("info")
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())),
        servers: document
            .get("servers")
            .filter(|v| !v.is_null())
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
        operations: extract_operations(document),
    }
}

/// Extracts the flat operation list.
pub fn extract_operations(document: &Value) -> Vec<OperationRecord> {
    let mut operations = Vec::new();

    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return operations;
    };

    for (route, path_item) in paths {
        let Some(path_item) = path_item.as_object() else {
            continue;
        };

        for (method_key, operation) in path_item {
            let Some(method) = HttpMethod::from_key(method_key) else {
                log::debug!("Skipping unsupported key '{}' under {}", method_key, route);
                continue;
            };
            operations.push(build_operation(document, route, method, operation));
        }
    }

    operations
}

fn build_operation(
    document: &Value,
    route: &str,
    method: HttpMethod,
    operation: &Value,
) -> OperationRecord {
    // 1. Identity
    let operation_id = match operation.get("operationId") {
        Some(id) if !id.is_null() => coerce_to_string(id),
        _ => format!("{}_{}", method.as_str().to_lowercase(), route),
    };

    // 2. Parameters
    let parameters = sequence(operation, "parameters")
        .iter()
        .map(|node| build_parameter(resolve_ref(document, node)))
        .collect();

    // 3. Responses
    let responses = operation
        .get("responses")
        .and_then(Value::as_object)
        .map(|entries| {
            ordered_entries(entries)
                .into_iter()
                .map(|(status, node)| build_response(status, resolve_ref(document, node)))
                .collect()
        })
        .unwrap_or_default();

    OperationRecord {
        operation_id,
        method,
        path: route.to_string(),
        summary: text(operation, "summary"),
        description: text(operation, "description"),
        tags: sequence(operation, "tags")
            .iter()
            .map(coerce_to_string)
            .collect(),
        parameters,
        request_body: operation.get("requestBody").cloned().unwrap_or(Value::Null),
        responses,
    }
}

fn build_parameter(param: &Value) -> ParameterRecord {
    ParameterRecord {
        name: text(param, "name"),
        location: text(param, "in"),
        required: param.get("required").is_some_and(is_truthy),
        description: text(param, "description"),
        schema: param.get("schema").cloned().unwrap_or(Value::Null),
    }
}

fn build_response(status: &str, response: &Value) -> ResponseRecord {
    ResponseRecord {
        status: status.to_string(),
        description: text(response, "description"),
        content_types: response
            .get("content")
            .and_then(Value::as_object)
            .map(|content| content.keys().cloned().collect())
            .unwrap_or_default(),
    }
}

/// Orders mapping entries the way the web console enumerates object keys:
/// array-index keys (`"200"`, `"404"`) ascending by value, then every other
/// key (`"default"`, `"2XX"`, `"0200"`) in declaration order.
fn ordered_entries(entries: &Map<String, Value>) -> Vec<(&str, &Value)> {
    let (mut indexed, named): (Vec<_>, Vec<_>) = entries
        .iter()
        .map(|(key, value)| (array_index(key), key.as_str(), value))
        .partition(|(index, _, _)| index.is_some());
    indexed.sort_by_key(|(index, _, _)| *index);

    indexed
        .into_iter()
        .chain(named)
        .map(|(_, key, value)| (key, value))
        .collect()
}

/// Canonical decimal array index below `2^32 - 1`, without leading zeros.
fn array_index(key: &str) -> Option<u32> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index < u32::MAX)
}

/// Reads an optional textual field, defaulting to `""`.
fn text(node: &Value, key: &str) -> String {
    match node.get(key) {
        Some(value) if !value.is_null() => coerce_to_string(value),
        _ => String::new(),
    }
}

/// Reads an optional sequence field, defaulting to `[]`.
fn sequence<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    node.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::document::parse_document;
    use serde_json::json;

    const CLOCK_API: &str = r#"
openapi: 3.0.3
info:
  title: Clock
  version: 1.0.0
servers:
  - url: http://localhost:8080
paths:
  /now:
    get:
      operationId: getNow
      summary: Current time
      tags: [time]
      parameters:
        - $ref: '#/components/parameters/Format'
        - name: json
          in: query
          schema:
            type: boolean
      responses:
        '200':
          $ref: '#/components/responses/Timestamp'
        default:
          description: Unexpected
  /validate:
    options:
      summary: CORS preflight
    post:
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Token'
      responses:
        '200':
          description: Valid
          content:
            application/json: {}
            text/plain: {}
components:
  parameters:
    Format:
      name: format
      in: query
      required: true
      description: Output format
      schema:
        $ref: '#/components/schemas/Format'
  responses:
    Timestamp:
      description: A timestamp
      content:
        application/json: {}
  schemas:
    Format:
      type: string
      enum: [seconds, iso]
    Token:
      type: object
"#;

    #[test]
    fn test_extract_basic_operations() {
        let doc = parse_document(CLOCK_API).unwrap();
        let model = extract_docs_model(&doc);

        assert_eq!(model.info["title"], "Clock");
        assert_eq!(model.servers, json!([{ "url": "http://localhost:8080" }]));
        assert_eq!(model.operations.len(), 2);

        let get_now = &model.operations[0];
        assert_eq!(get_now.operation_id, "getNow");
        assert_eq!(get_now.method, HttpMethod::Get);
        assert_eq!(get_now.path, "/now");
        assert_eq!(get_now.summary, "Current time");
        assert_eq!(get_now.description, "");
        assert_eq!(get_now.tags, vec!["time"]);
        assert_eq!(get_now.request_body, Value::Null);
    }

    #[test]
    fn test_extract_resolves_parameter_refs_shallowly() {
        let doc = parse_document(CLOCK_API).unwrap();
        let ops = extract_operations(&doc);
        let params = &ops[0].parameters;

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "format");
        assert_eq!(params[0].location, "query");
        assert!(params[0].required);
        assert_eq!(params[0].description, "Output format");
        assert_eq!(
            params[0].schema,
            json!({ "$ref": "#/components/schemas/Format" })
        );

        assert_eq!(params[1].name, "json");
        assert!(!params[1].required);
        assert_eq!(params[1].schema, json!({ "type": "boolean" }));
    }

    #[test]
    fn test_extract_resolves_response_refs() {
        let doc = parse_document(CLOCK_API).unwrap();
        let ops = extract_operations(&doc);
        let responses = &ops[0].responses;

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].status, "200");
        assert_eq!(responses[0].description, "A timestamp");
        assert_eq!(responses[0].content_types, vec!["application/json"]);
        assert_eq!(responses[1].status, "default");
        assert!(responses[1].content_types.is_empty());
    }

    #[test]
    fn test_extract_skips_unsupported_methods_and_fabricates_ids() {
        let doc = parse_document(CLOCK_API).unwrap();
        let ops = extract_operations(&doc);
        let post = &ops[1];

        assert_eq!(post.method, HttpMethod::Post);
        assert_eq!(post.operation_id, "post_/validate");
        assert_eq!(post.request_body["required"], json!(true));
        // Request bodies are passed through without resolution.
        assert_eq!(
            post.request_body["content"]["application/json"]["schema"],
            json!({ "$ref": "#/components/schemas/Token" })
        );
        assert_eq!(
            post.responses[0].content_types,
            vec!["application/json", "text/plain"]
        );
    }

    #[test]
    fn test_extract_keeps_declaration_order() {
        let doc = json!({
            "paths": {
                "/b": { "post": {}, "get": {} },
                "/a": { "DELETE": {}, "put": {}, "patch": {} }
            }
        });
        let ops = extract_operations(&doc);
        let order: Vec<(String, &str)> = ops
            .iter()
            .map(|op| (op.path.clone(), op.method.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("/b".to_string(), "POST"),
                ("/b".to_string(), "GET"),
                ("/a".to_string(), "DELETE"),
                ("/a".to_string(), "PUT"),
                ("/a".to_string(), "PATCH"),
            ]
        );
        assert_eq!(ops[2].operation_id, "delete_/a");
    }

    #[test]
    fn test_extract_orders_numeric_statuses_first() {
        let doc = parse_document(
            r#"
paths:
  /now:
    get:
      responses:
        default:
          description: Unexpected
        '404':
          description: Missing
        2XX:
          description: Any success
        '200':
          description: OK
"#,
        )
        .unwrap();
        let ops = extract_operations(&doc);
        let statuses: Vec<&str> = ops[0]
            .responses
            .iter()
            .map(|r| r.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["200", "404", "default", "2XX"]);
        assert_eq!(ops[0].responses[0].description, "OK");
    }

    #[test]
    fn test_array_index_keys() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("200"), Some(200));
        assert_eq!(array_index("4294967294"), Some(4_294_967_294));
        assert_eq!(array_index("4294967295"), None);
        assert_eq!(array_index("0200"), None);
        assert_eq!(array_index("2XX"), None);
        assert_eq!(array_index("+1"), None);
        assert_eq!(array_index(""), None);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let doc = parse_document(CLOCK_API).unwrap();
        assert_eq!(extract_docs_model(&doc), extract_docs_model(&doc));
    }

    #[test]
    fn test_extract_defaults_for_empty_document() {
        let model = extract_docs_model(&json!({}));
        assert_eq!(model.info, json!({}));
        assert_eq!(model.servers, json!([]));
        assert!(model.operations.is_empty());
    }

    #[test]
    fn test_extract_dangling_parameter_ref() {
        let doc = json!({
            "paths": {
                "/x": {
                    "get": {
                        "parameters": [{ "$ref": "#/components/parameters/Nope" }],
                        "responses": { "404": { "$ref": "#/components/responses/Nope" } }
                    }
                }
            }
        });
        let ops = extract_operations(&doc);
        let param = &ops[0].parameters[0];
        assert_eq!(param.name, "");
        assert_eq!(param.location, "");
        assert!(!param.required);
        assert_eq!(param.schema, Value::Null);
        assert_eq!(ops[0].responses[0].status, "404");
        assert_eq!(ops[0].responses[0].description, "");
    }

    #[test]
    fn test_extract_tolerates_malformed_operation() {
        let doc = json!({
            "paths": {
                "/x": { "get": null, "summary": "route level", "parameters": [] },
                "/y": "not an object"
            }
        });
        let ops = extract_operations(&doc);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].operation_id, "get_/x");
        assert!(ops[0].parameters.is_empty());
        assert!(ops[0].responses.is_empty());
    }
}
