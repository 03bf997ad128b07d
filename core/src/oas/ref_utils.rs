#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Resolves local `$ref` markers (`#/components/...`) against the document root.
//!
//! Resolution is one level deep: the target node is returned as declared and any
//! `$ref` nested inside it is left for the caller to treat as plain data.
//! External or relative references are never fetched.
//!
//! Pointer segments are RFC 6901 decoded (`~1` -> `/`, `~0` -> `~`) before lookup,
//! so `#/paths/~1now/get` resolves where a raw-segment lookup would not.

use serde_json::Value;

/// Key that marks a node as a reference.
pub const REF_KEY: &str = "$ref";

/// Prefix of references that point into the current document.
pub const LOCAL_REF_PREFIX: &str = "#/";

/// Resolves `node` if it is a local reference marker.
///
/// Returns the target node on success. Anything else (plain nodes, external
/// references, dangling pointers, pointers that cross a non-object) yields
/// `node` itself, so the result is never emptier than the input.
pub fn resolve_ref<'a>(document: &'a Value, node: &'a Value) -> &'a Value {
    let Some(pointer) = local_pointer(node) else {
        return node;
    };

    match lookup_pointer(document, pointer) {
        Some(target) if !target.is_null() => target,
        _ => {
            log::debug!("Unresolved reference '{}{}' kept as-is", LOCAL_REF_PREFIX, pointer);
            node
        }
    }
}

/// Returns the pointer body (after `#/`) of a local reference marker.
fn local_pointer(node: &Value) -> Option<&str> {
    node.as_object()?
        .get(REF_KEY)?
        .as_str()?
        .strip_prefix(LOCAL_REF_PREFIX)
}

/// Walks `pointer` from the document root, one lookup per segment.
/// Sequences are indexed by decimal segments.
fn lookup_pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in pointer.split('/') {
        let key = decode_pointer_segment(segment);
        current = match current {
            Value::Object(map) => map.get(&key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
