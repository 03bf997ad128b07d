#![deny(missing_docs)]

//! # Curl Preview
//!
//! Renders the single-line `curl` command the console shows for the request
//! being built. Nothing is sent.

use crate::config::{JSON_CONTENT_TYPE_HEADER, PLACEHOLDER_ORIGIN};
use crate::error::{AppError, AppResult};
use crate::oas::models::OperationRecord;
use indexmap::IndexMap;
use url::Url;

/// Builds the curl command for `method path` against `api_base`.
///
/// - A non-empty (trimmed) `api_base` is prefixed to `path` and the absolute URL
///   is rendered. An empty one renders only path and query.
/// - Query entries with empty values are skipped. A key already present in
///   `path` is overwritten in place.
/// - A non-blank `body` adds a JSON content-type header and a single-quoted
///   `-d` argument that is safe for POSIX shells.
///
/// # Errors
///
/// `AppError::InvalidUrl` when `api_base` + `path` does not parse as a URL.
pub fn build_curl_preview(
    api_base: &str,
    method: &str,
    path: &str,
    query: &IndexMap<String, String>,
    body: &str,
) -> AppResult<String> {
    let base = api_base.trim();
    let mut url = target_url(base, path)?;
    apply_query(&mut url, query);

    let rendered_url = if base.is_empty() {
        relative_form(&url)
    } else {
        url.as_str().to_string()
    };

    let mut segments = vec![
        format!("curl -X {}", method.to_uppercase()),
        format!("\"{}\"", rendered_url),
    ];

    if !body.trim().is_empty() {
        segments.push(JSON_CONTENT_TYPE_HEADER.to_string());
        segments.push(format!("-d '{}'", quote_single(body)));
    }

    Ok(segments.join(" "))
}

/// Same as [`build_curl_preview`], taking method and path from an operation.
pub fn build_curl_preview_for_operation(
    api_base: &str,
    operation: &OperationRecord,
    query: &IndexMap<String, String>,
    body: &str,
) -> AppResult<String> {
    build_curl_preview(
        api_base,
        operation.method.as_str(),
        &operation.path,
        query,
        body,
    )
}

fn target_url(base: &str, path: &str) -> AppResult<Url> {
    let parsed = if base.is_empty() {
        Url::parse(PLACEHOLDER_ORIGIN).and_then(|origin| origin.join(path))
    } else {
        Url::parse(&format!("{}{}", base, path))
    };

    parsed.map_err(|e| {
        AppError::InvalidUrl(format!(
            "Cannot build a URL from base '{}' and path '{}': {}",
            base, path, e
        ))
    })
}

/// Sets every non-empty entry of `query` on the URL's query string.
fn apply_query(url: &mut Url, query: &IndexMap<String, String>) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let mut changed = false;

    for (key, value) in query {
        if value.is_empty() {
            continue;
        }
        set_pair(&mut pairs, key, value);
        changed = true;
    }

    if changed {
        url.query_pairs_mut().clear().extend_pairs(&pairs);
    }
}

/// Replaces the first `key` entry in place and drops later duplicates,
/// or appends when the key is new.
fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = index <= first || k != key;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

fn relative_form(url: &Url) -> String {
    match url.query().filter(|q| !q.is_empty()) {
        Some(q) => format!("{}?{}", url.path(), q),
        None => url.path().to_string(),
    }
}

/// Escapes `'` for embedding inside a single-quoted shell word.
fn quote_single(value: &str) -> String {
    value.replace('\'', "'\\''")
}
