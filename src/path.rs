//! Dotted-path lookups into loosely structured GraphQL responses.
//!
//! Any branch of a GraphQL response may be `null`, so every step of the walk
//! degrades to `None` instead of failing.

use serde_json::Value;

/// Walk `path` (e.g. `organization.membersWithRole.pageInfo`) through nested
/// objects. Missing keys, `null`s and non-object intermediates yield `None`.
pub fn get_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(data, |current, key| current.as_object()?.get(key))
        .filter(|value| !value.is_null())
}

/// Like [`get_path`], returning an owned copy or `default`.
pub fn get_path_or(data: &Value, path: &str, default: Value) -> Value {
    get_path(data, path).cloned().unwrap_or(default)
}
