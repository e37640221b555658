//! Recursive JSON comparison for envelope assertions.
//!
//! All matching operates on `serde_json::Value` trees and reports the
//! JSON path at which matching failed, rooted at `$`. Four strategies:
//!
//! 1. Exact equality, first differing path wins
//! 2. Rooted subset: expected keys must exist and match, extras allowed
//! 3. Fragment containment: key/value pairs found anywhere in the tree
//! 4. Structure: key presence only, values ignored

use crate::error::{AssertError, AssertResult};
use crate::logging::log_debug;
use serde_json::Value;

/// Compare two JSON trees for exact equality.
///
/// Reports the first differing path, including keys present on one side
/// only and array length differences.
pub(crate) fn match_exact(actual: &Value, expected: &Value) -> AssertResult<()> {
    log_debug!(strategy = "exact", "Matching JSON trees");
    match_exact_at(actual, expected, "$")
}

fn match_exact_at(actual: &Value, expected: &Value, path: &str) -> AssertResult<()> {
    match (actual, expected) {
        (Value::Object(actual_map), Value::Object(expected_map)) => {
            for (key, expected_child) in expected_map {
                match actual_map.get(key) {
                    Some(actual_child) => {
                        match_exact_at(actual_child, expected_child, &child_path(path, key))?;
                    }
                    None => {
                        return Err(AssertError::mismatch(
                            child_path(path, key),
                            format!("missing key, expected {expected_child}"),
                        ));
                    }
                }
            }
            for key in actual_map.keys() {
                if !expected_map.contains_key(key) {
                    return Err(AssertError::mismatch(
                        child_path(path, key),
                        "unexpected key".to_string(),
                    ));
                }
            }
            Ok(())
        }
        (Value::Array(actual_items), Value::Array(expected_items)) => {
            if actual_items.len() != expected_items.len() {
                return Err(AssertError::mismatch(
                    path,
                    format!(
                        "array length {} does not match expected {}",
                        actual_items.len(),
                        expected_items.len()
                    ),
                ));
            }
            for (index, (actual_child, expected_child)) in
                actual_items.iter().zip(expected_items).enumerate()
            {
                match_exact_at(actual_child, expected_child, &index_path(path, index))?;
            }
            Ok(())
        }
        _ if actual == expected => Ok(()),
        _ => Err(AssertError::mismatch(
            path,
            format!("expected {expected}, got {actual}"),
        )),
    }
}

/// Check that `expected` is a rooted structural subset of `actual`.
///
/// Every expected object key must exist with a matching value; objects
/// recurse, array elements are compared by index. Extra actual keys and
/// trailing actual array elements are allowed.
pub(crate) fn match_subset(actual: &Value, expected: &Value) -> AssertResult<()> {
    log_debug!(strategy = "subset", "Matching JSON trees");
    match_subset_at(actual, expected, "$")
}

fn match_subset_at(actual: &Value, expected: &Value, path: &str) -> AssertResult<()> {
    match (actual, expected) {
        (Value::Object(actual_map), Value::Object(expected_map)) => {
            for (key, expected_child) in expected_map {
                match actual_map.get(key) {
                    Some(actual_child) => {
                        match_subset_at(actual_child, expected_child, &child_path(path, key))?;
                    }
                    None => {
                        return Err(AssertError::mismatch(
                            child_path(path, key),
                            format!("missing key, expected {expected_child}"),
                        ));
                    }
                }
            }
            Ok(())
        }
        (Value::Array(actual_items), Value::Array(expected_items)) => {
            for (index, expected_child) in expected_items.iter().enumerate() {
                match actual_items.get(index) {
                    Some(actual_child) => {
                        match_subset_at(actual_child, expected_child, &index_path(path, index))?;
                    }
                    None => {
                        return Err(AssertError::mismatch(
                            index_path(path, index),
                            format!("missing array element, expected {expected_child}"),
                        ));
                    }
                }
            }
            Ok(())
        }
        _ if actual == expected => Ok(()),
        _ => Err(AssertError::mismatch(
            path,
            format!("expected {expected}, got {actual}"),
        )),
    }
}

/// Check that every key/value pair of the `fragment` object appears
/// somewhere in the actual tree.
///
/// A pair matches when any object at any depth carries the key with an
/// equal value. Values compare by deep equality, so nested objects and
/// arrays must match exactly where they appear.
pub(crate) fn match_contains(actual: &Value, fragment: &Value) -> AssertResult<()> {
    log_debug!(strategy = "contains", "Matching JSON trees");
    let pairs = match fragment {
        Value::Object(map) => map,
        other => {
            return Err(AssertError::mismatch(
                "$",
                format!("fragment must be a JSON object, got {}", value_kind(other)),
            ));
        }
    };
    for (key, expected) in pairs {
        if !tree_has_pair(actual, key, expected) {
            return Err(AssertError::mismatch(
                "$",
                format!("no object in body has the pair \"{key}\": {expected}"),
            ));
        }
    }
    Ok(())
}

fn tree_has_pair(actual: &Value, key: &str, expected: &Value) -> bool {
    match actual {
        Value::Object(map) => {
            if map.get(key) == Some(expected) {
                return true;
            }
            map.values().any(|child| tree_has_pair(child, key, expected))
        }
        Value::Array(items) => items.iter().any(|child| tree_has_pair(child, key, expected)),
        _ => false,
    }
}

/// Check that `actual` has the key structure described by `structure`.
///
/// - an array lists required keys (`["data", "meta"]`); object entries
///   in the array recurse
/// - an object maps a required key to the structure of its value
///   (`{"data": ["id", "name"]}`)
/// - the wildcard key `"*"` requires an array whose every element
///   matches the nested structure
///
/// Values are never compared, only key presence.
pub(crate) fn match_structure(actual: &Value, structure: &Value) -> AssertResult<()> {
    log_debug!(strategy = "structure", "Matching JSON trees");
    match_structure_at(actual, structure, "$")
}

fn match_structure_at(actual: &Value, structure: &Value, path: &str) -> AssertResult<()> {
    match structure {
        Value::String(key) => {
            require_key(actual, key, path)?;
            Ok(())
        }
        Value::Array(entries) => {
            for entry in entries {
                match entry {
                    Value::String(key) => {
                        require_key(actual, key, path)?;
                    }
                    Value::Object(_) => match_structure_at(actual, entry, path)?,
                    other => {
                        return Err(AssertError::mismatch(
                            path,
                            format!("invalid structure entry {other}"),
                        ));
                    }
                }
            }
            Ok(())
        }
        Value::Object(map) => {
            for (key, child_structure) in map {
                if key == "*" {
                    match actual {
                        Value::Array(items) => {
                            for (index, item) in items.iter().enumerate() {
                                match_structure_at(item, child_structure, &index_path(path, index))?;
                            }
                        }
                        other => {
                            return Err(AssertError::mismatch(
                                path,
                                format!(
                                    "wildcard structure expects an array, got {}",
                                    value_kind(other)
                                ),
                            ));
                        }
                    }
                } else {
                    let actual_child = require_key(actual, key, path)?;
                    match_structure_at(actual_child, child_structure, &child_path(path, key))?;
                }
            }
            Ok(())
        }
        other => Err(AssertError::mismatch(
            path,
            format!(
                "structure must be a string, array, or object, got {}",
                value_kind(other)
            ),
        )),
    }
}

fn require_key<'a>(actual: &'a Value, key: &str, path: &str) -> AssertResult<&'a Value> {
    match actual {
        Value::Object(map) => map
            .get(key)
            .ok_or_else(|| AssertError::mismatch(child_path(path, key), "missing key".to_string())),
        other => Err(AssertError::mismatch(
            path,
            format!("expected object, got {}", value_kind(other)),
        )),
    }
}

/// Human-readable JSON type name for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn child_path(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}
