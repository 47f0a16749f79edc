//! Predicates shared by every request form.
//!
//! All functions are pure; they only answer whether a value is acceptable and
//! leave the choice of error message to the caller.

use serde_json::{Map, Value};

use crate::domain::types::is_document_id;

/// Returns `false` for a missing value, JSON `null`, or a string that is
/// empty after trimming. Any other value counts as present.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Returns `true` when the map carries at least one key.
///
/// Used both for request bodies and for query strings.
pub fn has_body(map: &Map<String, Value>) -> bool {
    !map.is_empty()
}

/// Returns `true` when `value` is a 24 character hex identifier.
pub fn is_well_formed_id(value: &str) -> bool {
    is_document_id(value)
}
