//! Request forms turning raw HTTP input into typed payloads.
//!
//! Every endpoint receives the same three ingredients: an optional path
//! identifier, the query string and a JSON body. [`RequestParts`] carries the
//! latter two as JSON maps so the helpers in [`crate::validation`] apply to
//! both.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;
use crate::validation::{has_body, is_present, is_well_formed_id};

pub mod categories;
pub mod products;

/// Errors raised while turning a request into a payload. All of them are
/// client errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("invalid request")]
    UnexpectedQuery,
    #[error("invalid request")]
    UnexpectedBody,
    #[error("invalid request body: {0}")]
    MalformedBody(String),
    /// The request carried nothing to work with; the message says what is missing.
    #[error("{0}")]
    Empty(&'static str),
    #[error("invalid data entered inside request body")]
    UnexpectedFields,
    /// A required field is missing or blank; the message names it.
    #[error("{0}")]
    Required(&'static str),
    #[error("{0} should be in valid format")]
    InvalidFormat(&'static str),
    #[error("{0} must be a string")]
    NotText(&'static str),
    #[error("{value} is not a valid {field}")]
    InvalidId { field: &'static str, value: String },
    #[error("Enter a valid {0}")]
    InvalidTarget(&'static str),
    #[error("form validation failed: {0}")]
    Validation(String),
    #[error("form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for FormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Query string and body of a request, both as JSON maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParts {
    pub query: Map<String, Value>,
    pub body: Map<String, Value>,
}

impl RequestParts {
    /// Build from decoded query pairs and the raw body bytes.
    ///
    /// An empty or whitespace-only body is an empty map. Anything else must be
    /// a JSON object.
    pub fn new(query: HashMap<String, String>, body: &[u8]) -> Result<Self, FormError> {
        let query = query
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        let body = if body.iter().all(u8::is_ascii_whitespace) {
            Map::new()
        } else {
            match serde_json::from_slice::<Value>(body) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(FormError::MalformedBody(
                        "expected a JSON object".to_string(),
                    ));
                }
                Err(e) => return Err(FormError::MalformedBody(e.to_string())),
            }
        };

        Ok(Self { query, body })
    }

    /// Reject requests carrying query parameters.
    pub fn ensure_no_query(&self) -> Result<(), FormError> {
        if has_body(&self.query) {
            Err(FormError::UnexpectedQuery)
        } else {
            Ok(())
        }
    }

    /// Reject requests carrying a body.
    pub fn ensure_no_body(&self) -> Result<(), FormError> {
        if has_body(&self.body) {
            Err(FormError::UnexpectedBody)
        } else {
            Ok(())
        }
    }

    /// Require at least one body key, failing with `message` otherwise.
    pub fn require_body(&self, message: &'static str) -> Result<(), FormError> {
        if has_body(&self.body) {
            Ok(())
        } else {
            Err(FormError::Empty(message))
        }
    }

    /// Require at least one query parameter, failing with `message` otherwise.
    pub fn require_query(&self, message: &'static str) -> Result<(), FormError> {
        if has_body(&self.query) {
            Ok(())
        } else {
            Err(FormError::Empty(message))
        }
    }
}

/// Extract a field that must be present and textual. `missing` is reported
/// when the field is absent or blank.
pub(crate) fn required_text(
    map: &Map<String, Value>,
    field: &'static str,
    missing: &'static str,
) -> Result<String, FormError> {
    let value = map.get(field);
    if !is_present(value) {
        return Err(FormError::Required(missing));
    }
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(FormError::NotText(field)),
    }
}

/// Check a field that may be omitted, but must be valid text when its key
/// was supplied. `None` means the key was absent.
pub(crate) fn optional_text(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Option<String>, FormError> {
    if value.is_none() {
        return Ok(None);
    }
    if !is_present(value) {
        return Err(FormError::InvalidFormat(field));
    }
    match value {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(FormError::NotText(field)),
    }
}

/// Check a path identifier before any lookup happens.
pub(crate) fn path_id(value: String, field: &'static str) -> Result<String, FormError> {
    if is_well_formed_id(&value) {
        Ok(value)
    } else {
        Err(FormError::InvalidId { field, value })
    }
}

/// Check the identifier of the record an update targets.
pub(crate) fn target_id(value: String, field: &'static str) -> Result<String, FormError> {
    if is_well_formed_id(&value) {
        Ok(value)
    } else {
        Err(FormError::InvalidTarget(field))
    }
}
