//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text values are checked once, at the boundary, and stay
//! valid for the rest of the request.

use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hex characters in a document identifier.
pub const DOCUMENT_ID_LEN: usize = 24;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// An identifier did not match the document identifier format.
    #[error("{0} must be a 24 character hex string")]
    InvalidId(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Returns `true` when `value` has the shape of a document identifier.
pub fn is_document_id(value: &str) -> bool {
    value.len() == DOCUMENT_ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Store-assigned identifier shared by every collection.
///
/// The first four bytes hold the creation time in seconds since the epoch
/// (big-endian), the remaining eight are random. Rendered as lowercase hex.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Parses an identifier, normalising hex digits to lowercase.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        Self::new_for_field(value, "id")
    }

    /// Same as [`Self::new`] but with field-specific error context.
    pub fn new_for_field<S: AsRef<str>>(
        value: S,
        field: &'static str,
    ) -> Result<Self, TypeConstraintError> {
        let value = value.as_ref();
        if is_document_id(value) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(TypeConstraintError::InvalidId(field))
        }
    }

    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();
        let random = uuid::Uuid::new_v4();

        let mut bytes = [0u8; DOCUMENT_ID_LEN / 2];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&random.as_bytes()[..8]);

        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Macro to generate per-collection identifier newtypes over [`DocumentId`].
macro_rules! document_id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(DocumentId);

        impl $name {
            /// Parses a well-formed identifier.
            pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
                DocumentId::new_for_field(value, $field).map(Self)
            }

            /// Generates a fresh identifier for a new document.
            pub fn generate() -> Self {
                Self(DocumentId::generate())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Consume the wrapper returning the owned string.
            pub fn into_inner(self) -> String {
                self.0.into_inner()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.into_inner()
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

document_id_newtype!(CategoryId, "Identifier of a category document.", "categoryId");
document_id_newtype!(ProductId, "Identifier of a product document.", "productId");

non_empty_string_newtype!(CategoryName, "Trimmed category name.", "name");
non_empty_string_newtype!(
    CategoryDescription,
    "Trimmed category description.",
    "description"
);
non_empty_string_newtype!(ProductName, "Trimmed product name.", "name");
non_empty_string_newtype!(
    ProductDescription,
    "Trimmed product description.",
    "description"
);

/// Lifecycle state of a stored document.
///
/// Documents start `Active` and can only move to `Deleted`; deleted documents
/// stay in the store but are invisible to every lookup.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    #[default]
    Active,
    Deleted,
}

impl EntityStatus {
    /// Maps the persisted `is_deleted` flag to a status.
    pub const fn from_deleted_flag(is_deleted: bool) -> Self {
        if is_deleted {
            Self::Deleted
        } else {
            Self::Active
        }
    }

    /// Whether the document has been soft-deleted.
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}
