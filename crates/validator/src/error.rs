//! Errors raised by the schema layer.
//!
//! These are integration defects, not user input problems: a schema that does
//! not parse, or a host that hands an attribute a value of the wrong kind.
//! They are kept apart from [`ValidationErrors`](crate::foundation::ValidationErrors)
//! so a host can fail fast on them instead of reporting them to the user.

use crate::schema::ValueKind;

/// Error type for schema loading and dynamic attribute dispatch.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The value's kind disagrees with the rule declared for the attribute.
    #[error("attribute {key:?} expects {expected}, got {actual}")]
    KindMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// The JSON value has no attribute kind (array, float, ...).
    #[error("attribute {key:?} holds an unsupported JSON {json_type}")]
    UnsupportedValue { key: String, json_type: &'static str },

    /// A JSON integer above `i64::MAX`, which no integer attribute accepts.
    #[error("attribute {key:?} holds integer {value}, above the largest supported {max}")]
    IntegerOutOfRange { key: String, value: u64, max: i64 },

    /// Two JSON members flatten to the same dotted key.
    #[error("attribute {key:?} is given more than once")]
    DuplicateAttribute { key: String },

    /// The schema document could not be parsed.
    #[error("invalid resource schema: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SchemaError {
    /// Returns true for the kind-mismatch variant.
    #[must_use]
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::KindMismatch { .. })
    }
}

/// Result type for the schema layer.
pub type SchemaResult<T> = Result<T, SchemaError>;
