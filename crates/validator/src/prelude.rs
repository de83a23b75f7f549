//! Prelude module for convenient imports.
//!
//! ```
//! use edgeconf_validator::prelude::*;
//!
//! let outcome = ResourceSchema::dns_record()
//!     .validate(&Attributes::from([("ttl".to_owned(), AttributeValue::Int(300))]))
//!     .unwrap();
//! assert!(outcome.is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, outcome
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors, ValidationOutcome};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// SCHEMA: Dynamic dispatch
// ============================================================================

pub use crate::error::{SchemaError, SchemaResult};
pub use crate::schema::{
    AttributeRule, AttributeValue, Attributes, ResourceSchema, ValueKind, attributes_from_json,
    validate_dns_record,
};
