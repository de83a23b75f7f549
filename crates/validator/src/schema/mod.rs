//! Dynamic attribute validation for host frameworks.
//!
//! The typed validators in [`crate::validators`] cover callers that know
//! their value types at compile time. A host that receives configuration as
//! loosely typed data uses this module instead:
//!
//! 1. values arrive as [`AttributeValue`]s (or JSON, via [`attributes_from_json`]);
//! 2. a [`ResourceSchema`] names the [`AttributeRule`] guarding each key;
//! 3. [`ResourceSchema::validate`] runs every rule and unions the errors.
//!
//! ```
//! use edgeconf_validator::schema::{ResourceSchema, attributes_from_json};
//! use serde_json::json;
//!
//! let attrs = attributes_from_json(&json!({
//!     "status": "active",
//!     "actions": { "ssl": "strict", "cache_level": "everything" },
//! }))
//! .unwrap();
//!
//! let outcome = ResourceSchema::page_rule().validate(&attrs).unwrap();
//! assert_eq!(outcome.errors.len(), 1);
//! ```

mod resource;
mod rule;
mod value;

pub use resource::{ResourceSchema, validate_dns_record};
pub use rule::AttributeRule;
pub use value::{AttributeValue, Attributes, ValueKind, attributes_from_json};
