//! # edgeconf-validator
//!
//! Field validation for declarative edge and DNS configuration.
//!
//! Every validator inspects a single attribute value and reports whether it
//! is acceptable; none of them normalize or mutate the value.
//!
//! ## Quick Start
//!
//! ```
//! use edgeconf_validator::prelude::*;
//!
//! assert!(record_type().validate("CNAME").is_ok());
//! assert!(ssl_mode().validate("Full").is_err());
//! assert!(validate_record_name("AAAA", "2001:db8::1").is_ok());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, structured
//!   errors and the `(warnings, errors)` outcome.
//! - [`validators`]: the membership engine, the attribute catalog and the
//!   record-content check.
//! - [`hooks`]: one `validate_*(value, key)` function per catalogued
//!   attribute, for host frameworks that register validators per field.
//! - [`schema`]: dynamically typed values, named rules and resource schemas
//!   for hosts that receive loosely typed configuration.

pub mod error;
pub mod foundation;
pub mod hooks;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;

pub use error::{SchemaError, SchemaResult};
