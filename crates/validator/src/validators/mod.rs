//! Built-in validators
//!
//! # Categories
//!
//! - **Membership**: [`is_one_of`], [`OneOf`]
//! - **Catalog**: one factory per configuration attribute (record type, cache
//!   level, SSL mode, TTL, ...)
//! - **Boolean**: [`IsTrue`]
//! - **Numeric**: [`Max`]
//! - **Record content**: [`validate_record_name`], [`Ipv4Content`],
//!   [`Ipv6Content`]
//!
//! # Examples
//!
//! ```
//! use edgeconf_validator::foundation::Validate;
//! use edgeconf_validator::validators::{cache_level, ttl};
//!
//! assert!(cache_level().validate("aggressive").is_ok());
//! assert!(ttl().validate(&86_400).is_ok());
//! ```

pub mod boolean;
pub mod catalog;
pub mod membership;
pub mod range;
pub mod record;

pub use boolean::{IsTrue, is_true};
pub use catalog::{
    CACHE_LEVELS, FORWARD_STATUS_CODES, MAX_TTL, ON_OFF, PAGE_RULE_STATUSES, ROCKET_LOADER_MODES,
    SECURITY_LEVELS, SSL_MODES, cache_level, forward_status_code, on_off, page_rule_status,
    record_type, rocket_loader, security_level, ssl_mode, ttl,
};
pub use membership::{Member, OneOf, is_one_of};
pub use range::{Max, max};
pub use record::{
    Ipv4Content, Ipv6Content, RecordType, UnknownRecordType, ipv4_content, ipv6_content,
    validate_record_name,
};
