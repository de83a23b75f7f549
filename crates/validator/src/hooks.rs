//! Per-attribute validation hooks.
//!
//! These are the functions a host configuration framework registers against
//! individual attributes. Every hook takes the raw value and the attribute
//! key, and returns a [`ValidationOutcome`]. Warnings are always empty; any
//! error is tagged with the key.
//!
//! ```
//! use edgeconf_validator::hooks;
//!
//! let outcome = hooks::validate_ssl("strict", "ssl");
//! assert!(outcome.is_valid());
//!
//! let (warnings, errors) = hooks::validate_ssl("Strict", "ssl").into_parts();
//! assert!(warnings.is_empty());
//! assert_eq!(errors.len(), 1);
//! ```

use crate::foundation::{Validate, ValidationError, ValidationOutcome};
use crate::validators;

fn check<V: Validate + ?Sized>(validator: &V, value: &V::Input, key: &str) -> ValidationOutcome {
    validator.validate_field(value, key).into()
}

/// DNS record type.
pub fn validate_record_type(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::record_type(), value, key)
}

/// Page-rule status.
pub fn validate_page_rule_status(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::page_rule_status(), value, key)
}

/// Cache level.
pub fn validate_cache_level(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::cache_level(), value, key)
}

/// Forwarding status code.
pub fn validate_forward_status_code(value: i64, key: &str) -> ValidationOutcome {
    check(&validators::forward_status_code(), &value, key)
}

/// Boolean action that is only meaningful when enabled.
///
/// `false` is always an error: an unset attribute arrives as `false` too.
/// The message names the action by its key.
pub fn validate_is_true(value: bool, key: &str) -> ValidationOutcome {
    let result = validators::is_true().validate(&value).map_err(|error| {
        ValidationError {
            message: format!(
                "Action {key:?} has no further setting; `true` is the only valid option"
            )
            .into(),
            ..error
        }
        .with_field(key.to_owned())
    });
    result.into()
}

/// On/off toggle, labelled with its own key.
pub fn validate_on_off(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::on_off(key.to_owned()), value, key)
}

/// Rocket-loader mode.
pub fn validate_rocket_loader(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::rocket_loader(), value, key)
}

/// Security level.
pub fn validate_security_level(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::security_level(), value, key)
}

/// SSL mode.
pub fn validate_ssl(value: &str, key: &str) -> ValidationOutcome {
    check(&validators::ssl_mode(), value, key)
}

/// Cache TTL ceiling.
pub fn validate_ttl(value: i64, key: &str) -> ValidationOutcome {
    check(&validators::ttl(), &value, key)
}
