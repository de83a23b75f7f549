//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Outcome**: [`ValidationOutcome`], the `(warnings, errors)` pair handed
//!   back to the host framework
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Every validator fixes its input type, so a text validator cannot be handed
//! an integer:
//!
//! ```
//! use edgeconf_validator::foundation::Validate;
//! use edgeconf_validator::validators::forward_status_code;
//!
//! assert!(forward_status_code().validate(&301).is_ok());
//! // forward_status_code().validate("301"); // does not compile
//! ```
//!
//! ## 2. Purity
//!
//! Validators read their argument and constant data only. They never
//! normalize the value, never log, and can be shared freely across threads.
//!
//! ## 3. Self-describing errors
//!
//! Errors embed the rejected value and the allowed set or limit, so the
//! message stands on its own in a configuration report.

pub mod error;
pub mod outcome;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use outcome::ValidationOutcome;
pub use traits::Validate;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, collecting every failure.
///
/// # Examples
///
/// ```
/// use edgeconf_validator::foundation::{Validate, validate_with_all};
/// use edgeconf_validator::validators::{max, on_off};
///
/// let result = validate_with_all(&86_400_i64, &[&max("Cache TTL", 3_600_i64)]);
/// assert_eq!(result.unwrap_err().len(), 1);
///
/// let toggles: [&dyn Validate<Input = str>; 1] = [&on_off("always_online")];
/// assert!(validate_with_all("on", &toggles).is_ok());
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
