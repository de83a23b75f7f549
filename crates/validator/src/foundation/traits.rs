//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// The input type is fixed per validator, so handing a validator a value of
/// the wrong kind is a compile error rather than a runtime failure.
///
/// # Examples
///
/// ```
/// use edgeconf_validator::foundation::{Validate, ValidationError};
///
/// struct NonNegative;
///
/// impl Validate for NonNegative {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if *input >= 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("non_negative", "must not be negative"))
///         }
///     }
/// }
///
/// assert!(NonNegative.validate(&0).is_ok());
/// assert!(NonNegative.validate(&-1).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so text validators can take `str` directly.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` if the value is acceptable.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates the input and tags any failure with the attribute key.
    fn validate_field(&self, input: &Self::Input, key: &str) -> Result<(), ValidationError> {
        self.validate(input)
            .map_err(|error| error.with_field(key.to_owned()))
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
