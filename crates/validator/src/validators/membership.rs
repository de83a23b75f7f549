//! Allowed-value membership validators.
//!
//! Two entry points share one error shape:
//!
//! - [`is_one_of`] checks a value against an ad hoc slice with a linear scan.
//! - [`OneOf`] checks against a prebuilt [`IndexSet`], which keeps the
//!   declaration order for error messages and gives constant-time lookup.
//!
//! Comparison is exact: text is case-sensitive and never trimmed.

use std::borrow::{Borrow, Cow};
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MEMBER
// ============================================================================

/// An element type that can live in an allowed-value set.
///
/// `Input` is the type a caller validates: sets of `&'static str` are
/// checked against `str`, sets of `i64` against `i64`.
pub trait Member: Hash + Eq + Debug + Borrow<Self::Input> + Send + Sync + 'static {
    /// The borrowed form compared against set elements.
    type Input: ?Sized + Hash + Eq + Debug + 'static;

    /// Views the element as a validator input.
    fn as_input(&self) -> &Self::Input;
}

impl Member for &'static str {
    type Input = str;

    fn as_input(&self) -> &str {
        self
    }
}

impl Member for i64 {
    type Input = i64;

    fn as_input(&self) -> &i64 {
        self
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Succeeds iff `value` equals some element of `allowed`.
///
/// On failure the error message embeds `label`, `value` and the full
/// `allowed` sequence, in that order.
///
/// # Examples
///
/// ```
/// use edgeconf_validator::validators::is_one_of;
///
/// assert!(is_one_of("Minify", &["on", "off"], &"on").is_ok());
///
/// let error = is_one_of("Minify", &["on", "off"], &"On").unwrap_err();
/// assert_eq!(error.message, r#"Minify "On" invalid: must be one of ["on", "off"]"#);
/// ```
pub fn is_one_of<T>(label: &str, allowed: &[T], value: &T) -> Result<(), ValidationError>
where
    T: PartialEq + Debug,
{
    if allowed.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::not_one_of(label, value, allowed))
    }
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a value belongs to a fixed allowed-value set.
///
/// The set is borrowed for `'static`: catalog sets are built once and shared
/// by every validator instance.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use edgeconf_validator::foundation::Validate;
/// use edgeconf_validator::validators::OneOf;
/// use indexmap::IndexSet;
///
/// static MODES: LazyLock<IndexSet<&'static str>> =
///     LazyLock::new(|| ["lossless", "lossy"].into_iter().collect());
///
/// let polish = OneOf::new("Polish", &MODES);
/// assert!(polish.validate("lossy").is_ok());
/// assert!(polish.validate("LOSSY").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OneOf<T: Member> {
    label: Cow<'static, str>,
    allowed: &'static IndexSet<T>,
}

impl<T: Member> OneOf<T> {
    /// Creates a validator reporting failures under `label`.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>, allowed: &'static IndexSet<T>) -> Self {
        debug_assert!(!allowed.is_empty(), "allowed-value set must not be empty");
        Self {
            label: label.into(),
            allowed,
        }
    }

    /// The label used in error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The allowed values, in declaration order.
    pub fn allowed(&self) -> impl Iterator<Item = &T::Input> + '_ {
        self.allowed.iter().map(Member::as_input)
    }
}

impl<T: Member> Validate for OneOf<T> {
    type Input = T::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.allowed.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::not_one_of(&self.label, input, self.allowed()))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
