//! Error types for validation failures
//!
//! A [`ValidationError`] is a user-facing failure: it carries a stable `code`
//! for programmatic handling, a human-readable `message`, the attribute key it
//! belongs to, and ordered parameters (the rejected value, the allowed set, the
//! violated limit).
//!
//! All string fields use `Cow<'static, str>` so static codes and labels never
//! allocate.

use std::borrow::Cow;
use std::fmt::{self, Debug};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use edgeconf_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("one_of", "\"purge\" is not allowed")
///     .with_field("status")
///     .with_param("value", "purge");
///
/// assert_eq!(error.field.as_deref(), Some("status"));
/// assert_eq!(error.param("value"), Some("purge"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "one_of", "max", "is_true", "ipv4_address"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Attribute key the error belongs to, if known.
    ///
    /// Examples: "type", "actions.ssl", "forwarding_url.status_code"
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 1-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the attribute key for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}] {}", self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "one_of" error for a value outside its allowed set.
    ///
    /// The message embeds the label, the rejected value and the full allowed
    /// sequence, in that order. Values are rendered with `Debug`, so text is
    /// quoted and integers are not.
    pub fn not_one_of<'a, T, I>(label: &str, value: &T, allowed: I) -> Self
    where
        T: Debug + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let allowed = allowed
            .into_iter()
            .map(|candidate| format!("{candidate:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        let value = format!("{value:?}");

        Self::new(
            "one_of",
            format!("{label} {value} invalid: must be one of [{allowed}]"),
        )
        .with_param("value", value)
        .with_param("allowed", allowed)
    }

    /// Creates a "max" error for a value above its ceiling.
    pub fn exceeds_max<T: fmt::Display>(label: &str, max: T, actual: T) -> Self {
        Self::new(
            "max",
            format!("{label} of {actual} too long: max value is {max}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an error for a value that is not an address of the expected
    /// IP family. `family` is `"IPv4"` or `"IPv6"`.
    pub fn invalid_address(record_type: &str, family: &'static str, value: &str) -> Self {
        let code = if family == "IPv6" {
            "ipv6_address"
        } else {
            "ipv4_address"
        };

        Self::new(
            code,
            format!("{record_type} record must be a valid {family} address, got: {value:?}"),
        )
        .with_param("expected", family)
        .with_param("value", value.to_owned())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// Hosts union the errors from many attributes into one of these before
/// reporting back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Moves every error from `other` into this collection.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
