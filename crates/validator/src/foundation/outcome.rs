//! The `(warnings, errors)` pair returned by every catalog validator.

use crate::foundation::{ValidationError, ValidationErrors};

/// Result of checking one or more attributes.
///
/// An empty error collection means every checked value is acceptable. The
/// catalog never produces warnings; the field exists because hosts report
/// both side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Non-blocking notices. Always empty for the built-in catalog.
    pub warnings: Vec<String>,
    /// Blocking failures.
    pub errors: ValidationErrors,
}

impl ValidationOutcome {
    /// An outcome with no warnings and no errors.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// Builds an outcome from a single check result.
    #[must_use]
    pub fn from_result(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(error) => Self {
                warnings: Vec::new(),
                errors: error.into(),
            },
        }
    }

    /// Returns true if no errors were reported.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unions `other` into this outcome, preserving order.
    pub fn merge(&mut self, other: Self) {
        self.warnings.extend(other.warnings);
        self.errors.merge(other.errors);
    }

    /// Splits the outcome into its `(warnings, errors)` pair.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, ValidationErrors) {
        (self.warnings, self.errors)
    }

    /// Converts to a Result, dropping warnings.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.errors.into_result(())
    }
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        Self::from_result(result)
    }
}
