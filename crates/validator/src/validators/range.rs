//! Numeric ceiling validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    ///
    /// There is deliberately no lower bound: zero and negative values pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeconf_validator::validators::max;
    /// use edgeconf_validator::foundation::Validate;
    ///
    /// let validator = max("Cache TTL", 3_600_i64);
    /// assert!(validator.validate(&3_600).is_ok());
    /// assert!(validator.validate(&-5).is_ok());
    /// assert!(validator.validate(&3_601).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { label: &'static str, max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::exceeds_max(self.label, self.max, *input) }
    fn max(label: &'static str, max: T);
}
