//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] expands to a struct definition, its `Validate` impl, a
//! constructor and (optionally) a factory function.
//!
//! # Examples
//!
//! ```
//! use edgeconf_validator::validator;
//! use edgeconf_validator::foundation::{Validate, ValidationError};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! // Generic struct with fields
//! validator! {
//!     pub AtLeast<T: PartialOrd + Copy> { min: T } for T;
//!     rule(self, input) { *input >= self.min }
//!     error(self, input) { ValidationError::new("min", "too small") }
//!     fn at_least(min: T);
//! }
//!
//! assert!(not_blank().validate(" x ").is_ok());
//! assert!(at_least(60_i64).validate(&30).is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// **Unit validator** (zero-sized, derives `Debug, Clone, Copy, PartialEq,
/// Eq, Hash`):
/// ```rust,ignore
/// validator! {
///     pub IsTrue for bool;
///     rule(input) { *input }
///     error(input) { ValidationError::new("is_true", "must be true") }
///     fn is_true();
/// }
/// ```
///
/// **Generic struct** (derives `Debug, Clone`; extra derives via
/// `#[derive(...)]`; auto `new` from all fields). Bounds must be simple
/// identifiers, so import the traits first:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Max<T: PartialOrd + Display + Copy> { label: &'static str, max: T } for T;
///     rule(self, input) { *input <= self.max }
///     error(self, input) { ValidationError::exceeds_max(self.label, self.max, *input) }
///     fn max(label: &'static str, max: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new, no factory ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::fmt::Display;

    use crate::foundation::{Validate, ValidationError};

    validator! {
        /// A test unit validator.
        TestLowercase for str;
        rule(input) { input.chars().all(|c| !c.is_uppercase()) }
        error(input) { ValidationError::new("lowercase", format!("{input:?} has uppercase")) }
        fn test_lowercase();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestLowercase.validate("cname").is_ok());
        assert!(test_lowercase().validate("CNAME").is_err());
    }

    #[test]
    fn test_unit_error_sees_input() {
        let err = test_lowercase().validate("Mx").unwrap_err();
        assert_eq!(err.code, "lowercase");
        assert_eq!(err.message, "\"Mx\" has uppercase");
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMin<T: PartialOrd + Display + Copy> { min: T } for T;
        rule(self, input) { *input >= self.min }
        error(self, input) {
            ValidationError::new("min", format!("must be >= {}", self.min))
        }
        fn test_min_val(value: T);
    }

    #[test]
    fn test_generic_validator() {
        let v = test_min_val(5_i64);
        assert!(v.validate(&5).is_ok());
        assert!(v.validate(&4).is_err());
    }

    #[test]
    fn test_generic_new() {
        let v = TestMin::new(120_i64);
        assert_eq!(v.min, 120);
        assert_eq!(v.validate(&1).unwrap_err().message, "must be >= 120");
    }

    validator! {
        TestNever for bool;
        rule(input) { false }
        error(input) { ValidationError::new("never", "never valid") }
    }

    #[test]
    fn test_unit_without_factory() {
        assert!(TestNever.validate(&true).is_err());
        assert!(TestNever.validate(&false).is_err());
    }
}
