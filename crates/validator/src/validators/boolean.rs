//! Boolean validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a boolean action flag is `true`.
    ///
    /// Some page-rule actions carry no setting of their own: they are either
    /// present and enabled or absent. An unset boolean reaches the validator as
    /// `false`, so `false` is always rejected.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) {
        ValidationError::new(
            "is_true",
            "Action has no further setting; `true` is the only valid option",
        )
        .with_param("actual", input.to_string())
    }
    fn is_true();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_is_true() {
        assert!(is_true().validate(&true).is_ok());
        assert!(is_true().validate(&false).is_err());
    }

    #[test]
    fn test_default_is_rejected() {
        let error = IsTrue.validate(&bool::default()).unwrap_err();
        assert_eq!(error.code, "is_true");
        assert_eq!(error.param("actual"), Some("false"));
    }
}
