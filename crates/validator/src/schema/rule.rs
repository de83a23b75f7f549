//! Named attribute rules for dynamic dispatch.

use serde::{Deserialize, Serialize};

use super::value::{AttributeValue, ValueKind};
use crate::error::{SchemaError, SchemaResult};
use crate::foundation::ValidationOutcome;
use crate::hooks;

/// One catalogued validation rule, as named in schema documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeRule {
    RecordType,
    PageRuleStatus,
    CacheLevel,
    ForwardStatusCode,
    IsTrue,
    OnOff,
    RocketLoader,
    SecurityLevel,
    Ssl,
    Ttl,
}

impl AttributeRule {
    /// The value kind this rule accepts.
    #[must_use]
    pub const fn expected_kind(self) -> ValueKind {
        match self {
            Self::ForwardStatusCode | Self::Ttl => ValueKind::Int,
            Self::IsTrue => ValueKind::Bool,
            Self::RecordType
            | Self::PageRuleStatus
            | Self::CacheLevel
            | Self::OnOff
            | Self::RocketLoader
            | Self::SecurityLevel
            | Self::Ssl => ValueKind::Text,
        }
    }

    /// Runs the rule's hook against `value`.
    ///
    /// A value of the wrong kind is not a validation failure: it means the
    /// host declared the attribute differently from this rule, and is
    /// returned as [`SchemaError::KindMismatch`].
    pub fn check(self, value: &AttributeValue, key: &str) -> SchemaResult<ValidationOutcome> {
        use AttributeValue::{Bool, Int, Text};

        let outcome = match (self, value) {
            (Self::RecordType, Text(v)) => hooks::validate_record_type(v, key),
            (Self::PageRuleStatus, Text(v)) => hooks::validate_page_rule_status(v, key),
            (Self::CacheLevel, Text(v)) => hooks::validate_cache_level(v, key),
            (Self::ForwardStatusCode, Int(v)) => hooks::validate_forward_status_code(*v, key),
            (Self::IsTrue, Bool(v)) => hooks::validate_is_true(*v, key),
            (Self::OnOff, Text(v)) => hooks::validate_on_off(v, key),
            (Self::RocketLoader, Text(v)) => hooks::validate_rocket_loader(v, key),
            (Self::SecurityLevel, Text(v)) => hooks::validate_security_level(v, key),
            (Self::Ssl, Text(v)) => hooks::validate_ssl(v, key),
            (Self::Ttl, Int(v)) => hooks::validate_ttl(*v, key),
            (rule, value) => {
                return Err(SchemaError::KindMismatch {
                    key: key.to_owned(),
                    expected: rule.expected_kind(),
                    actual: value.kind(),
                });
            }
        };
        Ok(outcome)
    }
}
