//! Resource schemas: which rule guards which attribute.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::rule::AttributeRule;
use super::value::{AttributeValue, Attributes};
use crate::error::SchemaResult;
use crate::foundation::ValidationOutcome;
use crate::validators::validate_record_name;

/// Key of the page-rule action attributes.
const ACTIONS: &str = "actions";

const PAGE_RULE_TOGGLES: &[&str] = &[
    "always_online",
    "automatic_https_rewrites",
    "browser_check",
    "email_obfuscation",
    "ip_geolocation",
    "opportunistic_encryption",
    "server_side_exclude",
    "smart_errors",
];

const PAGE_RULE_FLAGS: &[&str] = &[
    "always_use_https",
    "disable_apps",
    "disable_performance",
    "disable_security",
];

/// Maps attribute keys of one resource to the rule that validates them.
///
/// Schemas are plain data and load from JSON:
///
/// ```
/// use edgeconf_validator::schema::{AttributeRule, ResourceSchema};
///
/// let schema = ResourceSchema::from_json(r#"{
///     "name": "zone_settings",
///     "attributes": { "ssl": "ssl", "security_level": "security_level" }
/// }"#)
/// .unwrap();
///
/// assert_eq!(schema.rule("ssl"), Some(AttributeRule::Ssl));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSchema {
    name: String,
    #[serde(default)]
    attributes: IndexMap<String, AttributeRule>,
}

impl ResourceSchema {
    /// Creates an empty schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Parses a schema document.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Declares (or replaces) the rule for `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attribute(mut self, key: impl Into<String>, rule: AttributeRule) -> Self {
        self.attributes.insert(key.into(), rule);
        self
    }

    /// The schema name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule declared for `key`, if any.
    #[must_use]
    pub fn rule(&self, key: &str) -> Option<AttributeRule> {
        self.attributes.get(key).copied()
    }

    /// Declared attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, AttributeRule)> {
        self.attributes.iter().map(|(key, rule)| (key.as_str(), *rule))
    }

    /// Schema of a DNS record.
    #[must_use]
    pub fn dns_record() -> Self {
        Self::new("dns_record")
            .with_attribute("type", AttributeRule::RecordType)
            .with_attribute("ttl", AttributeRule::Ttl)
    }

    /// Schema of a page rule and its actions.
    #[must_use]
    pub fn page_rule() -> Self {
        let action = |name: &str| format!("{ACTIONS}.{name}");

        let mut schema =
            Self::new("page_rule").with_attribute("status", AttributeRule::PageRuleStatus);
        for &toggle in PAGE_RULE_TOGGLES {
            schema = schema.with_attribute(action(toggle), AttributeRule::OnOff);
        }
        for &flag in PAGE_RULE_FLAGS {
            schema = schema.with_attribute(action(flag), AttributeRule::IsTrue);
        }
        schema
            .with_attribute(action("browser_cache_ttl"), AttributeRule::Ttl)
            .with_attribute(action("edge_cache_ttl"), AttributeRule::Ttl)
            .with_attribute(action("cache_level"), AttributeRule::CacheLevel)
            .with_attribute(action("rocket_loader"), AttributeRule::RocketLoader)
            .with_attribute(action("security_level"), AttributeRule::SecurityLevel)
            .with_attribute(action("ssl"), AttributeRule::Ssl)
            .with_attribute(
                action("forwarding_url.status_code"),
                AttributeRule::ForwardStatusCode,
            )
    }

    /// Validates every declared attribute present in `attributes`.
    ///
    /// Absent attributes are skipped and undeclared ones ignored. All errors
    /// are collected; the first kind mismatch aborts.
    pub fn validate(&self, attributes: &Attributes) -> SchemaResult<ValidationOutcome> {
        let mut outcome = ValidationOutcome::ok();

        for (key, rule) in &self.attributes {
            let Some(value) = attributes.get(key) else {
                continue;
            };

            tracing::trace!(schema = %self.name, attribute = %key, ?rule, "checking attribute");
            let checked = rule.check(value, key)?;
            for error in &checked.errors {
                tracing::debug!(
                    schema = %self.name,
                    attribute = %key,
                    code = %error.code,
                    "attribute rejected"
                );
            }
            outcome.merge(checked);
        }

        Ok(outcome)
    }
}

/// Validates a DNS record: the [`ResourceSchema::dns_record`] attributes,
/// then the record content against its type.
///
/// The content check runs only when both `type` and `value` are text; its
/// error is tagged with the `value` key.
pub fn validate_dns_record(attributes: &Attributes) -> SchemaResult<ValidationOutcome> {
    let mut outcome = ResourceSchema::dns_record().validate(attributes)?;

    let record_type = attributes.get("type").and_then(AttributeValue::as_text);
    let content = attributes.get("value").and_then(AttributeValue::as_text);
    if let (Some(record_type), Some(content)) = (record_type, content) {
        let checked = ValidationOutcome::from_result(
            validate_record_name(record_type, content).map_err(|error| error.with_field("value")),
        );
        if !checked.is_valid() {
            tracing::debug!(schema = "dns_record", %record_type, "record content rejected");
        }
        outcome.merge(checked);
    }

    Ok(outcome)
}
