//! Dynamically typed attribute values.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};

/// The kind of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Int,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Int => "integer",
            Self::Bool => "boolean",
        })
    }
}

/// A single attribute value as supplied by a host framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl AttributeValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Int(_) => ValueKind::Int,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Converts a primitive JSON value. `key` is only used for error context.
    ///
    /// `null` has no value and yields `Ok(None)`; arrays, objects and
    /// non-integer numbers are rejected. An integer above `i64::MAX` is
    /// [`SchemaError::IntegerOutOfRange`]: it cannot be represented, so no
    /// integer rule ever sees it.
    pub fn from_json(key: &str, value: &Value) -> SchemaResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Self::Bool(*b))),
            Value::String(s) => Ok(Some(Self::Text(s.clone()))),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Ok(Some(Self::Int(i))),
                (None, Some(value)) => Err(SchemaError::IntegerOutOfRange {
                    key: key.to_owned(),
                    value,
                    max: i64::MAX,
                }),
                (None, None) => Err(unsupported(key, "number")),
            },
            Value::Array(_) => Err(unsupported(key, "array")),
            Value::Object(_) => Err(unsupported(key, "object")),
        }
    }
}

fn unsupported(key: &str, json_type: &'static str) -> SchemaError {
    SchemaError::UnsupportedValue {
        key: key.to_owned(),
        json_type,
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Attribute values keyed by their dotted path.
pub type Attributes = IndexMap<String, AttributeValue>;

/// Flattens a JSON object into [`Attributes`].
///
/// Nested objects become dotted keys (`{"actions": {"ssl": "full"}}` yields
/// `actions.ssl`). `null` members are treated as unset and dropped. Two
/// members that flatten to the same key (`"actions.ssl"` next to
/// `{"actions": {"ssl": ...}}`) are [`SchemaError::DuplicateAttribute`].
///
/// # Examples
///
/// ```
/// use edgeconf_validator::schema::{AttributeValue, attributes_from_json};
/// use serde_json::json;
///
/// let attrs = attributes_from_json(&json!({
///     "status": "active",
///     "actions": { "forwarding_url": { "status_code": 301 } },
/// }))
/// .unwrap();
///
/// assert_eq!(attrs["actions.forwarding_url.status_code"], AttributeValue::Int(301));
/// ```
pub fn attributes_from_json(value: &Value) -> SchemaResult<Attributes> {
    let mut attributes = Attributes::new();
    match value {
        Value::Object(map) => {
            for (key, member) in map {
                flatten_into(&mut attributes, key.clone(), member)?;
            }
            Ok(attributes)
        }
        other => Err(unsupported("", json_type(other))),
    }
}

fn flatten_into(attributes: &mut Attributes, key: String, value: &Value) -> SchemaResult<()> {
    if let Value::Object(map) = value {
        for (child, member) in map {
            flatten_into(attributes, format!("{key}.{child}"), member)?;
        }
        return Ok(());
    }

    let Some(value) = AttributeValue::from_json(&key, value)? else {
        return Ok(());
    };
    match attributes.entry(key) {
        Entry::Occupied(entry) => Err(SchemaError::DuplicateAttribute {
            key: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_primitives() {
        assert_eq!(
            AttributeValue::from_json("k", &json!("on")).unwrap(),
            Some(AttributeValue::Text("on".into()))
        );
        assert_eq!(
            AttributeValue::from_json("k", &json!(301)).unwrap(),
            Some(AttributeValue::Int(301))
        );
        assert_eq!(
            AttributeValue::from_json("k", &json!(true)).unwrap(),
            Some(AttributeValue::Bool(true))
        );
        assert_eq!(AttributeValue::from_json("k", &Value::Null).unwrap(), None);
    }

    #[test]
    fn test_from_json_rejects_non_primitives() {
        for value in [json!(1.5), json!([1]), json!({"a": 1})] {
            let error = AttributeValue::from_json("k", &value).unwrap_err();
            assert!(matches!(error, SchemaError::UnsupportedValue { .. }));
        }
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<AttributeValue> = serde_json::from_str(r#"[true, 7, "seven"]"#).unwrap();
        assert_eq!(
            values,
            [
                AttributeValue::Bool(true),
                AttributeValue::Int(7),
                AttributeValue::Text("seven".into()),
            ]
        );
    }

    #[test]
    fn test_flatten_nested_objects() {
        let attrs = attributes_from_json(&json!({
            "type": "A",
            "ttl": null,
            "actions": { "ssl": "full", "forwarding_url": { "status_code": 302 } },
        }))
        .unwrap();

        let mut keys = attrs.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["actions.forwarding_url.status_code", "actions.ssl", "type"]
        );
    }

    #[test]
    fn test_flatten_rejects_colliding_paths() {
        let error = attributes_from_json(&json!({
            "actions.ssl": "full",
            "actions": { "ssl": "bogus" },
        }))
        .unwrap_err();

        assert!(matches!(
            error,
            SchemaError::DuplicateAttribute { ref key } if key == "actions.ssl"
        ));
    }

    #[test]
    fn test_flatten_null_does_not_collide() {
        let attrs = attributes_from_json(&json!({
            "actions.ssl": null,
            "actions": { "ssl": "strict" },
        }))
        .unwrap();
        assert_eq!(attrs["actions.ssl"], AttributeValue::Text("strict".into()));
    }

    #[test]
    fn test_from_json_integer_above_i64() {
        let error = AttributeValue::from_json("ttl", &json!(10_000_000_000_000_000_000_u64))
            .unwrap_err();
        assert!(matches!(
            error,
            SchemaError::IntegerOutOfRange { value: 10_000_000_000_000_000_000, max: i64::MAX, .. }
        ));
        assert_eq!(
            AttributeValue::from_json("ttl", &json!(i64::MAX)).unwrap(),
            Some(AttributeValue::Int(i64::MAX))
        );
    }

    #[test]
    fn test_flatten_requires_object() {
        assert!(attributes_from_json(&json!(["type"])).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AttributeValue::from(3_i64).kind().to_string(), "integer");
        assert_eq!(AttributeValue::from("x").kind().to_string(), "text");
        assert_eq!(AttributeValue::from(false).kind().to_string(), "boolean");
    }
}
