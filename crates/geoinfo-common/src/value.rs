//! Attribute values and records.

use std::collections::BTreeMap;

/// A single attribute value.
///
/// Nested objects and arrays are kept as JSON so they can be shown in their
/// serialized form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any numeric value.
    Number(f64),
    /// A text value.
    String(String),
    /// A nested object or array.
    Struct(serde_json::Value),
    /// A boolean flag.
    Bool(bool),
    /// An explicit null.
    Null,
}

impl Value {
    /// Returns `true` for [`Value::Number`].
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Struct(nested)
            },
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// One attribute record, keyed by field name.
///
/// Key order carries no meaning; field order belongs to the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field value, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Returns the value of `field`, if the record has one.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Iterates over field names present in this record.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of fields stored in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the record holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            values: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_from_json_scalars() {
        assert_eq!(Value::from(json!(12.5)), Value::Number(12.5));
        assert_eq!(Value::from(json!(3)), Value::Number(3.0));
        assert_eq!(Value::from(json!("a")), Value::String("a".to_string()));
        assert_eq!(Value::from(json!(true)), Value::Bool(true));
        assert_eq!(Value::from(json!(null)), Value::Null);
    }

    #[test]
    fn test_value_from_json_nested() {
        assert_eq!(Value::from(json!([1, 2])), Value::Struct(json!([1, 2])));
        assert_eq!(
            Value::from(json!({"a": 1})),
            Value::Struct(json!({"a": 1}))
        );
    }

    #[test]
    fn test_record_from_json_object() {
        let serde_json::Value::Object(map) = json!({"pop": 1000, "name": "A"}) else {
            panic!("expected object");
        };
        let record = Record::from(map);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("pop"), Some(&Value::Number(1000.0)));
        assert_eq!(record.get("name"), Some(&Value::from("A")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new().with("a", 1_i64).with("b", "x");
        assert!(!record.is_empty());
        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
