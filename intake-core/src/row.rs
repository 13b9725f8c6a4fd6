//! Row values: the concrete column-name to value mapping built from one
//! validated record instance.

use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single column value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Timestamp(Timestamp),
}

impl Value {
    /// Convert a flat JSON value into a column value. JSON null maps to
    /// `None`; arrays and objects have no column representation.
    pub fn from_json(value: serde_json::Value) -> Option<Option<Value>> {
        match value {
            serde_json::Value::Null => Some(None),
            serde_json::Value::String(s) => Some(Some(Value::String(s))),
            serde_json::Value::Bool(b) => Some(Some(Value::Bool(b))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Some(Value::Integer(i)))
                } else {
                    n.as_f64().map(|f| Some(Value::Float(f)))
                }
            }
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

/// A column-name to value mapping. Every column has an entry; nullable
/// columns without data hold `None` rather than being absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, Option<Value>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value. `None` records an explicit null.
    pub fn set(&mut self, name: impl Into<String>, value: Option<Value>) {
        self.values.insert(name.into(), value);
    }

    /// The stored slot for a column: `None` if the column is absent,
    /// `Some(None)` if it holds an explicit null.
    pub fn get(&self, name: &str) -> Option<&Option<Value>> {
        self.values.get(name)
    }

    /// The non-null value for a column, if any.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(|v| v.as_ref())
    }

    /// Number of columns with entries (null or not).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of columns holding a non-null value.
    pub fn non_null_count(&self) -> usize {
        self.values.values().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<Value>)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_entries_are_present_but_empty() {
        let mut row = Row::new();
        row.set("consent", None);
        row.set("response_id", Some(Value::String("R_1".into())));

        assert_eq!(row.len(), 2);
        assert_eq!(row.non_null_count(), 1);
        assert_eq!(row.get("consent"), Some(&None));
        assert!(row.value("consent").is_none());
        assert!(row.get("missing").is_none());
    }

    #[test]
    fn json_conversion_distinguishes_integer_and_float() {
        assert_eq!(
            Value::from_json(serde_json::json!(42)),
            Some(Some(Value::Integer(42)))
        );
        assert_eq!(
            Value::from_json(serde_json::json!(4.5)),
            Some(Some(Value::Float(4.5)))
        );
        assert_eq!(Value::from_json(serde_json::Value::Null), Some(None));
        assert_eq!(Value::from_json(serde_json::json!([1])), None);
    }
}
