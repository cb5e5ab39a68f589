use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized value ready to store in the repository.
///
/// Booleans store as integers (1/0); everything else stores as text,
/// including JSON-encoded payloads for multi-select and geo fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

/// One pending field write produced by the row mapper.
///
/// `locale` is `None` for fields that do not vary by locale; the
/// default-locale value is authoritative for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub alias: String,
    pub locale: Option<String>,
    pub value: FieldValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_serialize_untagged() {
        assert_eq!(
            serde_json::to_string(&FieldValue::Integer(1)).expect("serialize"),
            "1"
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::from("f79c12")).expect("serialize"),
            "\"f79c12\""
        );
    }
}
