use std::fmt;

use serde::{Deserialize, Serialize};

/// Valor primitivo de una propiedad de Artifact.
///
/// Se serializa sin etiqueta: `"train"`, `3`, `0.25`. Un entero JSON siempre
/// decodifica como `Int`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Los enteros se promueven a float; los strings no.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            PropertyValue::Int(i) => Some(*i as f64),
            PropertyValue::String(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{s}"),
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self { PropertyValue::String(s.to_string()) }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self { PropertyValue::String(s) }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self { PropertyValue::Int(i) }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self { PropertyValue::Int(i64::from(i)) }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self { PropertyValue::Float(x) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn untagged_decoding_prefers_int_for_integers() {
        let v: PropertyValue = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(v, PropertyValue::Int(7));
        let v: PropertyValue = serde_json::from_value(json!(0.5)).unwrap();
        assert_eq!(v, PropertyValue::Float(0.5));
        let v: PropertyValue = serde_json::from_value(json!("eval")).unwrap();
        assert_eq!(v.as_str(), Some("eval"));
    }

    #[test]
    fn int_promotes_to_float_but_string_does_not() {
        assert_eq!(PropertyValue::from(3).as_float(), Some(3.0));
        assert_eq!(PropertyValue::from("3").as_float(), None);
        assert_eq!(PropertyValue::from(1.5).as_int(), None);
    }
}
