// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic value type stored in a [`DynamicMap`].
//!
//! A `Value` is one of a closed set of variants: null, boolean, number, string,
//! an ordered sequence, or a nested [`DynamicMap`]. Nested associative values are
//! always represented as `DynamicMap`, at every depth, so that deep merging can
//! recurse into them.

use crate::domain::DynamicMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub use serde_json::Number;

/// A dynamically typed value held by a [`DynamicMap`].
///
/// # Examples
///
/// ```
/// use dynmap::domain::Value;
///
/// let value = Value::from("hello");
/// assert_eq!(value.as_str(), Some("hello"));
/// assert!(!value.is_empty_value());
///
/// assert!(Value::from(0).is_empty_value());
/// assert!(!Value::Sequence(vec![]).is_map());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or floating point number.
    Number(Number),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence. Sequences are leaf values and are never merged element-wise.
    Sequence(Vec<Value>),
    /// A nested map.
    Map(DynamicMap),
}

impl Value {
    /// Returns `true` if the value is its type's zero value.
    ///
    /// `null`, `false`, `0` and `""` are empty. Sequences and maps are never
    /// empty, whatever their contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::{DynamicMap, Value};
    ///
    /// assert!(Value::Null.is_empty_value());
    /// assert!(Value::from(false).is_empty_value());
    /// assert!(Value::from(0.0).is_empty_value());
    /// assert!(Value::from("").is_empty_value());
    ///
    /// assert!(!Value::Sequence(vec![]).is_empty_value());
    /// assert!(!Value::Map(DynamicMap::new()).is_empty_value());
    /// ```
    pub fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Sequence(_) | Value::Map(_) => false,
        }
    }

    /// Returns `true` if the value is a nested map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the name of the variant, as used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Map(_) => "map",
        }
    }

    /// Returns the string slice if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number as an `i64` if it is representable as one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the number as a `u64` if it is representable as one.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Returns the number as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the elements if the value is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the nested map if the value is a map.
    pub fn as_map(&self) -> Option<&DynamicMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the nested map mutably if the value is a map.
    pub fn as_map_mut(&mut self) -> Option<&mut DynamicMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => seq.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(DynamicMap::from(map)),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Sequence(seq) => {
                serde_json::Value::Array(seq.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(map.into()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    /// Non-finite floats have no number representation and become `null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::from(f64::from(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DynamicMap> for Value {
    fn from(map: DynamicMap) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(seq: Vec<T>) -> Self {
        Value::Sequence(seq.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Renders strings without quotes, scalars textually and containers as JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Sequence(_) | Value::Map(_) => match serde_json::to_string(self) {
                Ok(json) => f.write_str(&json),
                Err(e) => {
                    tracing::warn!("Failed to render {} as JSON: {}", self.kind(), e);
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_scalars() {
        assert!(Value::Null.is_empty_value());
        assert!(Value::from(false).is_empty_value());
        assert!(Value::from(0).is_empty_value());
        assert!(Value::from(0u64).is_empty_value());
        assert!(Value::from(0.0).is_empty_value());
        assert!(Value::from(-0.0).is_empty_value());
        assert!(Value::from("").is_empty_value());
    }

    #[test]
    fn test_non_empty_scalars() {
        assert!(!Value::from(true).is_empty_value());
        assert!(!Value::from(-1).is_empty_value());
        assert!(!Value::from(0.5).is_empty_value());
        assert!(!Value::from(" ").is_empty_value());
    }

    #[test]
    fn test_containers_are_never_empty() {
        assert!(!Value::Sequence(vec![]).is_empty_value());
        assert!(!Value::Map(DynamicMap::new()).is_empty_value());
    }

    #[test]
    fn test_from_json_nests_maps() {
        let value = Value::from(json!({"a": {"b": {"c": 1}}, "list": [{"x": true}]}));
        let map = value.as_map().unwrap();
        let inner = map.get("a").and_then(Value::as_map).unwrap();
        assert!(inner.get("b").unwrap().is_map());

        // Objects inside sequences are nested maps too.
        let list = map.get("list").and_then(Value::as_sequence).unwrap();
        assert!(list[0].is_map());
    }

    #[test]
    fn test_json_conversion_roundtrip() {
        let original = json!({"n": null, "b": true, "i": -3, "f": 1.5, "s": "x", "seq": [1, "two"]});
        let back = serde_json::Value::from(Value::from(original.clone()));
        assert_eq!(back, original);
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(f64::INFINITY), Value::Null);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
        assert_eq!(Value::from(json!({"k": "v"})).to_string(), r#"{"k":"v"}"#);
        assert_eq!(
            Value::from(json!({"b": [true, null], "a": {"x": 1.5}})).to_string(),
            r#"{"a":{"x":1.5},"b":[true,null]}"#
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(7).as_i64(), Some(7));
        assert_eq!(Value::from(7).as_u64(), Some(7));
        assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("s").as_bool(), None);
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(vec!["a"]).kind(), "sequence");
    }

    #[test]
    fn test_str_equality() {
        assert_eq!(Value::from("abc"), "abc");
        assert_ne!(Value::from(1), "1");
    }

    #[test]
    fn test_serialize_deserialize() {
        let value = Value::from(json!({"a": [1, null, "s"]}));
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"a":[1,null,"s"]}"#);

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, value);
    }
}
