// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicMap` type: string keys mapped to dynamically typed values.
//!
//! This module provides construction from any serializable record, conversion
//! back into typed records, plain-map conversions and accessors. The deep merge
//! operations live in [`crate::domain::merge`].

use crate::domain::errors::{MapError, Result};
use crate::domain::value::Value;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// A mapping from string keys to [`Value`]s.
///
/// Nested maps are always stored as `DynamicMap` so that [`assign`](DynamicMap::assign)
/// can merge them field by field. Entries are kept in key order, which makes
/// iteration and text encoding deterministic.
///
/// `DynamicMap` owns all of its data. The merge operations take `&mut self` and
/// perform no internal locking, so sharing a map between threads needs the
/// caller's own synchronization.
///
/// # Examples
///
/// ```
/// use dynmap::domain::DynamicMap;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Account {
///     name: String,
///     phone: String,
/// }
///
/// let account = Account { name: "John Doe".into(), phone: "".into() };
/// let map = DynamicMap::from_struct(&account).unwrap();
///
/// assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("John Doe"));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["name", "phone"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicMap {
    pub(crate) entries: BTreeMap<String, Value>,
}

impl DynamicMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map from any serializable record.
    ///
    /// The record is serialized through the canonical JSON data model and the
    /// resulting object becomes the map. Nested objects become nested
    /// `DynamicMap`s at every depth, and the result shares nothing with the
    /// record. Passing a `DynamicMap` yields an equal, independent copy.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ConversionError`] if the record fails to serialize,
    /// or if it serializes to something other than a map (a number, a string,
    /// a sequence, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::DynamicMap;
    /// use std::collections::HashMap;
    ///
    /// let mut source = HashMap::new();
    /// source.insert("port", 8080);
    /// let map = DynamicMap::from_struct(&source).unwrap();
    /// assert_eq!(map.get("port").and_then(|v| v.as_u64()), Some(8080));
    ///
    /// assert!(DynamicMap::from_struct(&42).is_err());
    /// ```
    pub fn from_struct<T>(record: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(record).map_err(|e| {
            tracing::debug!(
                "Failed to serialize {} into a map: {}",
                std::any::type_name::<T>(),
                e
            );
            MapError::conversion::<T>(e)
        })?;

        match value {
            serde_json::Value::Object(map) => Ok(Self::from(map)),
            other => Err(MapError::ConversionError {
                type_name: std::any::type_name::<T>().to_string(),
                message: format!(
                    "expected a map-shaped record, found {}",
                    Value::from(other).kind()
                ),
                source: None,
            }),
        }
    }

    /// Returns `true` if [`from_struct`](Self::from_struct) would accept the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::DynamicMap;
    /// use std::collections::BTreeMap;
    ///
    /// assert!(DynamicMap::is_convertible(&BTreeMap::<String, u8>::new()));
    /// assert!(!DynamicMap::is_convertible(&"text"));
    /// assert!(!DynamicMap::is_convertible(&vec![1, 2, 3]));
    /// ```
    pub fn is_convertible<T>(record: &T) -> bool
    where
        T: Serialize + ?Sized,
    {
        matches!(serde_json::to_value(record), Ok(serde_json::Value::Object(_)))
    }

    /// Deserializes the map into a new record of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::DeserializationError`] when the map does not fit
    /// the shape of `T`, e.g. a missing required field or a type conflict.
    pub fn unmarshal<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(self).map_err(|e| MapError::encode("json", e))?;
        serde_json::from_value(value).map_err(MapError::deserialization::<T>)
    }

    /// Writes the map's entries into an existing record.
    ///
    /// Fields of `target` whose key is present in the map are overwritten,
    /// nested records merge field by field, and all other fields keep their
    /// current value.
    ///
    /// When the field-by-field result does not fit `T`, the map's top-level
    /// entries replace the target's fields wholesale instead. This is what
    /// switches an enum field to another variant, since serde stores an
    /// externally tagged variant as a single-key map.
    ///
    /// A `null` entry is not skipped: it clears an `Option` field and is a
    /// type mismatch for any other field.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ConversionError`] if `target` is not map-shaped and
    /// [`MapError::DeserializationError`] on a field or type mismatch. On error
    /// `target` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::DynamicMap;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Serialize, Deserialize)]
    /// struct Account {
    ///     name: String,
    ///     email: String,
    /// }
    ///
    /// let mut account = Account { name: "John Doe".into(), email: "john@mail.com".into() };
    /// let mut map = DynamicMap::new();
    /// map.insert("name", "Foo Bar");
    ///
    /// map.unmarshal_into(&mut account).unwrap();
    /// assert_eq!(account.name, "Foo Bar");
    /// assert_eq!(account.email, "john@mail.com");
    /// ```
    pub fn unmarshal_into<T>(&self, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let current = Self::from_struct(&*target)?;

        let mut merged = current.clone();
        merged.assign_with(self, true);
        let updated = match merged.unmarshal() {
            Ok(updated) => updated,
            Err(deep_err) => {
                tracing::debug!(
                    "Nested merge into {} failed ({}), replacing top-level fields",
                    std::any::type_name::<T>(),
                    deep_err
                );
                let mut replaced = current;
                replaced
                    .entries
                    .extend(self.iter().map(|(key, value)| (key.clone(), value.clone())));
                replaced.unmarshal().map_err(|_| deep_err)?
            }
        };

        *target = updated;
        Ok(())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the value stored under `key` mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if the map has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Iterates over the keys in key order.
    pub fn keys(&self) -> Keys<'_> {
        Keys(self.entries.keys())
    }

    /// Iterates over the values, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Values<'_> {
        Values(self.entries.values())
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns a shallow copy of the entries as a plain map.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        self.entries.clone()
    }

    /// Consumes the map and returns its entries.
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.entries
    }

    /// Renders every value with its [`Display`](fmt::Display) form.
    ///
    /// Meant for display and logging; the result does not round-trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::DynamicMap;
    ///
    /// let mut map = DynamicMap::new();
    /// map.insert("name", "John");
    /// map.insert("age", 42);
    /// map.insert("tags", vec!["a", "b"]);
    ///
    /// let rendered = map.to_string_map();
    /// assert_eq!(rendered["name"], "John");
    /// assert_eq!(rendered["age"], "42");
    /// assert_eq!(rendered["tags"], r#"["a","b"]"#);
    /// ```
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }

    /// Encodes the map as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EncodingError`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| MapError::encode("json", e))
    }

    /// Encodes the map as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EncodingError`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MapError::encode("json", e))
    }
}

/// Iterator over the keys of a [`DynamicMap`], yielding `&str`.
#[derive(Clone, Debug)]
pub struct Keys<'a>(btree_map::Keys<'a, String, Value>);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

/// Iterator over the values of a [`DynamicMap`], in key order.
#[derive(Clone, Debug)]
pub struct Values<'a>(btree_map::Values<'a, String, Value>);

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Writes the JSON encoding. An encoding failure is logged and writes nothing;
/// use [`DynamicMap::to_json`] to observe the error.
impl fmt::Display for DynamicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(e) => {
                tracing::warn!("Failed to render map as JSON: {}", e);
                Ok(())
            }
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for DynamicMap {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<DynamicMap> for serde_json::Map<String, serde_json::Value> {
    fn from(map: DynamicMap) -> Self {
        map.entries
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::from(value)))
            .collect()
    }
}

impl TryFrom<serde_json::Value> for DynamicMap {
    type Error = MapError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(Self::from(map)),
            other => Err(MapError::ConversionError {
                type_name: "serde_json::Value".to_string(),
                message: format!(
                    "expected a JSON object, found {}",
                    Value::from(other).kind()
                ),
                source: None,
            }),
        }
    }
}

impl From<BTreeMap<String, Value>> for DynamicMap {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<DynamicMap> for BTreeMap<String, Value> {
    fn from(map: DynamicMap) -> Self {
        map.entries
    }
}

impl<K, V> FromIterator<(K, V)> for DynamicMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for DynamicMap {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DynamicMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
