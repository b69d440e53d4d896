// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep merge of two [`DynamicMap`]s.
//!
//! Merging walks the source map key by key:
//!
//! - When both sides hold a nested map, the two maps are merged recursively
//!   with the same `replace_existing` flag.
//! - Otherwise the destination value is kept when it is present, non-empty and
//!   `replace_existing` is `false`. In every other case it is overwritten.
//!
//! "Empty" is [`Value::is_empty_value`]: `null`, `false`, `0` and `""`.
//! Sequences and maps are never empty, and sequences are never merged
//! element-wise.
//!
//! Values written into the destination are cloned, so the two maps never
//! share data after a merge.

use crate::domain::dynamic_map::DynamicMap;
use crate::domain::value::Value;
use std::collections::btree_map::Entry;

impl DynamicMap {
    /// Merges `source` into `self`, keeping non-empty values already in `self`.
    ///
    /// Inspired by JavaScript's `Object.assign()`, but nested maps are merged
    /// field by field instead of being replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::DynamicMap;
    /// use serde_json::json;
    ///
    /// let mut config = DynamicMap::try_from(json!({
    ///     "addr": {"city": "X", "zip": ""}
    /// })).unwrap();
    /// let defaults = DynamicMap::try_from(json!({
    ///     "addr": {"city": "Y", "zip": "12345"}
    /// })).unwrap();
    ///
    /// config.assign(&defaults);
    /// assert_eq!(
    ///     config,
    ///     DynamicMap::try_from(json!({"addr": {"city": "X", "zip": "12345"}})).unwrap()
    /// );
    /// ```
    pub fn assign(&mut self, source: &DynamicMap) {
        self.assign_with(source, false);
    }

    /// Merges `source` into `self`.
    ///
    /// With `replace_existing` set, every value from `source` wins. Without it,
    /// only absent or empty values in `self` are filled in.
    pub fn assign_with(&mut self, source: &DynamicMap, replace_existing: bool) {
        for (key, incoming) in &source.entries {
            merge_entry(self, key, incoming, replace_existing);
        }
    }

    /// Merges `self` into `target`, keeping non-empty values already in `target`.
    ///
    /// This is [`assign`](Self::assign) with the roles swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynmap::domain::DynamicMap;
    /// use serde_json::json;
    ///
    /// let john = DynamicMap::try_from(json!({"name": "John Doe", "phone": "+1234567890"})).unwrap();
    /// let mut foo = DynamicMap::try_from(json!({"name": "Foo Bar", "phone": ""})).unwrap();
    ///
    /// john.assign_to(&mut foo);
    /// assert_eq!(foo.get("name").unwrap(), "Foo Bar");
    /// assert_eq!(foo.get("phone").unwrap(), "+1234567890");
    /// ```
    pub fn assign_to(&self, target: &mut DynamicMap) {
        self.assign_to_with(target, false);
    }

    /// Merges `self` into `target`, overwriting non-empty values when
    /// `replace_existing` is set.
    pub fn assign_to_with(&self, target: &mut DynamicMap, replace_existing: bool) {
        target.assign_with(self, replace_existing);
    }
}

fn merge_entry(dest: &mut DynamicMap, key: &str, incoming: &Value, replace_existing: bool) {
    match dest.entries.entry(key.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(incoming.clone());
        }
        Entry::Occupied(mut slot) => {
            let existing = slot.get_mut();
            match (existing, incoming) {
                (Value::Map(existing), Value::Map(nested)) => {
                    tracing::trace!("Merging nested map at key '{}'", key);
                    existing.assign_with(nested, replace_existing);
                }
                (existing, _) if !replace_existing && !existing.is_empty_value() => {
                    tracing::trace!(
                        "Keeping non-empty {} at key '{}'",
                        existing.kind(),
                        key
                    );
                }
                (existing, _) => {
                    *existing = incoming.clone();
                }
            }
        }
    }
}
