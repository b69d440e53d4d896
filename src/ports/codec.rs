// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text codec trait definition.
//!
//! This module defines the `MapCodec` trait, the interface for rendering a
//! [`DynamicMap`] to a text format and parsing it back.

use crate::domain::{DynamicMap, Result};

/// A trait for encoding maps to, and decoding maps from, a text format.
///
/// Decoding must reject documents whose root is not a mapping, so that a
/// decoded value always satisfies the `DynamicMap` invariants.
///
/// # Examples
///
/// ```rust
/// use dynmap::domain::{DynamicMap, Result};
/// use dynmap::ports::MapCodec;
///
/// struct KeyListCodec;
///
/// impl MapCodec for KeyListCodec {
///     fn format_name(&self) -> &str {
///         "keys"
///     }
///
///     fn encode(&self, map: &DynamicMap) -> Result<String> {
///         Ok(map.keys().collect::<Vec<_>>().join(","))
///     }
///
///     fn decode(&self, content: &str) -> Result<DynamicMap> {
///         Ok(content.split(',').filter(|k| !k.is_empty()).map(|k| (k, true)).collect())
///     }
/// }
///
/// let codec = KeyListCodec;
/// let map = codec.decode("a,b").unwrap();
/// assert_eq!(codec.encode(&map).unwrap(), "a,b");
/// ```
pub trait MapCodec {
    /// Returns the short name of the format, used in errors and logs.
    fn format_name(&self) -> &str;

    /// Renders the map as text.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EncodingError`](crate::domain::MapError::EncodingError)
    /// if the map cannot be represented in this format.
    fn encode(&self, map: &DynamicMap) -> Result<String>;

    /// Parses text into a map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EncodingError`](crate::domain::MapError::EncodingError)
    /// on malformed input or when the document root is not a mapping.
    fn decode(&self, content: &str) -> Result<DynamicMap>;
}
