// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON codec adapter.
//!
//! JSON is the canonical text encoding of a [`DynamicMap`]: it is what
//! [`DynamicMap::to_json`] and the `Display` implementation produce.

use crate::domain::{DynamicMap, MapError, Result};
use crate::ports::MapCodec;

/// JSON implementation of [`MapCodec`].
///
/// # Examples
///
/// ```rust
/// use dynmap::adapters::JsonCodec;
/// use dynmap::ports::MapCodec;
///
/// let codec = JsonCodec::new();
/// let map = codec.decode(r#"{"database": {"host": "localhost", "port": 5432}}"#).unwrap();
/// assert_eq!(codec.encode(&map).unwrap(), r#"{"database":{"host":"localhost","port":5432}}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Creates a codec producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec producing indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl MapCodec for JsonCodec {
    fn format_name(&self) -> &str {
        "json"
    }

    fn encode(&self, map: &DynamicMap) -> Result<String> {
        if self.pretty {
            map.to_json_pretty()
        } else {
            map.to_json()
        }
    }

    fn decode(&self, content: &str) -> Result<DynamicMap> {
        serde_json::from_str(content).map_err(|e| MapError::decode(self.format_name(), e))
    }
}
