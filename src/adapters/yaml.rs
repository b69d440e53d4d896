// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML codec adapter.

use crate::domain::{DynamicMap, MapError, Result};
use crate::ports::MapCodec;

/// YAML implementation of [`MapCodec`].
///
/// An empty (or whitespace-only) document decodes to an empty map.
///
/// # Examples
///
/// ```rust
/// use dynmap::adapters::YamlCodec;
/// use dynmap::ports::MapCodec;
///
/// let codec = YamlCodec::new();
/// let map = codec.decode("database:\n  host: localhost\n  port: 5432").unwrap();
/// let database = map.get("database").and_then(|v| v.as_map()).unwrap();
/// assert_eq!(database.get("port").and_then(|v| v.as_u64()), Some(5432));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Creates a new YAML codec.
    pub fn new() -> Self {
        YamlCodec
    }
}

impl MapCodec for YamlCodec {
    fn format_name(&self) -> &str {
        "yaml"
    }

    fn encode(&self, map: &DynamicMap) -> Result<String> {
        serde_yaml::to_string(map).map_err(|e| MapError::encode(self.format_name(), e))
    }

    fn decode(&self, content: &str) -> Result<DynamicMap> {
        if content.trim().is_empty() {
            return Ok(DynamicMap::new());
        }
        serde_yaml::from_str(content).map_err(|e| MapError::decode(self.format_name(), e))
    }
}
