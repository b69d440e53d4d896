// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory layer adapters.
//!
//! This module provides the [`MapLayer`] implementations used by
//! [`MapOverlay`](crate::service::MapOverlay): a layer holding a ready map, and a
//! layer holding a text document decoded on load.

use crate::domain::{DynamicMap, Result};
use crate::ports::{MapCodec, MapLayer};

/// A layer that holds an already built map.
///
/// # Examples
///
/// ```rust
/// use dynmap::adapters::StaticLayer;
/// use dynmap::domain::DynamicMap;
/// use dynmap::ports::MapLayer;
///
/// let mut map = DynamicMap::new();
/// map.insert("debug", true);
///
/// let layer = StaticLayer::new("overrides", 3, map);
/// assert_eq!(layer.priority(), 3);
/// assert_eq!(layer.load().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticLayer {
    name: String,
    priority: u8,
    map: DynamicMap,
}

impl StaticLayer {
    /// Creates a layer from a map.
    pub fn new(name: impl Into<String>, priority: u8, map: DynamicMap) -> Self {
        Self {
            name: name.into(),
            priority,
            map,
        }
    }
}

impl MapLayer for StaticLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn load(&self) -> Result<DynamicMap> {
        Ok(self.map.clone())
    }
}

/// A layer that decodes a text document with a [`MapCodec`] each time it is loaded.
///
/// # Examples
///
/// ```rust
/// use dynmap::adapters::{DocumentLayer, JsonCodec};
/// use dynmap::ports::MapLayer;
///
/// let layer = DocumentLayer::new("settings.json", 1, r#"{"port": 8080}"#, JsonCodec::new());
/// assert_eq!(layer.load().unwrap().get("port").and_then(|v| v.as_u64()), Some(8080));
/// ```
pub struct DocumentLayer {
    name: String,
    priority: u8,
    content: String,
    codec: Box<dyn MapCodec + Send + Sync>,
}

impl DocumentLayer {
    /// Creates a layer from a document and the codec that parses it.
    pub fn new<C>(name: impl Into<String>, priority: u8, content: impl Into<String>, codec: C) -> Self
    where
        C: MapCodec + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            priority,
            content: content.into(),
            codec: Box::new(codec),
        }
    }
}

impl std::fmt::Debug for DocumentLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLayer")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("format", &self.codec.format_name())
            .finish()
    }
}

impl MapLayer for DocumentLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn load(&self) -> Result<DynamicMap> {
        self.codec.decode(&self.content)
    }
}
