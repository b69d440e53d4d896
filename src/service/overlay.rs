// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered overlay of dynamic maps.
//!
//! A [`MapOverlay`] combines several [`MapLayer`]s into one [`DynamicMap`] using
//! the non-replacing deep merge: a non-empty value from a higher priority layer
//! is never replaced, while empty or absent values are filled in from lower
//! layers and nested sections merge field by field.

use crate::adapters::{DocumentLayer, StaticLayer};
use crate::domain::{DynamicMap, Result};
use crate::ports::{MapCodec, MapLayer};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Builder-style overlay of prioritized map layers.
///
/// Layers are kept sorted by priority, highest first. Layers with equal
/// priority keep their insertion order, and the one added first takes
/// precedence.
///
/// # Examples
///
/// ```rust
/// use dynmap::domain::DynamicMap;
/// use dynmap::service::MapOverlay;
/// use serde_json::json;
///
/// # fn main() -> dynmap::domain::Result<()> {
/// let defaults = DynamicMap::try_from(json!({"host": "localhost", "port": 8080, "user": "admin"}))?;
/// let overrides = DynamicMap::try_from(json!({"port": 9090, "user": ""}))?;
///
/// let merged = MapOverlay::new()
///     .with_layer("defaults", 0, defaults)
///     .with_layer("overrides", 3, overrides)
///     .build()?;
///
/// assert_eq!(merged.get("port").and_then(|v| v.as_u64()), Some(9090));
/// assert_eq!(merged.get("user").unwrap(), "admin");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MapOverlay {
    /// Layers in priority order (highest first)
    layers: Vec<Box<dyn MapLayer>>,
}

impl MapOverlay {
    /// Creates an overlay with no layers.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Adds a layer.
    pub fn add_layer(&mut self, layer: Box<dyn MapLayer>) {
        self.layers.push(layer);
        self.sort_layers();
    }

    /// Adds a layer, builder style.
    pub fn with_source(mut self, layer: Box<dyn MapLayer>) -> Self {
        self.add_layer(layer);
        self
    }

    /// Adds a ready map as a layer.
    pub fn with_layer(self, name: impl Into<String>, priority: u8, map: DynamicMap) -> Self {
        self.with_source(Box::new(StaticLayer::new(name, priority, map)))
    }

    /// Adds a serializable record as a layer.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::ConversionError`](crate::domain::MapError::ConversionError)
    /// if the record cannot be converted into a map.
    pub fn with_struct<T>(self, name: impl Into<String>, priority: u8, record: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let map = DynamicMap::from_struct(record)?;
        Ok(self.with_layer(name, priority, map))
    }

    /// Adds a text document as a layer, decoded with `codec` when the overlay is built.
    pub fn with_document<C>(
        self,
        name: impl Into<String>,
        priority: u8,
        content: impl Into<String>,
        codec: C,
    ) -> Self
    where
        C: MapCodec + Send + Sync + 'static,
    {
        self.with_source(Box::new(DocumentLayer::new(name, priority, content, codec)))
    }

    /// Returns the layer names in precedence order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    /// Returns the number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Merges all layers into one map.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while loading a layer.
    pub fn build(&self) -> Result<DynamicMap> {
        let mut merged = DynamicMap::new();

        for layer in &self.layers {
            let map = layer.load().map_err(|e| {
                tracing::debug!("Failed to load layer '{}': {}", layer.name(), e);
                e
            })?;
            tracing::trace!(
                "Applying layer '{}' (priority {}, {} keys)",
                layer.name(),
                layer.priority(),
                map.len()
            );
            merged.assign(&map);
        }

        tracing::debug!(
            "Built overlay from {} layers ({} keys)",
            self.layers.len(),
            merged.len()
        );

        Ok(merged)
    }

    /// Merges all layers and deserializes the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns a layer error, or
    /// [`MapError::DeserializationError`](crate::domain::MapError::DeserializationError)
    /// if the merged map does not fit `T`.
    pub fn extract<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.build()?.unmarshal()
    }

    /// Sorts layers by priority (highest first), keeping insertion order for ties.
    fn sort_layers(&mut self) {
        self.layers.sort_by_key(|layer| std::cmp::Reverse(layer.priority()));
    }
}

impl std::fmt::Debug for MapOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapOverlay")
            .field("layers", &self.layer_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonCodec;
    use crate::domain::MapError;
    use serde::Deserialize;
    use serde_json::json;

    fn map(value: serde_json::Value) -> DynamicMap {
        DynamicMap::try_from(value).unwrap()
    }

    #[test]
    fn test_empty_overlay() {
        let overlay = MapOverlay::new();
        assert!(overlay.is_empty());
        assert!(overlay.build().unwrap().is_empty());
    }

    #[test]
    fn test_layers_sorted_by_priority() {
        let overlay = MapOverlay::new()
            .with_layer("low", 1, DynamicMap::new())
            .with_layer("high", 3, DynamicMap::new())
            .with_layer("mid", 2, DynamicMap::new());
        assert_eq!(overlay.layer_names(), vec!["high", "mid", "low"]);
        assert_eq!(overlay.len(), 3);
    }

    #[test]
    fn test_equal_priority_first_added_wins() {
        let merged = MapOverlay::new()
            .with_layer("first", 1, map(json!({"k": "first"})))
            .with_layer("second", 1, map(json!({"k": "second"})))
            .build()
            .unwrap();
        assert_eq!(merged.get("k").unwrap(), "first");
    }

    #[test]
    fn test_higher_priority_non_empty_wins() {
        let merged = MapOverlay::new()
            .with_layer("defaults", 0, map(json!({"a": 1, "b": 2})))
            .with_layer("overrides", 3, map(json!({"a": 10, "b": 0})))
            .build()
            .unwrap();
        assert_eq!(merged, map(json!({"a": 10, "b": 2})));
    }

    #[test]
    fn test_nested_sections_merge() {
        let merged = MapOverlay::new()
            .with_layer("defaults", 0, map(json!({"db": {"host": "localhost", "port": 5432}})))
            .with_layer("env", 2, map(json!({"db": {"host": "db.internal"}})))
            .build()
            .unwrap();
        assert_eq!(
            merged,
            map(json!({"db": {"host": "db.internal", "port": 5432}}))
        );
    }

    #[test]
    fn test_document_layer_error_propagates() {
        let result = MapOverlay::new()
            .with_document("broken", 1, "[1, 2]", JsonCodec::new())
            .build();
        assert!(matches!(result, Err(MapError::EncodingError { .. })));
    }

    #[test]
    fn test_with_struct_rejects_non_map() {
        assert!(MapOverlay::new().with_struct("bad", 1, &5).is_err());
    }

    #[test]
    fn test_extract() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Settings {
            host: String,
            port: u16,
        }

        let settings: Settings = MapOverlay::new()
            .with_layer("defaults", 0, map(json!({"host": "localhost", "port": 80})))
            .with_document("file", 1, r#"{"port": 8080}"#, JsonCodec::new())
            .extract()
            .unwrap();
        assert_eq!(
            settings,
            Settings {
                host: "localhost".to_string(),
                port: 8080
            }
        );
    }

    #[test]
    fn test_debug_lists_layers() {
        let overlay = MapOverlay::new().with_layer("defaults", 0, DynamicMap::new());
        assert!(format!("{:?}", overlay).contains("defaults"));
    }
}
