// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overlay layer trait definition.
//!
//! This module defines the `MapLayer` trait, the port through which a
//! [`MapOverlay`](crate::service::MapOverlay) obtains the maps it merges.

use crate::domain::{DynamicMap, Result};

/// A named, prioritized provider of a [`DynamicMap`].
///
/// # Priority
///
/// Higher priority values take precedence over lower ones. Within an overlay,
/// a non-empty value from a higher layer is never replaced by a lower layer;
/// empty or absent values are filled in from lower layers. The conventional
/// values are:
///
/// - **3 (highest)**: explicit overrides
/// - **2**: environment or user settings
/// - **1**: documents and files
/// - **0 (lowest)**: built-in defaults
///
/// # Examples
///
/// ```rust
/// use dynmap::domain::{DynamicMap, Result};
/// use dynmap::ports::MapLayer;
///
/// struct Defaults;
///
/// impl MapLayer for Defaults {
///     fn name(&self) -> &str {
///         "defaults"
///     }
///
///     fn priority(&self) -> u8 {
///         0
///     }
///
///     fn load(&self) -> Result<DynamicMap> {
///         let mut map = DynamicMap::new();
///         map.insert("port", 8080);
///         Ok(map)
///     }
/// }
///
/// assert_eq!(Defaults.load().unwrap().len(), 1);
/// ```
pub trait MapLayer: Send + Sync {
    /// Returns the name of this layer, used in logs and errors.
    fn name(&self) -> &str;

    /// Returns the priority of this layer.
    fn priority(&self) -> u8;

    /// Produces the layer's map.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer's data cannot be converted or decoded.
    fn load(&self) -> Result<DynamicMap>;
}
