// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) implemented by the
//! adapters layer: text codecs and overlay layers.

pub mod codec;
pub mod layer;

// Re-export commonly used types
pub use codec::MapCodec;
pub use layer::MapLayer;
