// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing codec and layer implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer.

pub mod json;
pub mod layers;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use json::JsonCodec;
pub use layers::{DocumentLayer, StaticLayer};
#[cfg(feature = "yaml")]
pub use yaml::YamlCodec;
