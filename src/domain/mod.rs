// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the [`DynamicMap`] and [`Value`] types, the deep merge
//! algorithm and the crate's error type. It is independent of any text format
//! beyond the JSON data model used for record conversion.

pub mod dynamic_map;
pub mod errors;
pub mod merge;
pub mod value;

// Re-export commonly used types
pub use dynamic_map::{DynamicMap, Keys, Values};
pub use errors::{MapError, Result};
pub use value::{Number, Value};
