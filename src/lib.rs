// SPDX-License-Identifier: MIT OR Apache-2.0

//! A dynamically-keyed key/value map with struct interop and deep merging.
//!
//! This crate provides [`DynamicMap`](domain::DynamicMap), a mapping from string keys
//! to dynamically typed [`Value`](domain::Value)s, with helpers to convert typed
//! records to and from it and to deep-merge two maps.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and the merge algorithm (`DynamicMap`, `Value`, errors)
//! - **Ports**: Trait definitions (`MapCodec`, `MapLayer`)
//! - **Adapters**: JSON and YAML codecs, static and document layers
//! - **Service**: `MapOverlay`, which merges prioritized layers into one map
//!
//! # Merge Semantics
//!
//! [`assign`](domain::DynamicMap::assign) fills absent or empty values
//! (`null`, `false`, `0`, `""`) in the destination and keeps everything else,
//! unless replacing is requested with
//! [`assign_with`](domain::DynamicMap::assign_with). Nested maps merge
//! recursively; sequences are replaced as a whole.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML codec (default)
//!
//! # Quick Start
//!
//! ```rust
//! use dynmap::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Account {
//!     name: String,
//!     phone: String,
//! }
//!
//! # fn main() -> Result<()> {
//! let john = DynamicMap::from_struct(&Account { name: "John Doe".into(), phone: "+1234567890".into() })?;
//! let mut foo = DynamicMap::from_struct(&Account { name: "Foo Bar".into(), phone: "".into() })?;
//!
//! john.assign_to(&mut foo);
//!
//! let merged: Account = foo.unmarshal()?;
//! assert_eq!(merged.name, "Foo Bar");
//! assert_eq!(merged.phone, "+1234567890");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{DocumentLayer, JsonCodec, StaticLayer};
    pub use crate::domain::{DynamicMap, MapError, Result, Value};
    pub use crate::ports::{MapCodec, MapLayer};
    pub use crate::service::MapOverlay;

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlCodec;
}
