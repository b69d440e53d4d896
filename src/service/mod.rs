// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! This module contains [`MapOverlay`], which merges prioritized layers into a
//! single [`DynamicMap`](crate::domain::DynamicMap).

pub mod overlay;

pub use overlay::MapOverlay;
