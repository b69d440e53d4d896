// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared records and mock layers for integration tests.

use dynmap::domain::{DynamicMap, MapError, Result};
use dynmap::ports::MapLayer;
use serde::{Deserialize, Serialize};

/// The account record used throughout the merge scenarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[allow(dead_code)]
impl Account {
    pub fn john() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "johndoe@mail.com".to_string(),
            phone_number: "+1234567890".to_string(),
        }
    }

    pub fn foo() -> Self {
        Self {
            name: "Foo Bar".to_string(),
            email: "foobar@mail.com".to_string(),
            phone_number: String::new(),
        }
    }
}

/// A layer whose load always fails.
#[allow(dead_code)]
pub struct FailingLayer {
    pub priority: u8,
}

impl MapLayer for FailingLayer {
    fn name(&self) -> &str {
        "failing"
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn load(&self) -> Result<DynamicMap> {
        Err(MapError::ConversionError {
            type_name: "FailingLayer".to_string(),
            message: "simulated failure".to_string(),
            source: None,
        })
    }
}

/// Builds a map from a JSON literal.
#[allow(dead_code)]
pub fn map(value: serde_json::Value) -> DynamicMap {
    DynamicMap::try_from(value).unwrap()
}
