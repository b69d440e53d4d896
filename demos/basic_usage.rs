// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the dynmap crate.
//!
//! This example demonstrates:
//! - Converting records into dynamic maps
//! - Deep merging with and without replacing existing values
//! - Writing a map back into a record
//! - Layering defaults and overrides with `MapOverlay`
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use dynmap::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Account {
    name: String,
    email: String,
    phone_number: String,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== dynmap: Basic Usage ===\n");

    let john = Account {
        name: "John Doe".to_string(),
        email: "johndoe@mail.com".to_string(),
        phone_number: "+1234567890".to_string(),
    };
    let foo = Account {
        name: "Foo Bar".to_string(),
        email: "foobar@mail.com".to_string(),
        phone_number: String::new(),
    };

    // Example 1: Records to maps
    println!("--- Example 1: From Struct ---");
    let john_kv = DynamicMap::from_struct(&john)?;
    let mut foo_kv = DynamicMap::from_struct(&foo)?;
    println!("john: {}", john_kv);
    println!("foo:  {:?}", foo_kv.to_string_map());

    // Example 2: Fill empty values only
    println!("\n--- Example 2: Assign ---");
    john_kv.assign_to(&mut foo_kv);
    println!("foo after assign_to: {}", foo_kv);

    // Example 3: Replace existing values
    println!("\n--- Example 3: Assign With Replace ---");
    let mut replaced = foo_kv.clone();
    replaced.assign_with(&john_kv, true);
    println!("replaced: {}", replaced);

    // Example 4: Back into a record
    println!("\n--- Example 4: Unmarshal ---");
    let mut record = foo;
    foo_kv.unmarshal_into(&mut record)?;
    println!("record: {:?}", record);

    // Example 5: Layers
    println!("\n--- Example 5: Overlay ---");
    let merged = MapOverlay::new()
        .with_struct("directory", 0, &john)?
        .with_document(
            "overrides.json",
            2,
            r#"{"email": "john@work.example", "phone_number": ""}"#,
            JsonCodec::new(),
        )
        .build()?;
    println!("{}", JsonCodec::pretty().encode(&merged)?);

    Ok(())
}
