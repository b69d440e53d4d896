// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for record conversion and merging.
//!
//! These tests follow the typical flow: convert records into maps, merge them,
//! and write the result back into a record.

mod common;

use common::{map, Account};
use dynmap::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
    city: String,
    zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    account: Account,
    address: Address,
    #[serde(default)]
    aliases: Vec<String>,
    active: bool,
    score: f64,
}

fn profile() -> Profile {
    Profile {
        account: Account::john(),
        address: Address {
            city: "X".to_string(),
            zip: String::new(),
        },
        aliases: vec!["jd".to_string()],
        active: true,
        score: 1.5,
    }
}

#[test]
fn test_from_struct() {
    let john = DynamicMap::from_struct(&Account::john()).unwrap();
    assert_eq!(john.get("name").unwrap(), "John Doe");
    assert_eq!(john.get("phone_number").unwrap(), "+1234567890");
}

#[test]
fn test_assign_to_fills_empty_phone() {
    let john = DynamicMap::from_struct(&Account::john()).unwrap();
    let mut foo = DynamicMap::from_struct(&Account::foo()).unwrap();

    john.assign_to(&mut foo);

    assert_eq!(foo.get("phone_number").unwrap(), "+1234567890");
    assert_eq!(foo.get("name").unwrap(), "Foo Bar");
    assert_eq!(foo.get("email").unwrap(), "foobar@mail.com");
}

#[test]
fn test_assign_fills_empty_phone() {
    let john = DynamicMap::from_struct(&Account::john()).unwrap();
    let mut foo = DynamicMap::from_struct(&Account::foo()).unwrap();

    foo.assign(&john);

    assert_eq!(foo.get("phone_number").unwrap(), "+1234567890");
    assert_eq!(foo.get("name").unwrap(), "Foo Bar");
}

#[test]
fn test_assign_replacing_copies_everything() {
    let john = DynamicMap::from_struct(&Account::john()).unwrap();
    let mut foo = DynamicMap::from_struct(&Account::foo()).unwrap();

    foo.assign_with(&john, true);

    assert_eq!(foo.unmarshal::<Account>().unwrap(), Account::john());
}

#[test]
fn test_unmarshal_back_into_record() {
    let mut account = Account::john();
    let mut kv = DynamicMap::from_struct(&account).unwrap();
    kv.insert("name", "Foo Bar");

    kv.unmarshal_into(&mut account).unwrap();

    assert_eq!(account.name, "Foo Bar");
    assert_eq!(account.email, "johndoe@mail.com");
}

#[test]
fn test_nested_record_roundtrip() {
    let original = profile();
    let kv = DynamicMap::from_struct(&original).unwrap();

    assert!(kv.get("account").unwrap().is_map());
    assert!(kv.get("address").unwrap().is_map());

    let back: Profile = kv.unmarshal().unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_nested_record_merge() {
    let mut mine = DynamicMap::from_struct(&profile()).unwrap();
    let theirs = map(json!({
        "address": {"city": "Y", "zip": "12345"},
        "account": {"name": "Other", "phone_number": "+999"},
        "aliases": ["other"],
        "active": false,
        "score": 9.0
    }));

    mine.assign(&theirs);
    let merged: Profile = mine.unmarshal().unwrap();

    assert_eq!(merged.address.city, "X");
    assert_eq!(merged.address.zip, "12345");
    assert_eq!(merged.account, Account::john());
    assert_eq!(merged.aliases, vec!["jd".to_string()]);
    assert!(merged.active);
    assert_eq!(merged.score, 1.5);
}

#[test]
fn test_unmarshal_into_nested_partial() {
    let mut target = profile();
    let patch = map(json!({"address": {"zip": "54321"}, "active": false}));

    patch.unmarshal_into(&mut target).unwrap();

    assert_eq!(target.address.city, "X");
    assert_eq!(target.address.zip, "54321");
    assert!(!target.active);
    assert_eq!(target.account, Account::john());
}

#[test]
fn test_unmarshal_missing_field_fails() {
    let kv = map(json!({"name": "only a name"}));
    let result: Result<Account> = kv.unmarshal();
    assert!(matches!(result, Err(MapError::DeserializationError { .. })));
}

#[test]
fn test_from_struct_of_map_types() {
    let mut source = std::collections::HashMap::new();
    source.insert("a".to_string(), vec![1, 2]);
    let kv = DynamicMap::from_struct(&source).unwrap();
    assert_eq!(kv.get("a").and_then(Value::as_sequence).unwrap().len(), 2);
}

#[test]
fn test_from_struct_of_existing_map() {
    let original = map(json!({"a": {"b": 1}}));
    let copy = DynamicMap::from_struct(&original).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn test_json_and_display() {
    let kv = DynamicMap::from_struct(&Account::john()).unwrap();
    let text = kv.to_json().unwrap();
    assert_eq!(
        text,
        r#"{"email":"johndoe@mail.com","name":"John Doe","phone_number":"+1234567890"}"#
    );
    assert_eq!(format!("{}", kv), text);
    assert_eq!(JsonCodec::new().decode(&text).unwrap(), kv);
}

#[test]
fn test_to_string_map() {
    let kv = DynamicMap::from_struct(&profile()).unwrap();
    let rendered = kv.to_string_map();
    assert_eq!(rendered["active"], "true");
    assert_eq!(rendered["score"], "1.5");
    assert_eq!(rendered["aliases"], r#"["jd"]"#);
    assert!(rendered["address"].contains("\"city\":\"X\""));
}

#[test]
#[cfg(feature = "yaml")]
fn test_yaml_roundtrip_of_record() {
    let kv = DynamicMap::from_struct(&profile()).unwrap();
    let codec = YamlCodec::new();
    let text = codec.encode(&kv).unwrap();
    let decoded = codec.decode(&text).unwrap();
    assert_eq!(decoded.unmarshal::<Profile>().unwrap(), profile());
}
