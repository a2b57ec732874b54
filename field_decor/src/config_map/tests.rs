//! Unit tests for `ConfigMap` merging and conversions.

use rstest::rstest;
use serde_json::{Value, json};

use super::{ConfigMap, merge_value};
use crate::DecorError;

fn map(value: Value) -> ConfigMap {
    ConfigMap::try_from(value).unwrap_or_else(|err| panic!("fixture must be a map: {err}"))
}

#[test]
fn merge_keeps_disjoint_nested_keys() {
    let mut config = map(json!({"attributes": {"pattern": "[A-Za-z]+"}}));
    config.merge(map(json!({"attributes": {"title": "Letters only"}})));
    assert_eq!(
        config.into_value(),
        json!({"attributes": {"pattern": "[A-Za-z]+", "title": "Letters only"}})
    );
}

#[test]
fn later_delta_wins_on_nested_collision() {
    let mut config = map(json!({"attributes": {"size": 3, "class": "wide"}}));
    config.merge(map(json!({"attributes": {"size": 5}})));
    assert_eq!(
        config.get("attributes"),
        Some(&json!({"size": 5, "class": "wide"}))
    );
}

#[rstest]
#[case::scalar_over_map(json!({"a": {"x": 1}}), json!({"a": 2}), json!({"a": 2}))]
#[case::map_over_scalar(json!({"a": 2}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::sequence_replaces(json!({"a": [1, 2]}), json!({"a": [3]}), json!({"a": [3]}))]
#[case::null_overwrites(json!({"a": 1}), json!({"a": null}), json!({"a": null}))]
fn merge_replaces_non_map_values(
    #[case] base: Value,
    #[case] delta: Value,
    #[case] expected: Value,
) {
    let mut target = base;
    merge_value(&mut target, delta);
    assert_eq!(target, expected);
}

#[test]
fn merge_preserves_insertion_order() {
    let mut config = map(json!({"placeholder": "Name"}));
    config.merge(map(json!({"attributes": {"b": 1}, "pattern": "x"})));
    config.merge(map(json!({"attributes": {"a": 2}, "placeholder": "Other"})));

    let keys: Vec<&str> = config.keys().map(String::as_str).collect();
    assert_eq!(keys, ["placeholder", "attributes", "pattern"]);
    let nested: Vec<&str> = config
        .get_map("attributes")
        .map(|attrs| attrs.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(nested, ["b", "a"]);
}

#[test]
fn remove_keeps_remaining_order() {
    let mut config = map(json!({"a": 1, "b": 2, "c": 3}));
    assert_eq!(config.remove("b"), Some(json!(2)));
    let keys: Vec<&str> = config.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "c"]);
}

#[rstest]
#[case::sequence(json!([1, 2]), "a sequence")]
#[case::string(json!("text"), "a string")]
#[case::number(json!(4), "a number")]
#[case::null(Value::Null, "null")]
fn try_from_rejects_non_maps(#[case] value: Value, #[case] kind: &str) {
    match ConfigMap::try_from(value) {
        Err(DecorError::InvalidConfig { message }) => assert!(message.contains(kind)),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn null_is_rejected_like_deserialisation() {
    assert!(ConfigMap::try_from(Value::Null).is_err());
    assert!(serde_json::from_value::<ConfigMap>(Value::Null).is_err());
}

#[test]
fn serialises_transparently() {
    let config = map(json!({"size": 4}));
    let encoded = serde_json::to_string(&config).unwrap_or_default();
    assert_eq!(encoded, r#"{"size":4}"#);
    assert_eq!(config.to_string(), encoded);
}
