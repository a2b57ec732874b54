//! Nested JSON merge used when folding decorator deltas.

use serde_json::{Map, Value};

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - When merging a map into a non-map target, the target becomes `{}` first.
/// - Maps merge recursively: keys are added or overwritten and nested maps
///   are overlaid, so the later value wins on collision.
/// - Sequences and scalars replace `target` wholesale.
///
/// # Examples
///
/// ```rust
/// use field_decor::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"attributes": {"pattern": "[0-9]+"}});
/// merge_value(&mut acc, json!({"attributes": {"title": "Digits"}}));
/// assert_eq!(
///     acc,
///     json!({"attributes": {"pattern": "[0-9]+", "title": "Digits"}})
/// );
///
/// merge_value(&mut acc, json!({"attributes": ["replaced"]}));
/// assert_eq!(acc["attributes"], json!(["replaced"]));
/// ```
pub fn merge_value(target: &mut Value, layer: Value) {
    match layer {
        Value::Object(map) => {
            if !target.is_object() {
                *target = Value::Object(Map::new());
            }
            if let Some(target_map) = target.as_object_mut() {
                merge_map(target_map, map);
            }
        }
        _ => *target = layer,
    }
}

/// Merge `delta` into `target` key by key with [`merge_value`] semantics.
pub(crate) fn merge_map(target: &mut Map<String, Value>, delta: Map<String, Value>) {
    for (key, value) in delta {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}
