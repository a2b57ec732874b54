//! The accumulating key-value map describing one field's configuration.
//!
//! A [`ConfigMap`] is created per build request, threaded by value through
//! every decorator and handed to the host renderer afterwards. Keys keep their
//! insertion order, which matters for sequence-like entries such as select
//! `options` where the placeholder must come first.

mod merge;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DecorError;

pub use merge::merge_value;

/// Ordered mapping from configuration keys to JSON values.
///
/// # Examples
///
/// ```rust
/// use field_decor::ConfigMap;
/// use serde_json::json;
///
/// let mut config = ConfigMap::new();
/// config.insert("label", json!("Name"));
/// config.merge(ConfigMap::from_iter([(
///     String::from("attributes"),
///     json!({"required": true}),
/// )]));
/// assert_eq!(config.len(), 2);
/// assert_eq!(config.get("attributes"), Some(&json!({"required": true})));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(Map<String, Value>);

impl ConfigMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create an empty map with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Map::with_capacity(capacity))
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns the nested map stored under `key`, if that entry is a map.
    #[must_use]
    pub fn get_map(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Store `value` under `key`, returning the previous value.
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Merge `delta` into this map.
    ///
    /// Top-level keys from `delta` overwrite existing ones, except where both
    /// sides hold maps: those are merged key by key (recursively), so two
    /// decorators contributing different `attributes` keys both survive. On a
    /// collision the value from `delta` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use field_decor::ConfigMap;
    /// use serde_json::json;
    ///
    /// let mut config = ConfigMap::try_from(json!({"attributes": {"pattern": "[a-z]+"}}))?;
    /// config.merge(ConfigMap::try_from(json!({"attributes": {"title": "Lowercase"}}))?);
    /// assert_eq!(
    ///     config.into_value(),
    ///     json!({"attributes": {"pattern": "[a-z]+", "title": "Lowercase"}})
    /// );
    /// # Ok::<_, field_decor::DecorError>(())
    /// ```
    pub fn merge(&mut self, delta: Self) {
        merge::merge_map(&mut self.0, delta.0);
    }

    /// Borrow the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the map and return the underlying JSON map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Consume the map and return it as a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ConfigMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ConfigMap> for Value {
    fn from(config: ConfigMap) -> Self {
        config.into_value()
    }
}

impl TryFrom<Value> for ConfigMap {
    type Error = DecorError;

    /// Accepts JSON objects only, matching serde deserialisation.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DecorError::InvalidConfig {
                message: format!("expected a map, found {}", json_kind(&other)),
            }),
        }
    }
}

impl FromIterator<(String, Value)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, Value)> for ConfigMap {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ConfigMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = Value::Object(self.0.clone());
        fmt::Display::fmt(&value, f)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}

#[cfg(test)]
mod tests;
