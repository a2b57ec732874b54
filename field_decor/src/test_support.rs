//! Probe decorators shared by unit tests.
//!
//! They target the `probe` field type so they never show up in listings of
//! the built-in field types.

use serde_json::{Map, Value};

use crate::{ConfigMap, FieldDecorator};

/// Appends its label to the `trace` sequence, recording application order.
#[derive(Debug, crate::FieldDecorator)]
#[field_decorator(field_type = "probe", mutation = "trace", priority = 10)]
pub(crate) struct TraceDecorator {
    label: &'static str,
    priority: Option<i32>,
}

impl TraceDecorator {
    pub(crate) const fn new(label: &'static str) -> Self {
        Self {
            label,
            priority: None,
        }
    }

    pub(crate) const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl FieldDecorator for TraceDecorator {
    fn apply_to_config(&self, mut config: ConfigMap) -> ConfigMap {
        let mut trace = match config.remove("trace") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        trace.push(Value::from(self.label));
        config.insert("trace", Value::Array(trace));
        config
    }
}

/// Sets one nested attribute, exercising the default merge path.
#[derive(Debug, crate::FieldDecorator)]
#[field_decorator(field_type = "probe", mutation = "setAttribute", priority = 10)]
pub(crate) struct AttributeDecorator {
    key: &'static str,
    value: &'static str,
    priority: Option<i32>,
}

impl AttributeDecorator {
    pub(crate) const fn new(key: &'static str, value: &'static str, priority: i32) -> Self {
        Self {
            key,
            value,
            priority: Some(priority),
        }
    }
}

impl FieldDecorator for AttributeDecorator {
    fn config_modifications(&self) -> ConfigMap {
        let mut attributes = Map::new();
        attributes.insert(self.key.to_owned(), Value::from(self.value));
        ConfigMap::from_iter([(String::from("attributes"), Value::Object(attributes))])
    }
}

/// Labels recorded by [`TraceDecorator`] in application order.
pub(crate) fn trace_of(config: &ConfigMap) -> Vec<&str> {
    config
        .get("trace")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
