//! Decorators for `select` fields.

use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::result_ext::DecorArgsExt;
use crate::{ConfigMap, DecorResult, FieldDecorator, FromArgs};

use super::mirrored;

/// Inserts a placeholder option at the front of a select field's options.
///
/// This is a transformer: it reads the existing `options` and `value` keys
/// rather than contributing a fixed delta. Applying it repeatedly keeps a
/// single placeholder entry, first in order.
///
/// # Examples
///
/// ```rust
/// use field_decor::decorators::SelectPlaceholderDecorator;
/// use field_decor::{ConfigMap, FieldDecorator};
/// use serde_json::json;
///
/// let base = ConfigMap::try_from(json!({"options": {"uk": "United Kingdom"}}))?;
/// let config = SelectPlaceholderDecorator::new("Choose a country").apply_to_config(base);
/// let keys: Vec<&String> = config.get_map("options").into_iter().flat_map(|o| o.keys()).collect();
/// assert_eq!(keys, ["", "uk"]);
/// # Ok::<_, field_decor::DecorError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, crate::FieldDecorator)]
#[field_decorator(field_type = "select", mutation = "setPlaceholder", priority = 5, from_args)]
pub struct SelectPlaceholderDecorator {
    placeholder: String,
    disabled: bool,
    value: Option<String>,
    priority: Option<i32>,
}

impl SelectPlaceholderDecorator {
    /// Create a disabled placeholder option with an empty value.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            disabled: true,
            value: Some(String::new()),
            priority: None,
        }
    }

    /// Choose whether the placeholder option is disabled.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the option value used for the placeholder; `None` behaves as `""`
    /// for the option key but never matches a current field value.
    #[must_use]
    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    /// Override the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The placeholder label.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn option_key(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Whether the placeholder should render as selected for `config`.
    fn is_selected(&self, config: &ConfigMap) -> bool {
        match config.get("value") {
            None | Some(Value::Null) => true,
            Some(Value::String(current)) => self.value.as_deref() == Some(current.as_str()),
            Some(_) => false,
        }
    }
}

/// Existing options as an ordered map; sequences are keyed by index.
fn existing_options(options: Option<Value>) -> Map<String, Value> {
    match options {
        Some(Value::Object(map)) => map,
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        Some(Value::Null) | None => Map::new(),
        Some(other) => {
            tracing::debug!(options = %other, "discarding non-collection select options");
            Map::new()
        }
    }
}

impl FieldDecorator for SelectPlaceholderDecorator {
    fn apply_to_config(&self, mut config: ConfigMap) -> ConfigMap {
        config.insert("placeholder", self.placeholder.as_str());
        config.insert("placeholder_disabled", self.disabled);

        let key = self.option_key();
        let existing = existing_options(config.get_mut("options").map(Value::take));
        let mut options = Map::with_capacity(existing.len() + 1);
        options.insert(key.to_owned(), Value::from(self.placeholder.as_str()));
        options.extend(existing.into_iter().filter(|(k, _)| k != key));
        config.insert("options", Value::Object(options));

        if self.disabled {
            let selected = self.is_selected(&config);
            config.insert(
                "placeholder_attributes",
                json!({ "disabled": "disabled", "selected": selected }),
            );
        }
        config
    }
}

#[derive(Deserialize)]
struct SelectPlaceholderArgs {
    placeholder: String,
    #[serde(default = "default_disabled")]
    disabled: bool,
    #[serde(default = "default_value")]
    value: Option<String>,
}

const fn default_disabled() -> bool {
    true
}

fn default_value() -> Option<String> {
    Some(String::new())
}

impl FromArgs for SelectPlaceholderDecorator {
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self> {
        let parsed =
            SelectPlaceholderArgs::deserialize(args).into_decor_args(&Self::DESCRIPTOR)?;
        Ok(Self {
            placeholder: parsed.placeholder,
            disabled: parsed.disabled,
            value: parsed.value,
            priority,
        })
    }
}

/// Sets the number of visible options of a select field.
///
/// Sizes below 1 are clamped to 1.
#[derive(Clone, Debug, PartialEq, Eq, crate::FieldDecorator)]
#[field_decorator(field_type = "select", mutation = "setSize", priority = 25, from_args)]
pub struct SelectSizeDecorator {
    size: u32,
    priority: Option<i32>,
}

impl SelectSizeDecorator {
    /// Create the decorator, clamping `size` into `1..=u32::MAX`.
    #[must_use]
    pub fn new(size: i64) -> Self {
        let clamped = u32::try_from(size.max(1)).unwrap_or(u32::MAX);
        if i64::from(clamped) != size {
            tracing::debug!(requested = size, effective = clamped, "clamped select size");
        }
        Self {
            size: clamped,
            priority: None,
        }
    }

    /// Override the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The effective number of visible options.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }
}

impl FieldDecorator for SelectSizeDecorator {
    fn config_modifications(&self) -> ConfigMap {
        mirrored("size", Value::from(self.size))
    }
}

#[derive(Deserialize)]
struct SelectSizeArgs {
    size: i64,
}

impl FromArgs for SelectSizeDecorator {
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self> {
        let parsed = SelectSizeArgs::deserialize(args).into_decor_args(&Self::DESCRIPTOR)?;
        let mut decorator = Self::new(parsed.size);
        decorator.priority = priority;
        Ok(decorator)
    }
}
