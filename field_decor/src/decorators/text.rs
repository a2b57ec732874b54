//! Decorators for `text` fields.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::result_ext::DecorArgsExt;
use crate::{ConfigMap, DecorResult, FieldDecorator, FromArgs};

use super::mirrored;

/// HTML input types accepted by [`InputTypeDecorator`].
pub const VALID_INPUT_TYPES: [&str; 13] = [
    "text",
    "email",
    "url",
    "tel",
    "password",
    "number",
    "search",
    "date",
    "time",
    "datetime-local",
    "month",
    "week",
    "color",
];

const FALLBACK_INPUT_TYPE: &str = "text";

/// Sets the HTML input type of a text field.
///
/// Unrecognised types fall back to `"text"`.
///
/// # Examples
///
/// ```rust
/// use field_decor::decorators::InputTypeDecorator;
///
/// assert_eq!(InputTypeDecorator::new("email").input_type(), "email");
/// assert_eq!(InputTypeDecorator::new("hologram").input_type(), "text");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, crate::FieldDecorator)]
#[field_decorator(field_type = "text", mutation = "setInputType", priority = 15, from_args)]
pub struct InputTypeDecorator {
    input_type: &'static str,
    priority: Option<i32>,
}

impl InputTypeDecorator {
    /// Create the decorator, normalising unknown types to `"text"`.
    #[must_use]
    pub fn new(input_type: &str) -> Self {
        let resolved = VALID_INPUT_TYPES
            .iter()
            .copied()
            .find(|valid| *valid == input_type)
            .unwrap_or_else(|| {
                tracing::debug!(
                    requested = input_type,
                    fallback = FALLBACK_INPUT_TYPE,
                    "unrecognised input type"
                );
                FALLBACK_INPUT_TYPE
            });
        Self {
            input_type: resolved,
            priority: None,
        }
    }

    /// Override the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The effective input type.
    #[must_use]
    pub const fn input_type(&self) -> &'static str {
        self.input_type
    }
}

impl FieldDecorator for InputTypeDecorator {
    fn config_modifications(&self) -> ConfigMap {
        let mut delta = ConfigMap::with_capacity(2);
        delta.insert("input_type", self.input_type);
        delta.insert("attributes", json!({ "type": self.input_type }));
        delta
    }
}

#[derive(Deserialize)]
struct InputTypeArgs {
    input_type: String,
}

impl FromArgs for InputTypeDecorator {
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self> {
        let parsed = InputTypeArgs::deserialize(args).into_decor_args(&Self::DESCRIPTOR)?;
        let mut decorator = Self::new(&parsed.input_type);
        decorator.priority = priority;
        Ok(decorator)
    }
}

/// Adds placeholder text to a text field.
#[derive(Clone, Debug, PartialEq, Eq, crate::FieldDecorator)]
#[field_decorator(field_type = "text", mutation = "setPlaceholder", priority = 20, from_args)]
pub struct PlaceholderDecorator {
    placeholder: String,
    priority: Option<i32>,
}

impl PlaceholderDecorator {
    /// Create the decorator.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            priority: None,
        }
    }

    /// Override the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl FieldDecorator for PlaceholderDecorator {
    fn config_modifications(&self) -> ConfigMap {
        mirrored("placeholder", Value::from(self.placeholder.as_str()))
    }
}

#[derive(Deserialize)]
struct PlaceholderArgs {
    placeholder: String,
}

impl FromArgs for PlaceholderDecorator {
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self> {
        let parsed = PlaceholderArgs::deserialize(args).into_decor_args(&Self::DESCRIPTOR)?;
        Ok(Self {
            placeholder: parsed.placeholder,
            priority,
        })
    }
}

/// Adds pattern validation to a text field.
///
/// The optional description becomes both `pattern_description` and the
/// `title` attribute browsers show when validation fails.
#[derive(Clone, Debug, PartialEq, Eq, crate::FieldDecorator)]
#[field_decorator(field_type = "text", mutation = "setPattern", priority = 25, from_args)]
pub struct PatternDecorator {
    pattern: String,
    description: Option<String>,
    priority: Option<i32>,
}

impl PatternDecorator {
    /// Create the decorator without a description.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: None,
            priority: None,
        }
    }

    /// Attach a human-readable description of the pattern.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// The input pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl FieldDecorator for PatternDecorator {
    fn config_modifications(&self) -> ConfigMap {
        let mut attributes = serde_json::Map::new();
        attributes.insert("pattern".to_owned(), Value::from(self.pattern.as_str()));

        let mut delta = ConfigMap::with_capacity(4);
        delta.insert("pattern", self.pattern.as_str());
        if let Some(description) = &self.description {
            delta.insert("pattern_description", description.as_str());
            attributes.insert("title".to_owned(), Value::from(description.as_str()));
        }
        delta.insert("attributes", Value::Object(attributes));
        delta
    }
}

#[derive(Deserialize)]
struct PatternArgs {
    pattern: String,
    #[serde(default)]
    description: Option<String>,
}

impl FromArgs for PatternDecorator {
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self> {
        let parsed = PatternArgs::deserialize(args).into_decor_args(&Self::DESCRIPTOR)?;
        Ok(Self {
            pattern: parsed.pattern,
            description: parsed.description,
            priority,
        })
    }
}
