//! Declarative field definitions.
//!
//! A [`FieldDefinition`] names a field, its type, its base configuration and
//! the builder mutations to apply. Mutations are resolved through the
//! [`crate::registry`], so any decorator deriving `FieldDecorator` with
//! `from_args` can be used from a definition file.
//!
//! ```toml
//! [[fields]]
//! key = "first_name"
//! type = "text"
//! config = { label = "First name" }
//!
//! [[fields.decorators]]
//! mutation = "setPlaceholder"
//! args = { placeholder = "Enter name" }
//!
//! [[fields.decorators]]
//! mutation = "setPattern"
//! priority = 30
//! args = { pattern = "[A-Za-z]+", description = "Letters only" }
//! ```

mod loader;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CompositionPipeline, ConfigMap, DecorError, DecorResult, DecoratorSet, registry};

pub use loader::{extract_field_definitions, load_field_definitions};

/// One builder mutation requested by a definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecoratorInvocation {
    /// Mutation name, such as `setPlaceholder`.
    pub mutation: String,
    /// Decorator arguments; their shape depends on the decorator.
    #[serde(default)]
    pub args: Value,
    /// Optional priority override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl DecoratorInvocation {
    /// Create an invocation without a priority override.
    #[must_use]
    pub fn new(mutation: impl Into<String>, args: Value) -> Self {
        Self {
            mutation: mutation.into(),
            args,
            priority: None,
        }
    }

    /// Set a priority override.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Declarative description of one field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Settings key of the field.
    pub key: String,
    /// Field type tag used to select decorators.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Base configuration supplied before decoration.
    #[serde(default)]
    pub config: ConfigMap,
    /// Mutations to apply, in declaration order.
    #[serde(default)]
    pub decorators: Vec<DecoratorInvocation>,
}

impl FieldDefinition {
    /// Create a definition with an empty base configuration.
    #[must_use]
    pub fn new(key: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            field_type: field_type.into(),
            config: ConfigMap::new(),
            decorators: Vec::new(),
        }
    }

    /// Append a decorator invocation.
    #[must_use]
    pub fn with_decorator(mut self, invocation: DecoratorInvocation) -> Self {
        self.decorators.push(invocation);
        self
    }

    /// Instantiate every invocation in declaration order.
    ///
    /// # Errors
    ///
    /// Returns every failing invocation at once: a single failure is returned
    /// as-is, several are wrapped in [`DecorError::Aggregate`].
    pub fn decorator_set(&self) -> DecorResult<DecoratorSet> {
        let mut set = DecoratorSet::with_capacity(self.decorators.len());
        let mut errors: Vec<Arc<DecorError>> = Vec::new();
        for invocation in &self.decorators {
            match registry::instantiate(
                &self.field_type,
                &invocation.mutation,
                &invocation.args,
                invocation.priority,
            ) {
                Ok(decorator) => set.push_boxed(decorator),
                Err(err) => errors.push(err),
            }
        }
        match DecorError::try_aggregate(errors) {
            None => Ok(set),
            Some(err) => Err(Arc::new(err)),
        }
    }

    /// Resolve the decorators and build the final configuration.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Self::decorator_set`]. The composition
    /// itself cannot fail.
    pub fn build(&self) -> DecorResult<ConfigMap> {
        let pipeline = CompositionPipeline::from(self.decorator_set()?);
        Ok(pipeline.build(&self.field_type, self.config.clone()))
    }
}

/// A collection of field definitions, as stored in a definition file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinitions {
    /// Definitions in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FieldDefinitions {
    /// Find the definition for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Build every field, keyed by settings key, in declaration order.
    ///
    /// # Errors
    ///
    /// Aggregates the failures of every field that could not be resolved.
    pub fn build_all(&self) -> DecorResult<Vec<(String, ConfigMap)>> {
        let mut built = Vec::with_capacity(self.fields.len());
        let mut errors: Vec<Arc<DecorError>> = Vec::new();
        for field in &self.fields {
            match field.build() {
                Ok(config) => built.push((field.key.clone(), config)),
                Err(err) => errors.push(err),
            }
        }
        match DecorError::try_aggregate(errors) {
            None => Ok(built),
            Some(err) => Err(Arc::new(err)),
        }
    }
}
