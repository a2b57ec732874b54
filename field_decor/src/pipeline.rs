//! Composition pipeline folding decorators over a base configuration.

use crate::{ConfigMap, DecoratorSet, FieldDecorator, sequence};

/// Builds field configurations from a set of registered decorators.
///
/// `build` selects the decorators targeting the requested field type, orders
/// them by priority and folds them over the base configuration. Building
/// cannot fail and has no side effects besides the returned map.
///
/// # Examples
///
/// ```rust
/// use field_decor::decorators::{PatternDecorator, PlaceholderDecorator};
/// use field_decor::{CompositionPipeline, ConfigMap};
/// use serde_json::json;
///
/// let mut pipeline = CompositionPipeline::new();
/// pipeline.register(PatternDecorator::new("[A-Za-z]+").with_description("Letters only"));
/// pipeline.register(PlaceholderDecorator::new("Enter name"));
///
/// let config = pipeline.build("text", ConfigMap::new());
/// assert_eq!(
///     config.into_value(),
///     json!({
///         "placeholder": "Enter name",
///         "attributes": {
///             "placeholder": "Enter name",
///             "pattern": "[A-Za-z]+",
///             "title": "Letters only"
///         },
///         "pattern": "[A-Za-z]+",
///         "pattern_description": "Letters only"
///     })
/// );
/// ```
#[derive(Debug, Default)]
pub struct CompositionPipeline {
    decorators: DecoratorSet,
}

impl CompositionPipeline {
    /// Create a pipeline without decorators.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decorators: DecoratorSet::new(),
        }
    }

    /// Register a decorator after every previously registered one.
    pub fn register<D>(&mut self, decorator: D) -> &mut Self
    where
        D: FieldDecorator + 'static,
    {
        self.decorators.push(decorator);
        self
    }

    /// Register an already boxed decorator.
    pub fn register_boxed(&mut self, decorator: Box<dyn FieldDecorator>) -> &mut Self {
        self.decorators.push_boxed(decorator);
        self
    }

    /// The registered decorators.
    #[must_use]
    pub const fn decorators(&self) -> &DecoratorSet {
        &self.decorators
    }

    /// Build the final configuration for a field of `field_type`.
    #[must_use]
    pub fn build(&self, field_type: &str, initial: ConfigMap) -> ConfigMap {
        let ordered = sequence(self.decorators.applicable(field_type));
        tracing::debug!(
            field_type,
            decorators = ordered.len(),
            "building field configuration"
        );
        ordered.apply(initial)
    }
}

impl From<DecoratorSet> for CompositionPipeline {
    fn from(decorators: DecoratorSet) -> Self {
        Self { decorators }
    }
}

impl FromIterator<Box<dyn FieldDecorator>> for CompositionPipeline {
    fn from_iter<I: IntoIterator<Item = Box<dyn FieldDecorator>>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<DecoratorSet>())
    }
}
