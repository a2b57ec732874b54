//! Process-wide table of decorator types.
//!
//! Every type deriving `FieldDecorator` submits a [`Registration`] at process
//! start through `inventory`. The table is read-only afterwards and is used to
//! list the decorators available for a field type and to instantiate them from
//! declarative [`crate::FieldDefinition`]s.

use std::sync::Arc;

use serde_json::Value;

use crate::{DecorError, DecorResult, DecoratorDescriptor, FieldDecorator};

/// Builds a boxed decorator from JSON arguments and a priority override.
pub type DecoratorFactory = fn(&Value, Option<i32>) -> DecorResult<Box<dyn FieldDecorator>>;

/// One registered decorator type.
#[derive(Clone, Copy, Debug)]
pub struct Registration {
    descriptor: DecoratorDescriptor,
    factory: Option<DecoratorFactory>,
}

inventory::collect!(Registration);

impl Registration {
    /// Register a decorator type that cannot be built from arguments.
    #[must_use]
    pub const fn new(descriptor: DecoratorDescriptor) -> Self {
        Self {
            descriptor,
            factory: None,
        }
    }

    /// Register a decorator type together with its argument factory.
    #[must_use]
    pub const fn with_factory(descriptor: DecoratorDescriptor, factory: DecoratorFactory) -> Self {
        Self {
            descriptor,
            factory: Some(factory),
        }
    }

    /// Descriptor of the registered type.
    #[must_use]
    pub const fn descriptor(&self) -> &DecoratorDescriptor {
        &self.descriptor
    }

    /// Whether the type can be built from declarative arguments.
    #[must_use]
    pub const fn is_constructible(&self) -> bool {
        self.factory.is_some()
    }

    /// Build an instance from `args`.
    ///
    /// # Errors
    ///
    /// Returns [`DecorError::UnknownDecorator`] when the type has no factory,
    /// or whatever the factory reports for malformed arguments.
    pub fn instantiate(
        &self,
        args: &Value,
        priority: Option<i32>,
    ) -> DecorResult<Box<dyn FieldDecorator>> {
        let Some(factory) = self.factory else {
            return Err(Arc::new(DecorError::unknown_decorator(
                self.descriptor.field_type(),
                self.descriptor.mutation(),
            )));
        };
        factory(args, priority)
    }
}

/// All registrations ordered by field type, default priority and mutation.
///
/// `inventory` yields registrations in link order, which is unspecified; the
/// sort gives callers a stable listing.
#[must_use]
pub fn registrations() -> Vec<&'static Registration> {
    let mut all: Vec<&'static Registration> = inventory::iter::<Registration>().collect();
    all.sort_by_key(|reg| {
        let d = reg.descriptor();
        (d.field_type(), d.default_priority(), d.mutation())
    });
    all
}

/// Descriptors registered for `field_type`, in default-priority order.
///
/// # Examples
///
/// ```rust
/// let mutations: Vec<&str> = field_decor::registry::descriptors_for("text")
///     .iter()
///     .map(|d| d.mutation())
///     .collect();
/// assert_eq!(mutations, ["setInputType", "setPlaceholder", "setPattern"]);
/// ```
#[must_use]
pub fn descriptors_for(field_type: &str) -> Vec<DecoratorDescriptor> {
    registrations()
        .into_iter()
        .map(|reg| *reg.descriptor())
        .filter(|d| d.applies_to(field_type))
        .collect()
}

/// Find the registration for a field type and mutation pair.
///
/// `inventory` yields registrations in an unspecified order, so a pair
/// registered by more than one type has no defined winner and is rejected.
///
/// # Errors
///
/// Returns [`DecorError::UnknownDecorator`] when nothing is registered for the
/// pair, or [`DecorError::DuplicateDecorator`] when several types claim it.
pub fn lookup(field_type: &str, mutation: &str) -> DecorResult<&'static Registration> {
    let mut matches = inventory::iter::<Registration>().filter(|reg| {
        let d = reg.descriptor();
        d.applies_to(field_type) && d.mutation() == mutation
    });
    let found = matches
        .next()
        .ok_or_else(|| Arc::new(DecorError::unknown_decorator(field_type, mutation)))?;
    let extra = matches.count();
    if extra > 0 {
        tracing::warn!(
            field_type,
            mutation,
            registrations = extra + 1,
            "field mutation registered more than once"
        );
        return Err(Arc::new(DecorError::duplicate_decorator(field_type, mutation)));
    }
    Ok(found)
}

/// Instantiate the decorator registered for `field_type` and `mutation`.
///
/// # Errors
///
/// Returns the [`lookup`] failures, [`DecorError::UnknownDecorator`] when the
/// registered type has no factory, or [`DecorError::InvalidArguments`] when
/// `args` cannot be decoded.
pub fn instantiate(
    field_type: &str,
    mutation: &str,
    args: &Value,
    priority: Option<i32>,
) -> DecorResult<Box<dyn FieldDecorator>> {
    lookup(field_type, mutation)?.instantiate(args, priority)
}
