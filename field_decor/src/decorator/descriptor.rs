//! Static metadata attached to every decorator type.

use std::fmt;

/// Field type, builder mutation and default priority of a decorator type.
///
/// Descriptors are produced at compile time by `#[derive(FieldDecorator)]`
/// and never change afterwards.
///
/// # Examples
///
/// ```rust
/// use field_decor::DecoratorDescriptor;
///
/// const SIZE: DecoratorDescriptor = DecoratorDescriptor::new("select", "setSize", 25);
/// assert_eq!(SIZE.field_type(), "select");
/// assert_eq!(SIZE.resolve_priority(None), 25);
/// assert_eq!(SIZE.resolve_priority(Some(1)), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecoratorDescriptor {
    field_type: &'static str,
    mutation: &'static str,
    default_priority: i32,
}

impl DecoratorDescriptor {
    /// Build a descriptor.
    #[must_use]
    pub const fn new(field_type: &'static str, mutation: &'static str, default_priority: i32) -> Self {
        Self {
            field_type,
            mutation,
            default_priority,
        }
    }

    /// Field type tag the decorator targets, such as `"text"`.
    #[must_use]
    pub const fn field_type(&self) -> &'static str {
        self.field_type
    }

    /// Builder mutation the decorator stands for, such as `"setPlaceholder"`.
    #[must_use]
    pub const fn mutation(&self) -> &'static str {
        self.mutation
    }

    /// Priority used when an instance carries no override.
    #[must_use]
    pub const fn default_priority(&self) -> i32 {
        self.default_priority
    }

    /// Effective priority for an instance with the given override.
    #[must_use]
    pub const fn resolve_priority(&self, priority: Option<i32>) -> i32 {
        match priority {
            Some(value) => value,
            None => self.default_priority,
        }
    }

    /// Whether this descriptor targets `field_type`.
    #[must_use]
    pub fn applies_to(&self, field_type: &str) -> bool {
        self.field_type == field_type
    }
}

impl fmt::Display for DecoratorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{} (priority {})",
            self.field_type, self.mutation, self.default_priority
        )
    }
}
