//! Collection of decorator instances for one or more field types.

use crate::FieldDecorator;

/// Decorator instances in registration order.
///
/// The set may mix decorators for several field types;
/// [`DecoratorSet::applicable`] selects the ones targeting one type.
///
/// # Examples
///
/// ```rust
/// use field_decor::DecoratorSet;
/// use field_decor::decorators::{PlaceholderDecorator, SelectSizeDecorator};
///
/// let mut set = DecoratorSet::new();
/// set.push(PlaceholderDecorator::new("Name"));
/// set.push(SelectSizeDecorator::new(4));
/// assert_eq!(set.applicable("text").count(), 1);
/// assert_eq!(set.applicable("radio").count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct DecoratorSet {
    decorators: Vec<Box<dyn FieldDecorator>>,
}

impl DecoratorSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decorators: Vec::new(),
        }
    }

    /// Create an empty set with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            decorators: Vec::with_capacity(capacity),
        }
    }

    /// Register a decorator after every previously registered one.
    pub fn push<D>(&mut self, decorator: D)
    where
        D: FieldDecorator + 'static,
    {
        self.push_boxed(Box::new(decorator));
    }

    /// Register an already boxed decorator.
    pub fn push_boxed(&mut self, decorator: Box<dyn FieldDecorator>) {
        self.decorators.push(decorator);
    }

    /// Number of registered decorators across all field types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Whether no decorators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Iterate over every decorator in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn FieldDecorator> {
        self.decorators.iter().map(unbox)
    }

    /// Decorators targeting `field_type`, in registration order.
    pub fn applicable<'a>(
        &'a self,
        field_type: &'a str,
    ) -> impl Iterator<Item = &'a dyn FieldDecorator> + 'a {
        self.iter()
            .filter(move |decorator| decorator.descriptor().applies_to(field_type))
    }
}

#[expect(clippy::borrowed_box, reason = "adapter for iterating boxed decorators")]
fn unbox(decorator: &Box<dyn FieldDecorator>) -> &dyn FieldDecorator {
    &**decorator
}

impl FromIterator<Box<dyn FieldDecorator>> for DecoratorSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn FieldDecorator>>>(iter: I) -> Self {
        Self {
            decorators: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn FieldDecorator>> for DecoratorSet {
    fn extend<I: IntoIterator<Item = Box<dyn FieldDecorator>>>(&mut self, iter: I) {
        self.decorators.extend(iter);
    }
}

impl IntoIterator for DecoratorSet {
    type Item = Box<dyn FieldDecorator>;
    type IntoIter = std::vec::IntoIter<Box<dyn FieldDecorator>>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorators.into_iter()
    }
}
