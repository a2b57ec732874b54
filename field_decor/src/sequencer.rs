//! Priority ordering of applicable decorators.
//!
//! Decorators are independent functions over a shared map, so ordering is the
//! only guarantee needed: ascending priority, with registration order breaking
//! ties.

use crate::{ConfigMap, FieldDecorator};

/// Decorators ordered for application.
#[derive(Debug, Default)]
pub struct DecoratorSequence<'a> {
    ordered: Vec<&'a dyn FieldDecorator>,
}

/// Stable-sort `decorators` by ascending effective priority.
///
/// Equal priorities keep the order in which `decorators` yields them.
///
/// # Examples
///
/// ```rust
/// use field_decor::decorators::{PatternDecorator, PlaceholderDecorator};
/// use field_decor::{DecoratorSet, sequence};
///
/// let mut set = DecoratorSet::new();
/// set.push(PatternDecorator::new("[0-9]+"));
/// set.push(PlaceholderDecorator::new("Digits"));
///
/// let ordered = sequence(set.applicable("text"));
/// assert_eq!(ordered.priorities(), [20, 25]);
/// ```
#[must_use]
pub fn sequence<'a, I>(decorators: I) -> DecoratorSequence<'a>
where
    I: IntoIterator<Item = &'a dyn FieldDecorator>,
{
    let mut ordered: Vec<&'a dyn FieldDecorator> = decorators.into_iter().collect();
    // `sort_by_key` is stable, which is what keeps registration order on ties.
    ordered.sort_by_key(|decorator| decorator.priority());
    DecoratorSequence { ordered }
}

impl<'a> DecoratorSequence<'a> {
    /// Iterate in application order.
    pub fn iter(&self) -> impl Iterator<Item = &'a dyn FieldDecorator> + '_ {
        self.ordered.iter().copied()
    }

    /// Number of decorators in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Effective priorities in application order.
    #[must_use]
    pub fn priorities(&self) -> Vec<i32> {
        self.ordered.iter().map(|decorator| decorator.priority()).collect()
    }

    /// Fold the sequence over `initial`.
    ///
    /// Each decorator sees only the cumulative result of the ones before it.
    #[must_use]
    pub fn apply(&self, initial: ConfigMap) -> ConfigMap {
        self.ordered.iter().fold(initial, |config, decorator| {
            let descriptor = decorator.descriptor();
            tracing::trace!(
                field_type = descriptor.field_type(),
                mutation = descriptor.mutation(),
                priority = decorator.priority(),
                "applying field decorator"
            );
            decorator.apply_to_config(config)
        })
    }
}

impl<'a> IntoIterator for DecoratorSequence<'a> {
    type Item = &'a dyn FieldDecorator;
    type IntoIter = std::vec::IntoIter<&'a dyn FieldDecorator>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}
