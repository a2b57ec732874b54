//! Failures collected while resolving one or more field definitions.

use std::{error::Error, fmt, sync::Arc};

use super::DecorError;

/// Every failure reported by a definition, in declaration order.
///
/// Built by [`DecorError::try_aggregate`] when more than one invocation
/// fails, so callers see all bad mutations at once.
///
/// # Examples
///
/// ```
/// use field_decor::{DecorError, DecoratorInvocation, FieldDefinition};
/// use serde_json::json;
///
/// let field = FieldDefinition::new("size", "select")
///     .with_decorator(DecoratorInvocation::new("setRows", json!({})))
///     .with_decorator(DecoratorInvocation::new("setSize", json!({})));
/// let err = field.build().err().map(|err| err.to_string()).unwrap_or_default();
/// assert!(err.contains("setRows"));
/// assert!(err.contains("setSize"));
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors {
    failures: Vec<Arc<DecorError>>,
}

impl AggregatedErrors {
    /// The failures in the order they were reported.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &DecorError> {
        self.failures.iter().map(Arc::as_ref)
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl FromIterator<Arc<DecorError>> for AggregatedErrors {
    fn from_iter<I: IntoIterator<Item = Arc<DecorError>>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.failures.iter();
        if let Some(first) = lines.next() {
            write!(f, "  - {first}")?;
        }
        for failure in lines {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<DecorError>;
    type IntoIter = std::vec::IntoIter<Arc<DecorError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
