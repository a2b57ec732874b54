//! Constructors for `DecorError`.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;

use super::{AggregatedErrors, DecorError};

impl DecorError {
    /// Collapse collected failures into a single [`DecorError`].
    ///
    /// Returns `None` when nothing failed. A single uniquely owned failure is
    /// returned as-is; a single shared failure, or two or more, become
    /// [`Self::Aggregate`].
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut failures: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        match failures.len() {
            0 => None,
            1 => failures.pop().map(|only| {
                Arc::try_unwrap(only).unwrap_or_else(|shared| {
                    Self::Aggregate(Box::new(AggregatedErrors::from_iter([shared])))
                })
            }),
            _ => Some(Self::Aggregate(Box::new(failures.into_iter().collect()))),
        }
    }

    /// Construct an [`DecorError::InvalidArguments`] for a decorator.
    #[must_use]
    pub fn invalid_arguments(
        field_type: &str,
        mutation: &str,
        source: serde_json::Error,
    ) -> Self {
        Self::InvalidArguments {
            field_type: field_type.to_owned(),
            mutation: mutation.to_owned(),
            source,
        }
    }

    /// Construct an [`DecorError::UnknownDecorator`] for a lookup miss.
    #[must_use]
    pub fn unknown_decorator(field_type: &str, mutation: &str) -> Self {
        Self::UnknownDecorator {
            field_type: field_type.to_owned(),
            mutation: mutation.to_owned(),
        }
    }

    /// Construct a [`DecorError::DuplicateDecorator`] for an ambiguous lookup.
    #[must_use]
    pub fn duplicate_decorator(field_type: &str, mutation: &str) -> Self {
        Self::DuplicateDecorator {
            field_type: field_type.to_owned(),
            mutation: mutation.to_owned(),
        }
    }

    /// Construct a [`DecorError::File`] wrapped in an [`Arc`].
    #[must_use]
    pub fn file_arc(path: &Utf8Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }
}
