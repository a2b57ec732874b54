//! Extensions for mapping errors to `DecorResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(e.into()))`
//! chains when converting external error types into the crate's
//! `DecorResult<T>` alias (`Result<T, Arc<DecorError>>`).
//!
//! # Examples
//!
//! ```
//! use field_decor::{DecorResult, DecorResultExt};
//!
//! fn gather(figment: &figment::Figment) -> DecorResult<u16> {
//!     figment.extract_inner::<u16>("port").into_decor()
//! }
//! ```

use std::sync::Arc;

use crate::{DecorError, DecorResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<DecorError>`
/// into a `DecorResult<T>`.
pub trait DecorResultExt<T, E> {
    /// Convert `Result<T, E>` into `DecorResult<T>` using `Into<DecorError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<DecorError>`.
    fn into_decor(self) -> DecorResult<T>;
}

impl<T, E> DecorResultExt<T, E> for Result<T, E>
where
    E: Into<DecorError>,
{
    fn into_decor(self) -> DecorResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension tailored to decorator argument decoding failures.
pub trait DecorArgsExt<T> {
    /// Convert a `serde_json` decoding result into a
    /// [`DecorError::InvalidArguments`] for the given decorator.
    ///
    /// # Errors
    ///
    /// Returns the wrapped decoding failure when the input is `Err`.
    fn into_decor_args(self, descriptor: &crate::DecoratorDescriptor) -> DecorResult<T>;
}

impl<T> DecorArgsExt<T> for Result<T, serde_json::Error> {
    fn into_decor_args(self, descriptor: &crate::DecoratorDescriptor) -> DecorResult<T> {
        self.map_err(|e| {
            Arc::new(DecorError::invalid_arguments(
                descriptor.field_type(),
                descriptor.mutation(),
                e,
            ))
        })
    }
}
