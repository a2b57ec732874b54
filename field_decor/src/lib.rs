//! Priority-ordered decorators composing form-field configuration.
//!
//! A field's configuration is a [`ConfigMap`]. Decorators target one field
//! type and one builder mutation and carry a priority; the
//! [`CompositionPipeline`] selects the decorators for a field type, orders
//! them by ascending priority (registration order breaks ties) and folds them
//! over a base map. The result is handed to the host renderer.
//!
//! Decorator types declare their metadata with `#[derive(FieldDecorator)]`,
//! which also records them in the [`registry`] so that declarative
//! [`FieldDefinition`]s can name them by mutation.
//!
//! ```rust
//! use field_decor::decorators::{SelectPlaceholderDecorator, SelectSizeDecorator};
//! use field_decor::{CompositionPipeline, ConfigMap};
//! use serde_json::json;
//!
//! let mut pipeline = CompositionPipeline::new();
//! pipeline
//!     .register(SelectSizeDecorator::new(0))
//!     .register(SelectPlaceholderDecorator::new("Choose"));
//!
//! let base = ConfigMap::try_from(json!({"options": {"a": "A"}}))?;
//! let config = pipeline.build("select", base);
//! assert_eq!(config.get("size"), Some(&json!(1)));
//! assert_eq!(config.get("options"), Some(&json!({"": "Choose", "a": "A"})));
//! # Ok::<_, field_decor::DecorError>(())
//! ```

extern crate self as field_decor;

use std::sync::Arc;

pub use field_decor_macros::FieldDecorator;

mod collector;
mod config_map;
mod decorator;
pub mod decorators;
mod definition;
mod error;
mod markup;
mod pipeline;
pub mod registry;
mod result_ext;
mod sequencer;
#[cfg(test)]
mod test_support;

pub use collector::DecoratorSet;
pub use config_map::{ConfigMap, merge_value};
pub use decorator::{DecoratorDescriptor, Describe, FieldDecorator, FromArgs};
pub use definition::{
    DecoratorInvocation, FieldDefinition, FieldDefinitions, extract_field_definitions,
    load_field_definitions,
};
pub use error::{AggregatedErrors, DecorError};
pub use markup::{EscapeAttr, ValidationDecorator};
pub use pipeline::CompositionPipeline;
pub use result_ext::{DecorArgsExt, DecorResultExt};
pub use sequencer::{DecoratorSequence, sequence};

/// Result type used by fallible operations in this crate.
pub type DecorResult<T> = Result<T, Arc<DecorError>>;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use serde_json::Value;
}
