//! Decorator traits shared by built-in and host-defined decorators.
//!
//! A decorator contributes to a field's [`ConfigMap`] in one of two ways:
//!
//! - as a *modifier*, returning a partial map from
//!   [`FieldDecorator::config_modifications`] that the default
//!   [`FieldDecorator::apply_to_config`] merges into the accumulated state;
//! - as a *transformer*, overriding [`FieldDecorator::apply_to_config`] when it
//!   needs to read what earlier decorators produced.
//!
//! Metadata (field type, mutation name, default priority) comes from
//! [`Describe`], normally implemented by `#[derive(FieldDecorator)]`.
//!
//! # Example
//!
//! ```rust
//! use field_decor::{ConfigMap, FieldDecorator};
//! use serde_json::json;
//!
//! #[derive(Debug, FieldDecorator)]
//! #[field_decorator(field_type = "textarea", mutation = "setRows", priority = 10)]
//! struct RowsDecorator {
//!     rows: u32,
//!     priority: Option<i32>,
//! }
//!
//! impl FieldDecorator for RowsDecorator {
//!     fn config_modifications(&self) -> ConfigMap {
//!         ConfigMap::from_iter([(String::from("rows"), json!(self.rows))])
//!     }
//! }
//!
//! let rows = RowsDecorator { rows: 4, priority: None };
//! assert_eq!(RowsDecorator::DESCRIPTOR.mutation(), "setRows");
//! assert_eq!(rows.apply_to_config(ConfigMap::new()).get("rows"), Some(&json!(4)));
//! ```

mod descriptor;

use std::fmt;

use serde_json::Value;

use crate::{ConfigMap, DecorResult};

pub use descriptor::DecoratorDescriptor;

/// Type-level metadata for a decorator instance.
pub trait Describe {
    /// Descriptor of the decorator type.
    fn descriptor(&self) -> &'static DecoratorDescriptor;

    /// Per-instance priority override, if one was supplied.
    fn priority_override(&self) -> Option<i32>;

    /// Effective priority: the override when present, else the default.
    fn priority(&self) -> i32 {
        self.descriptor().resolve_priority(self.priority_override())
    }
}

/// A unit of configuration mutation for one field type.
///
/// Implementations must be pure: they may only read their own arguments and
/// the map they are given.
pub trait FieldDecorator: Describe + fmt::Debug + Send + Sync {
    /// The delta this decorator contributes.
    ///
    /// Transformers that override [`Self::apply_to_config`] may leave this
    /// returning the empty default.
    fn config_modifications(&self) -> ConfigMap {
        ConfigMap::new()
    }

    /// Apply the decorator to the accumulated configuration.
    ///
    /// The default merges [`Self::config_modifications`] into `config` with
    /// [`ConfigMap::merge`].
    fn apply_to_config(&self, mut config: ConfigMap) -> ConfigMap {
        config.merge(self.config_modifications());
        config
    }
}

/// Construct a decorator from declarative JSON arguments.
///
/// Construction follows the same normalisation rules as the typed
/// constructors; only undecodable arguments are rejected.
pub trait FromArgs: Sized {
    /// Build the decorator from `args` with an optional priority override.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecorError::InvalidArguments`] when `args` does not
    /// match the decorator's argument shape.
    fn from_args(args: &Value, priority: Option<i32>) -> DecorResult<Self>;
}
