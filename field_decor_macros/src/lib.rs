//! Procedural macros for `field_decor`.
//!
//! `#[derive(FieldDecorator)]` attaches decorator metadata to a struct and
//! registers it with the `field_decor` registry at process start:
//!
//! ```rust,ignore
//! #[derive(Debug, FieldDecorator)]
//! #[field_decorator(field_type = "text", mutation = "setPlaceholder", priority = 20, from_args)]
//! pub struct PlaceholderDecorator {
//!     placeholder: String,
//!     priority: Option<i32>,
//! }
//! ```
//!
//! The derive emits an inherent `DESCRIPTOR` constant, an implementation of
//! `field_decor::Describe`, and an `inventory` submission. A field named
//! `priority` (of type `Option<i32>`) becomes the per-instance priority
//! override. With `from_args` the registration also carries a factory built on
//! the type's `field_decor::FromArgs` implementation.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive decorator metadata and registration.
///
/// Recognised keys inside `#[field_decorator(...)]`:
///
/// - `field_type = "..."` (required): field type tag the decorator targets.
/// - `mutation = "..."` (required): builder mutation name.
/// - `priority = N` (required): default priority; lower applies first.
/// - `from_args`: register an argument factory using `FromArgs`.
/// - `crate = "path"`: path to the `field_decor` crate when renamed.
#[proc_macro_derive(FieldDecorator, attributes(field_decorator))]
pub fn derive_field_decorator(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
