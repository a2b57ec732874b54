//! Crate path resolution for dependency aliasing.
//!
//! Converts the optional `#[field_decorator(crate = "...")]` value into the
//! tokens that prefix every generated path.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed attribute.
///
/// Defaults to `::field_decor`. The library itself declares
/// `extern crate self as field_decor`, so the default also works inside it.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::field_decor }, |path| quote! { #path })
}
