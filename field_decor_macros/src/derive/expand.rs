//! Token generation for `#[derive(FieldDecorator)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use super::attrs::{DecoratorAttrs, parse_decorator_attrs};
use super::crate_path;

/// Expand the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FieldDecorator cannot be derived for generic types",
        ));
    }
    let has_priority = match &input.data {
        Data::Struct(data) => has_priority_field(&data.fields),
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "FieldDecorator can only be derived for structs",
            ));
        }
    };
    let attrs = parse_decorator_attrs(&input.attrs, ident)?;
    Ok(generate(ident, &attrs, has_priority))
}

/// Whether the struct has a named `priority` field used as the override.
fn has_priority_field(fields: &Fields) -> bool {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .any(|field| field.ident.as_ref().is_some_and(|name| name == "priority")),
        _ => false,
    }
}

fn generate(ident: &syn::Ident, attrs: &DecoratorAttrs, has_priority: bool) -> TokenStream {
    let krate = crate_path::resolve(attrs.crate_path.as_ref());
    let field_type = &attrs.field_type;
    let mutation = &attrs.mutation;
    let priority = attrs.priority;
    let doc = format!(
        "Descriptor for the `{}` field mutation `{}`.",
        field_type.value(),
        mutation.value()
    );

    let override_expr = if has_priority {
        quote! { self.priority }
    } else {
        quote! { ::core::option::Option::None }
    };

    let registration = if attrs.from_args {
        quote! {
            fn build(
                args: &#krate::__private::Value,
                priority: ::core::option::Option<i32>,
            ) -> #krate::DecorResult<::std::boxed::Box<dyn #krate::FieldDecorator>> {
                <#ident as #krate::FromArgs>::from_args(args, priority).map(|decorator| {
                    ::std::boxed::Box::new(decorator) as ::std::boxed::Box<dyn #krate::FieldDecorator>
                })
            }

            #krate::__private::inventory::submit! {
                #krate::registry::Registration::with_factory(#ident::DESCRIPTOR, build)
            }
        }
    } else {
        quote! {
            #krate::__private::inventory::submit! {
                #krate::registry::Registration::new(#ident::DESCRIPTOR)
            }
        }
    };

    quote! {
        impl #ident {
            #[doc = #doc]
            pub const DESCRIPTOR: #krate::DecoratorDescriptor =
                #krate::DecoratorDescriptor::new(#field_type, #mutation, #priority);
        }

        impl #krate::Describe for #ident {
            fn descriptor(&self) -> &'static #krate::DecoratorDescriptor {
                &Self::DESCRIPTOR
            }

            fn priority_override(&self) -> ::core::option::Option<i32> {
                #override_expr
            }
        }

        const _: () = {
            #registration
        };
    }
}
