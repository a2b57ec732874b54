//! Tests for `#[field_decorator(...)]` parsing and expansion.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::attrs::parse_decorator_attrs;
use super::crate_path;
use super::expand;

#[test]
fn parses_required_keys() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[field_decorator(field_type = "select", mutation = "setSize", priority = 25, from_args)]
        struct SizeDecorator {
            size: u32,
        }
    };
    let attrs = parse_decorator_attrs(&input.attrs, &input.ident).map_err(|err| anyhow!(err))?;
    ensure!(attrs.field_type.value() == "select", "field type not parsed");
    ensure!(attrs.mutation.value() == "setSize", "mutation not parsed");
    ensure!(attrs.priority == 25, "priority not parsed");
    ensure!(attrs.from_args, "from_args flag not parsed");
    ensure!(attrs.crate_path.is_none(), "unexpected crate path");
    Ok(())
}

#[test]
fn parses_negative_priority() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[field_decorator(field_type = "text", mutation = "setFirst", priority = -3)]
        struct Early;
    };
    let attrs = parse_decorator_attrs(&input.attrs, &input.ident).map_err(|err| anyhow!(err))?;
    ensure!(attrs.priority == -3, "expected -3, got {}", attrs.priority);
    Ok(())
}

#[rstest]
#[case::missing_priority(
    parse_quote! {
        #[field_decorator(field_type = "text", mutation = "setPlaceholder")]
        struct Missing;
    },
    "requires `priority`"
)]
#[case::unknown_key(
    parse_quote! {
        #[field_decorator(field_type = "text", mutation = "m", priority = 1, prio = 2)]
        struct Typo;
    },
    "unknown field_decorator key"
)]
#[case::non_string_type(
    parse_quote! {
        #[field_decorator(field_type = 3, mutation = "m", priority = 1)]
        struct BadType;
    },
    "field_type must be a string"
)]
#[case::non_integer_priority(
    parse_quote! {
        #[field_decorator(field_type = "text", mutation = "m", priority = "high")]
        struct BadPriority;
    },
    "priority must be an integer literal"
)]
fn rejects_invalid_attributes(#[case] input: DeriveInput, #[case] message: &str) {
    let err = parse_decorator_attrs(&input.attrs, &input.ident)
        .err()
        .map(|err| err.to_string())
        .unwrap_or_default();
    assert!(err.contains(message), "expected '{message}', got '{err}'");
}

#[test]
fn expansion_uses_priority_field_when_present() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[field_decorator(field_type = "text", mutation = "setPattern", priority = 25)]
        struct PatternDecorator {
            pattern: String,
            priority: Option<i32>,
        }
    };
    let tokens = expand(&input).map_err(|err| anyhow!(err))?.to_string();
    ensure!(tokens.contains("self . priority"), "override not wired: {tokens}");
    ensure!(
        tokens.contains("Registration :: new"),
        "expected registration without factory"
    );
    Ok(())
}

#[test]
fn expansion_registers_factory_with_from_args() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[field_decorator(field_type = "checkbox", mutation = "setUncheckedValue", priority = 15, from_args)]
        struct Unchecked {
            value: bool,
        }
    };
    let tokens = expand(&input).map_err(|err| anyhow!(err))?.to_string();
    ensure!(tokens.contains("Registration :: with_factory"), "factory missing");
    ensure!(tokens.contains("FromArgs"), "FromArgs not referenced");
    ensure!(
        tokens.contains(":: core :: option :: Option :: None"),
        "structs without a priority field report no override"
    );
    Ok(())
}

#[rstest]
#[case::enum_input(parse_quote! {
    #[field_decorator(field_type = "text", mutation = "m", priority = 1)]
    enum NotAStruct { A }
})]
#[case::generic_input(parse_quote! {
    #[field_decorator(field_type = "text", mutation = "m", priority = 1)]
    struct Generic<T> { inner: T }
})]
fn expansion_rejects_unsupported_shapes(#[case] input: DeriveInput) {
    assert!(expand(&input).is_err());
}

#[rstest]
#[case::default(None, ":: field_decor")]
#[case::custom(Some("crate"), "crate")]
#[case::nested(Some("my_ns::decor"), "my_ns :: decor")]
fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
    let parsed = input.and_then(|s| syn::parse_str::<syn::Path>(s).ok());
    assert_eq!(crate_path::resolve(parsed.as_ref()).to_string(), expected);
}
