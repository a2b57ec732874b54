//! Parsing of `#[field_decorator(...)]` struct attributes.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

/// Metadata collected from the `#[field_decorator(...)]` attribute.
pub(crate) struct DecoratorAttrs {
    pub field_type: LitStr,
    pub mutation: LitStr,
    pub priority: i32,
    /// Emit an argument factory backed by the type's `FromArgs` impl.
    pub from_args: bool,
    /// Overrides the `field_decor` path in generated code.
    pub crate_path: Option<syn::Path>,
}

#[derive(Default)]
struct PartialAttrs {
    field_type: Option<LitStr>,
    mutation: Option<LitStr>,
    priority: Option<i32>,
    from_args: bool,
    crate_path: Option<syn::Path>,
}

/// Parse every `#[field_decorator(...)]` attribute on the struct.
///
/// `field_type`, `mutation` and `priority` are required. Unknown keys are
/// rejected so misspelt metadata fails at compile time.
pub(crate) fn parse_decorator_attrs(
    attrs: &[Attribute],
    span_source: &syn::Ident,
) -> syn::Result<DecoratorAttrs> {
    let mut partial = PartialAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("field_decorator")) {
        attr.parse_nested_meta(|meta| apply_meta(&meta, &mut partial))?;
    }

    let missing = |key: &str| {
        syn::Error::new_spanned(
            span_source,
            format!("#[field_decorator] requires `{key}`"),
        )
    };
    Ok(DecoratorAttrs {
        field_type: partial.field_type.ok_or_else(|| missing("field_type"))?,
        mutation: partial.mutation.ok_or_else(|| missing("mutation"))?,
        priority: partial.priority.ok_or_else(|| missing("priority"))?,
        from_args: partial.from_args,
        crate_path: partial.crate_path,
    })
}

fn apply_meta(meta: &ParseNestedMeta, out: &mut PartialAttrs) -> syn::Result<()> {
    let key = meta
        .path
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default();
    match key.as_str() {
        "field_type" => out.field_type = Some(lit_str(meta, "field_type")?),
        "mutation" => out.mutation = Some(lit_str(meta, "mutation")?),
        "priority" => out.priority = Some(parse_priority(meta)?),
        "from_args" => out.from_args = true,
        "crate" => {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
        }
        _ => {
            return Err(meta.error(
                "unknown field_decorator key; expected `field_type`, `mutation`, `priority`, `from_args` or `crate`",
            ));
        }
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Accepts integer literals, optionally negated.
fn parse_priority(meta: &ParseNestedMeta) -> syn::Result<i32> {
    let expr: Expr = meta.value()?.parse()?;
    match &expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse::<i32>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match inner.as_ref() {
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => int
                .base10_parse::<i32>()
                .map(|value| -value),
            _ => Err(syn::Error::new_spanned(&expr, "priority must be an integer literal")),
        },
        _ => Err(syn::Error::new_spanned(&expr, "priority must be an integer literal")),
    }
}
