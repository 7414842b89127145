//! Parsing utilities for the `Fields` derive macro.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, LitStr, Token, parenthesized};

mod input;
mod type_utils;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
pub(crate) use type_utils::option_inner;

/// Struct-level attributes recognised by `#[derive(Fields)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[blueprint(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `blueprint::`.
    pub crate_path: Option<syn::Path>,
}

impl StructAttrs {
    /// Path naming the runtime crate in generated code.
    pub(crate) fn runtime_path(&self) -> TokenStream {
        self.crate_path
            .as_ref()
            .map_or_else(|| quote! { blueprint }, ToTokens::to_token_stream)
    }
}

/// Field-level attributes recognised by `#[derive(Fields)]`.
///
/// - `parent` marks the field embedding the ancestor type.
/// - `skip` hides the field from the merge engine.
/// - `rename` changes the key used to address the field in map overrides.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub parent: bool,
    pub skip: bool,
    pub rename: Option<String>,
}

/// Iterate all `#[blueprint(...)]` attributes once and apply a callback.
fn parse_blueprint<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("blueprint")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
///
/// A `key = value` pair consumes exactly one expression, so keys following
/// it in the same attribute are still parsed.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}

/// Reads the string literal of a `key = "..."` pair.
fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(value) => Ok(value),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

/// Extracts `#[blueprint(...)]` metadata applied to a struct.
///
/// Only the `crate` key is recognised. Unknown keys are ignored so callers
/// keep compiling when new attributes appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_blueprint(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[blueprint(...)]` attributes.
///
/// Recognised keys are `parent`, `skip` and `rename`. Unknown keys are
/// ignored, matching [`parse_struct_attrs`].
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, syn::Error> {
    let mut out = FieldAttrs::default();
    parse_blueprint(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("parent") => out.parent = true,
            Some("skip") => out.skip = true,
            Some("rename") => out.rename = Some(lit_str(meta, "rename")?.value()),
            _ => discard_unknown(meta)?,
        }
        Ok(())
    })?;
    Ok(out)
}
