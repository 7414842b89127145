//! Input parsing for the `Fields` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors.

use std::collections::HashSet;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed attributes.
pub(crate) struct ParsedField {
    pub field: syn::Field,
    pub attrs: FieldAttrs,
}

impl ParsedField {
    /// Name used to address the field in map overrides.
    ///
    /// Raw identifiers lose their `r#` prefix, so `r#type` is keyed `type`.
    pub(crate) fn key(&self) -> String {
        self.attrs.rename.clone().unwrap_or_else(|| {
            self.field
                .ident
                .as_ref()
                .map(|ident| ident.unraw().to_string())
                .unwrap_or_default()
        })
    }
}

/// Everything generation needs from the user-provided struct.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: Generics,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

impl ParsedInput {
    /// The field marked `#[blueprint(parent)]`, if any.
    pub(crate) fn parent(&self) -> Option<&syn::Field> {
        self.fields
            .iter()
            .find(|parsed| parsed.attrs.parent)
            .map(|parsed| &parsed.field)
    }

    /// Fields declared directly on the struct, excluding the parent.
    pub(crate) fn declared(&self) -> impl Iterator<Item = &ParsedField> {
        self.fields.iter().filter(|parsed| !parsed.attrs.parent)
    }
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums and unions, structs without named fields, a field marked
/// both `parent` and `skip`, more than one `parent` field, and two fields
/// sharing a key.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<ParsedInput, syn::Error> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Fields requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Fields can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    let mut keys = HashSet::new();
    let mut seen_parent = false;
    for field in named {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.parent {
            if attrs.skip {
                return Err(syn::Error::new_spanned(
                    &field,
                    "a parent field cannot also be skipped",
                ));
            }
            if seen_parent {
                return Err(syn::Error::new_spanned(
                    &field,
                    "only one field may be marked #[blueprint(parent)]",
                ));
            }
            seen_parent = true;
        }
        let parsed = ParsedField { field, attrs };
        if !parsed.attrs.parent && !keys.insert(parsed.key()) {
            return Err(syn::Error::new_spanned(
                &parsed.field,
                format!("duplicate field key `{}`", parsed.key()),
            ));
        }
        fields.push(parsed);
    }

    Ok(ParsedInput {
        ident,
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}
