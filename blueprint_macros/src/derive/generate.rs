//! Code generation for `#[derive(Fields)]`.
//!
//! Emits one `FieldAccessor` per declared field plus the ancestor plumbing
//! that lets instance merges walk into the embedded parent.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, parse_quote};

use super::parse::{ParsedField, ParsedInput, option_inner};

/// Generate the `Fields` implementation for a parsed struct.
///
/// # Examples
///
/// ```rust,ignore
/// let input: syn::DeriveInput = syn::parse_quote! {
///     struct Pet { name: Option<String> }
/// };
/// let parsed = parse_input(&input).unwrap();
/// let tokens = fields_impl(&parsed);
/// assert!(tokens.to_string().contains("copy_optional"));
/// ```
pub(crate) fn fields_impl(parsed: &ParsedInput) -> TokenStream {
    let krate = parsed.struct_attrs.runtime_path();
    let ident = &parsed.ident;
    let accessors = parsed.declared().map(|field| field_accessor(&krate, field));
    let parent = parsed.parent();
    let parent_ty = parent.map_or_else(
        || quote! { () },
        |field| {
            let ty = &field.ty;
            quote! { #ty }
        },
    );
    let (parent_ref, parent_mut) = parent.and_then(|field| field.ident.as_ref()).map_or_else(
        || {
            let none = quote! { ::core::option::Option::None };
            (none.clone(), none)
        },
        |name| {
            (
                quote! { ::core::option::Option::Some(&self.#name) },
                quote! { ::core::option::Option::Some(&mut self.#name) },
            )
        },
    );

    let generics = bounded_generics(&krate, parsed, &parent_ty);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Fields for #ident #ty_generics #where_clause {
            type Parent = #parent_ty;

            fn declared_fields() -> ::std::vec::Vec<#krate::FieldAccessor<Self>> {
                ::std::vec![#(#accessors),*]
            }

            fn parent(&self) -> ::core::option::Option<&Self::Parent> {
                #parent_ref
            }

            fn parent_mut(&mut self) -> ::core::option::Option<&mut Self::Parent> {
                #parent_mut
            }
        }
    }
}

/// Build the accessor expression for one declared field.
///
/// Skipped fields become restricted accessors. `Option` fields copy only when
/// the source holds `Some`; other fields always copy.
pub(crate) fn field_accessor(krate: &TokenStream, parsed: &ParsedField) -> TokenStream {
    let key = parsed.key();
    let ty = &parsed.field.ty;
    let type_name = quote! { ::core::any::type_name::<#ty>() };
    if parsed.attrs.skip {
        return quote! { #krate::FieldAccessor::restricted(#key, #type_name) };
    }
    let Some(name) = parsed.field.ident.as_ref() else {
        return quote! { #krate::FieldAccessor::restricted(#key, #type_name) };
    };
    let copy = if option_inner(ty).is_some() {
        quote! { #krate::__private::copy_optional }
    } else {
        quote! { #krate::__private::copy_value }
    };
    quote! {
        #krate::FieldAccessor::open(
            #key,
            #type_name,
            |target: &mut Self, source: &Self| #copy(&mut target.#name, &source.#name),
            |target: &mut Self, value: &#krate::__private::Value| {
                #krate::__private::assign_json(&mut target.#name, value, #key)
            },
        )
    }
}

/// Add the bounds generic structs need for the generated accessors.
///
/// Non-generic structs are returned unchanged.
fn bounded_generics(
    krate: &TokenStream,
    parsed: &ParsedInput,
    parent_ty: &TokenStream,
) -> Generics {
    let mut generics = parsed.generics.clone();
    if generics.type_params().next().is_none() {
        return generics;
    }
    let params: Vec<syn::Ident> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause.predicates.push(parse_quote! { #param: 'static });
    }
    for field in parsed.declared().filter(|field| !field.attrs.skip) {
        let ty = &field.field.ty;
        where_clause.predicates.push(parse_quote! {
            #ty: ::core::clone::Clone + #krate::__private::DeserializeOwned
        });
    }
    if parsed.parent().is_some() {
        where_clause
            .predicates
            .push(parse_quote! { #parent_ty: #krate::Fields });
    }
    generics
}
