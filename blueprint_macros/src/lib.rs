//! Procedural macros for `blueprint`.
//!
//! The [`macro@Fields`] derive generates the field accessor table that the
//! merge engine uses in place of runtime reflection. Each named field becomes
//! one accessor; `Option<T>` fields count as absent when `None`, every other
//! field always counts as present.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

#[cfg(test)]
mod tests;

/// Derive macro for `blueprint::Fields`.
///
/// Field attributes:
///
/// - `#[blueprint(parent)]` embeds the ancestor type. Its fields take part in
///   instance merges but cannot be addressed by map overrides. At most one
///   field may carry it.
/// - `#[blueprint(skip)]` hides the field from the merge engine.
/// - `#[blueprint(rename = "key")]` addresses the field as `key` in map
///   overrides.
///
/// Struct attribute `#[blueprint(crate = "path")]` changes the path used to
/// reach the `blueprint` crate in generated code.
#[proc_macro_derive(Fields, attributes(blueprint))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
