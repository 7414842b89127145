//! Expansion pipeline for `#[derive(Fields)]`.
//!
//! Parsing validates the input and collects attribute metadata; generation
//! turns the result into a `Fields` implementation.

pub(crate) mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expand the derive for `input`, or report the first validation error.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::fields_impl(&parsed))
}
