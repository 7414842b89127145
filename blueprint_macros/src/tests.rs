//! Unit tests for `Fields` derive validation and token generation.

use anyhow::{Result, anyhow, ensure};
use proc_macro2::TokenStream;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use crate::derive::expand;
use crate::derive::parse::parse_input;

fn expanded(input: &DeriveInput) -> Result<String> {
    expand(input)
        .map(|tokens: TokenStream| tokens.to_string())
        .map_err(|err| anyhow!("expansion failed: {err}"))
}

fn rejection(input: &DeriveInput) -> Result<String> {
    match expand(input) {
        Ok(tokens) => Err(anyhow!("expected a compile error, got {tokens}")),
        Err(err) => Ok(err.to_string()),
    }
}

#[rstest]
fn optional_fields_use_presence_copy() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Person {
            name: Option<String>,
            age: u32,
        }
    };
    let tokens = expanded(&input)?;
    ensure!(
        tokens.contains("copy_optional (& mut target . name , & source . name)"),
        "name should copy only when present: {tokens}"
    );
    ensure!(
        tokens.contains("copy_value (& mut target . age , & source . age)"),
        "age should always copy: {tokens}"
    );
    ensure!(
        tokens.contains("type Parent = ()"),
        "root struct should use the unit parent: {tokens}"
    );
    Ok(())
}

#[rstest]
fn parent_field_is_excluded_from_declared_fields() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Dog {
            #[blueprint(parent)]
            animal: Animal,
            breed: Option<String>,
        }
    };
    let parsed = parse_input(&input).map_err(|err| anyhow!("{err}"))?;
    let keys: Vec<String> = parsed.declared().map(|field| field.key()).collect();
    ensure!(keys == ["breed"], "unexpected declared keys: {keys:?}");

    let tokens = expanded(&input)?;
    ensure!(
        tokens.contains("type Parent = Animal"),
        "parent type should be the embedded field: {tokens}"
    );
    ensure!(
        tokens.contains("Some (& mut self . animal)"),
        "parent_mut should borrow the embedded field: {tokens}"
    );
    Ok(())
}

#[rstest]
fn skipped_fields_become_restricted_accessors() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Secret {
            #[blueprint(skip)]
            token: String,
        }
    };
    let tokens = expanded(&input)?;
    ensure!(
        tokens.contains("FieldAccessor :: restricted (\"token\""),
        "skip should emit a restricted accessor: {tokens}"
    );
    ensure!(
        !tokens.contains("assign_json"),
        "restricted fields must not be assignable: {tokens}"
    );
    Ok(())
}

#[rstest]
fn skip_after_an_unknown_key_still_restricts() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Secret {
            #[blueprint(note = "internal", skip)]
            secret: Option<String>,
        }
    };
    let tokens = expanded(&input)?;
    ensure!(
        tokens.contains("FieldAccessor :: restricted (\"secret\""),
        "skip should survive an unknown key: {tokens}"
    );
    ensure!(
        !tokens.contains("copy_optional"),
        "restricted fields must not be copied: {tokens}"
    );
    Ok(())
}

#[rstest]
#[case::rename(parse_quote! { struct Pet { #[blueprint(rename = "type")] kind: String } })]
#[case::raw(parse_quote! { struct Pet { r#type: String } })]
fn fields_are_keyed_by_rename_or_unraw_ident(#[case] input: DeriveInput) -> Result<()> {
    let parsed = parse_input(&input).map_err(|err| anyhow!("{err}"))?;
    let keys: Vec<String> = parsed.declared().map(|field| field.key()).collect();
    ensure!(keys == ["type"], "unexpected keys: {keys:?}");
    Ok(())
}

#[rstest]
fn crate_attribute_changes_generated_paths() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[blueprint(crate = "support::bp")]
        struct Item {
            name: Option<String>,
        }
    };
    let tokens = expanded(&input)?;
    ensure!(
        tokens.contains("impl support :: bp :: Fields for Item"),
        "impl should use the aliased path: {tokens}"
    );
    ensure!(
        !tokens.contains(" blueprint ::"),
        "default path should not leak: {tokens}"
    );
    Ok(())
}

#[rstest]
fn generic_structs_gain_accessor_bounds() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Boxed<T> {
            inner: Option<T>,
        }
    };
    let tokens = expanded(&input)?;
    ensure!(tokens.contains("T : 'static"), "missing lifetime bound: {tokens}");
    ensure!(
        tokens.contains("Option < T > : :: core :: clone :: Clone"),
        "missing field bound: {tokens}"
    );
    Ok(())
}

#[rstest]
#[case::enumeration(
    parse_quote! { enum Kind { A, B } },
    "Fields can only be derived for structs"
)]
#[case::tuple(parse_quote! { struct Pair(u8, u8); }, "Fields requires named fields")]
#[case::unit(parse_quote! { struct Marker; }, "Fields requires named fields")]
#[case::parent_and_skip(
    parse_quote! { struct Dog { #[blueprint(parent, skip)] animal: Animal } },
    "a parent field cannot also be skipped"
)]
#[case::two_parents(
    parse_quote! {
        struct Dog {
            #[blueprint(parent)]
            animal: Animal,
            #[blueprint(parent)]
            pet: Pet,
        }
    },
    "only one field may be marked #[blueprint(parent)]"
)]
#[case::duplicate_key(
    parse_quote! { struct Pet { #[blueprint(rename = "name")] alias: String, name: String } },
    "duplicate field key `name`"
)]
fn invalid_inputs_are_rejected(#[case] input: DeriveInput, #[case] message: &str) -> Result<()> {
    let err = rejection(&input)?;
    ensure!(err == message, "unexpected error: {err}");
    Ok(())
}
