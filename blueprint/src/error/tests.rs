//! Unit tests for error construction and rendering.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]

use rstest::rstest;
use serde_json::{Value, json};

use super::BlueprintError;
use super::constructors::json_kind;

#[rstest]
#[case::null(Value::Null, "null")]
#[case::boolean(json!(true), "boolean")]
#[case::number(json!(1.5), "number")]
#[case::string(json!("cookie"), "string")]
#[case::array(json!([1, 2]), "array")]
#[case::object(json!({"name": "cookie"}), "object")]
fn json_kind_names_every_variant(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(json_kind(&value), expected);
}

#[test]
fn null_override_is_reported_as_missing() {
    let err = BlueprintError::unusable_override("Item", &Value::Null);
    assert!(matches!(err, BlueprintError::MissingOverride { target: "Item" }));
}

#[test]
fn scalar_override_is_reported_as_invalid() {
    let err = BlueprintError::unusable_override("Item", &json!(42));
    assert!(matches!(
        err,
        BlueprintError::InvalidOverride {
            target: "Item",
            found: "number"
        }
    ));
    assert_eq!(
        err.to_string(),
        "override for `Item` must be an object, found number"
    );
}

#[test]
fn type_mismatch_names_both_types() {
    let err = BlueprintError::type_mismatch::<u32, String>();
    assert_eq!(
        err.to_string(),
        "cannot merge an instance of `alloc::string::String` into `u32`"
    );
}

#[test]
fn field_type_mismatch_keeps_source() {
    let value = json!("cheap");
    let source = serde_json::from_value::<f32>(value.clone())
        .err()
        .expect("string is not a float");
    let err = BlueprintError::field_type_mismatch("price", "f32", &value, source);
    assert!(err.to_string().starts_with(
        "cannot assign string value to field `price` of type `f32`"
    ));
    assert!(std::error::Error::source(&err).is_some());
}
