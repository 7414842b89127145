//! Constructors for `BlueprintError`.

use serde_json::Value;

use super::BlueprintError;

/// Returns the JSON kind of `value` as used in diagnostics.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl BlueprintError {
    /// Construct a type mismatch between two concrete instance types.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint::BlueprintError;
    /// let e = BlueprintError::type_mismatch::<u8, String>();
    /// assert!(matches!(e, BlueprintError::TypeMismatch { expected: "u8", .. }));
    /// ```
    #[must_use]
    pub fn type_mismatch<Expected: ?Sized, Found: ?Sized>() -> Self {
        Self::TypeMismatch {
            expected: std::any::type_name::<Expected>(),
            found: std::any::type_name::<Found>(),
        }
    }

    /// Construct a field-level mismatch for a map override value.
    #[must_use]
    pub fn field_type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        value: &Value,
        source: serde_json::Error,
    ) -> Self {
        Self::FieldTypeMismatch {
            field: field.into(),
            expected,
            found: json_kind(value),
            source,
        }
    }

    /// Classify a non-object override for `target`.
    ///
    /// `null` is reported as [`BlueprintError::MissingOverride`]; every other
    /// non-object value as [`BlueprintError::InvalidOverride`].
    #[must_use]
    pub const fn unusable_override(target: &'static str, value: &Value) -> Self {
        match value {
            Value::Null => Self::MissingOverride { target },
            other => Self::InvalidOverride {
                target,
                found: json_kind(other),
            },
        }
    }

    /// Wrap a failure raised inside a relation producer.
    ///
    /// # Examples
    ///
    /// ```
    /// use blueprint::BlueprintError;
    /// let io = std::io::Error::other("catalogue offline");
    /// let e = BlueprintError::relation(io);
    /// assert_eq!(e.to_string(), "relation producer failed: catalogue offline");
    /// ```
    #[must_use]
    pub fn relation(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Relation {
            source: source.into(),
        }
    }
}
