//! Support items referenced by `#[derive(Fields)]` expansions.
//!
//! Not part of the public API; paths may change without notice.

pub use serde::de::DeserializeOwned;
pub use serde_json::Value;

use crate::{BlueprintError, BlueprintResult, FieldWrite};

/// Copy an optional field when the source holds `Some`.
pub fn copy_optional<F: Clone>(slot: &mut Option<F>, source: &Option<F>) -> FieldWrite {
    match source {
        Some(value) => {
            *slot = Some(value.clone());
            FieldWrite::Applied
        }
        None => FieldWrite::Absent,
    }
}

/// Copy a non-optional field; such fields always hold a value.
pub fn copy_value<F: Clone>(slot: &mut F, source: &F) -> FieldWrite {
    slot.clone_from(source);
    FieldWrite::Applied
}

/// Deserialise `value` into the field type and overwrite `slot`.
///
/// # Errors
///
/// Returns [`BlueprintError::FieldTypeMismatch`] when `value` does not fit `F`;
/// `slot` is left untouched in that case.
pub fn assign_json<F: DeserializeOwned>(
    slot: &mut F,
    value: &Value,
    field: &'static str,
) -> BlueprintResult<()> {
    let parsed = serde_json::from_value::<F>(value.clone()).map_err(|source| {
        BlueprintError::field_type_mismatch(field, std::any::type_name::<F>(), value, source)
    })?;
    *slot = parsed;
    Ok(())
}
