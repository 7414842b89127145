//! Map-to-instance merging over directly declared fields.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::MergeReport;
use crate::{BlueprintError, BlueprintResult, FieldWrite, Fields};

/// Overlay the non-null entries of `source` onto `target`.
///
/// Keys are matched against the fields declared directly on `T`; ancestor
/// fields are not addressable. Unknown keys and restricted fields are
/// skipped. Entries are processed in the map's iteration order, and entries
/// applied before a failing one stay applied.
///
/// # Errors
///
/// Returns [`BlueprintError::FieldTypeMismatch`] when a value cannot be
/// assigned to its field.
pub fn merge_map<T: Fields>(
    target: &mut T,
    source: &Map<String, Value>,
) -> BlueprintResult<MergeReport> {
    let fields = T::declared_fields();
    let mut report = MergeReport::default();
    for (key, value) in source {
        if value.is_null() {
            continue;
        }
        let Some(field) = fields.iter().find(|field| field.name() == key) else {
            debug!(owner = T::type_name(), key = key.as_str(), "ignoring unknown override key");
            report.record_unknown(key);
            continue;
        };
        match field.assign(target, value)? {
            FieldWrite::Applied => {
                trace!(owner = T::type_name(), field = field.name(), "field assigned");
                report.record_applied(field.name());
            }
            FieldWrite::Absent | FieldWrite::Restricted => {
                debug!(
                    owner = T::type_name(),
                    field = field.name(),
                    "skipping restricted field"
                );
                report.record_restricted(field.name());
            }
        }
    }
    Ok(report)
}

/// Overlay a JSON override onto `target`.
///
/// # Errors
///
/// Returns [`BlueprintError::MissingOverride`] for `null`,
/// [`BlueprintError::InvalidOverride`] for any other non-object value, and
/// propagates [`merge_map`] failures. Nothing is written when the override
/// itself is rejected.
///
/// # Examples
///
/// ```rust
/// use blueprint::{BlueprintError, Fields, merge_value};
/// use serde_json::json;
///
/// #[derive(Clone, Debug, Fields)]
/// struct Person {
///     name: Option<String>,
///     age: Option<u32>,
/// }
///
/// let mut person = Person { name: Some("Frank".into()), age: Some(45) };
/// merge_value(&mut person, &json!({"name": "John", "nickname": "JJ"}))?;
/// assert_eq!(person.name.as_deref(), Some("John"));
/// assert_eq!(person.age, Some(45));
///
/// let err = merge_value(&mut person, &json!({"age": "old"})).unwrap_err();
/// assert!(matches!(err, BlueprintError::FieldTypeMismatch { .. }));
/// # Ok::<_, BlueprintError>(())
/// ```
pub fn merge_value<T: Fields>(target: &mut T, source: &Value) -> BlueprintResult<MergeReport> {
    match source {
        Value::Object(map) => merge_map(target, map),
        other => Err(BlueprintError::unusable_override(T::type_name(), other)),
    }
}
