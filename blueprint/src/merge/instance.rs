//! Instance-to-instance merging across the ancestor chain.

use std::any::Any;

use tracing::{debug, trace};

use super::MergeReport;
use crate::{BlueprintError, BlueprintResult, FieldWrite, Fields};

/// Overlay every field `source` holds a value for onto `target`.
///
/// Fields declared on `T` are visited first, followed by those of each
/// ancestor in turn. Absent source values and restricted fields leave the
/// target untouched.
pub fn merge_instance<T: Fields>(target: &mut T, source: &T) -> MergeReport {
    let mut report = MergeReport::default();
    overlay_chain(target, source, &mut report);
    report
}

/// Dynamically typed form of [`merge_instance`].
///
/// # Errors
///
/// Returns [`BlueprintError::TypeMismatch`] when `S` is not `T`. The target is
/// not modified in that case.
///
/// # Examples
///
/// ```rust
/// use blueprint::{BlueprintError, Fields, merge_instance_checked};
///
/// #[derive(Clone, Debug, Fields)]
/// struct Person {
///     name: Option<String>,
/// }
///
/// let mut target = Person { name: Some("Frank".into()) };
/// let err = merge_instance_checked(&mut target, &42_u8).unwrap_err();
/// assert!(matches!(err, BlueprintError::TypeMismatch { found: "u8", .. }));
/// ```
pub fn merge_instance_checked<T: Fields, S: Any>(
    target: &mut T,
    source: &S,
) -> BlueprintResult<MergeReport> {
    let Some(same) = (source as &dyn Any).downcast_ref::<T>() else {
        return Err(BlueprintError::type_mismatch::<T, S>());
    };
    Ok(merge_instance(target, same))
}

fn overlay_chain<T: Fields>(target: &mut T, source: &T, report: &mut MergeReport) {
    for field in T::declared_fields() {
        match field.copy_from(target, source) {
            FieldWrite::Applied => {
                trace!(owner = T::type_name(), field = field.name(), "field merged");
                report.record_applied(field.name());
            }
            FieldWrite::Absent => report.record_absent(field.name()),
            FieldWrite::Restricted => {
                debug!(
                    owner = T::type_name(),
                    field = field.name(),
                    "skipping restricted field"
                );
                report.record_restricted(field.name());
            }
        }
    }
    if let (Some(parent), Some(source_parent)) = (target.parent_mut(), source.parent()) {
        overlay_chain(parent, source_parent, report);
    }
}
