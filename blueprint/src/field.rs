//! Field accessor tables used by the merge engine.
//!
//! Rust has no runtime reflection, so every mergeable type publishes a table
//! of [`FieldAccessor`] entries instead. The table is normally generated by
//! `#[derive(Fields)]`; hand-written implementations are supported for types
//! that cannot use the derive.

use std::fmt;

use serde_json::Value;

use crate::BlueprintResult;

/// Copies a field from `source` onto `target` when the source holds a value.
pub type CopyFn<T> = fn(&mut T, &T) -> FieldWrite;

/// Deserialises a JSON value into a field of `target`.
pub type AssignFn<T> = fn(&mut T, &Value) -> BlueprintResult<()>;

/// Whether the merge engine may read and write a field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Access {
    /// The field participates in merges.
    Open,
    /// The field is never read or written by the merge engine.
    Restricted,
}

/// Outcome of a single field copy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldWrite {
    /// The source supplied a value and the target was overwritten.
    Applied,
    /// The source held nothing for the field; the target is unchanged.
    Absent,
    /// The field is restricted; the target is unchanged.
    Restricted,
}

struct FieldOps<T> {
    copy: CopyFn<T>,
    assign: AssignFn<T>,
}

impl<T> Clone for FieldOps<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldOps<T> {}

/// Named get/set pair describing one field of `T`.
pub struct FieldAccessor<T> {
    name: &'static str,
    type_name: &'static str,
    ops: Option<FieldOps<T>>,
}

impl<T> FieldAccessor<T> {
    /// Describe a field the merge engine may read and write.
    #[must_use]
    pub const fn open(
        name: &'static str,
        type_name: &'static str,
        copy: CopyFn<T>,
        assign: AssignFn<T>,
    ) -> Self {
        Self {
            name,
            type_name,
            ops: Some(FieldOps { copy, assign }),
        }
    }

    /// Describe a field that is hidden from the merge engine.
    #[must_use]
    pub const fn restricted(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            ops: None,
        }
    }

    /// Name used to address the field in map overrides.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Access level of the field.
    #[must_use]
    pub const fn access(&self) -> Access {
        match self.ops {
            Some(_) => Access::Open,
            None => Access::Restricted,
        }
    }

    /// Copy the field from `source` onto `target` if the source holds a value.
    pub fn copy_from(&self, target: &mut T, source: &T) -> FieldWrite {
        self.ops
            .map_or(FieldWrite::Restricted, |ops| (ops.copy)(target, source))
    }

    /// Assign `value` to the field on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BlueprintError::FieldTypeMismatch`] when `value` cannot
    /// be deserialised into the field's declared type.
    pub fn assign(&self, target: &mut T, value: &Value) -> BlueprintResult<FieldWrite> {
        let Some(ops) = self.ops else {
            return Ok(FieldWrite::Restricted);
        };
        (ops.assign)(target, value)?;
        Ok(FieldWrite::Applied)
    }
}

impl<T> Clone for FieldAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldAccessor<T> {}

impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("access", &self.access())
            .finish()
    }
}

/// Types whose fields can be enumerated and addressed by name.
///
/// `Parent` models an ancestor type whose fields participate in instance
/// merges but not in map merges. Root types use `()`, which stands for the
/// universal base type and contributes no fields.
pub trait Fields: Sized + 'static {
    /// Ancestor embedded in this type, or `()` for root types.
    type Parent: Fields;

    /// Concrete type name used in diagnostics.
    #[must_use]
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Fields declared directly on this type, in declaration order.
    ///
    /// The ancestor's fields and the field embedding the ancestor are never
    /// part of this table.
    fn declared_fields() -> Vec<FieldAccessor<Self>>;

    /// Borrow the embedded ancestor, if any.
    fn parent(&self) -> Option<&Self::Parent>;

    /// Mutably borrow the embedded ancestor, if any.
    fn parent_mut(&mut self) -> Option<&mut Self::Parent>;

    /// Look up a directly declared field by name.
    #[must_use]
    fn declared_field(name: &str) -> Option<FieldAccessor<Self>> {
        Self::declared_fields()
            .into_iter()
            .find(|field| field.name() == name)
    }
}

impl Fields for () {
    type Parent = ();

    fn declared_fields() -> Vec<FieldAccessor<Self>> {
        Vec::new()
    }

    fn parent(&self) -> Option<&Self::Parent> {
        None
    }

    fn parent_mut(&mut self) -> Option<&mut Self::Parent> {
        None
    }
}
