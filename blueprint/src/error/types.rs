//! Primary error enum for factory and merge flows.

use thiserror::Error;

/// Errors that can occur while creating or merging blueprint instances.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BlueprintError {
    /// Instance merge where the source is not the target's concrete type.
    #[error("cannot merge an instance of `{found}` into `{expected}`")]
    TypeMismatch {
        /// Concrete type of the merge target.
        expected: &'static str,
        /// Concrete type of the supplied source.
        found: &'static str,
    },

    /// Map merge where a value cannot be assigned to the named field.
    #[error("cannot assign {found} value to field `{field}` of type `{expected}`: {source}")]
    FieldTypeMismatch {
        /// Field addressed by the override key.
        field: String,
        /// Declared type of the field.
        expected: &'static str,
        /// JSON kind of the rejected value.
        found: &'static str,
        /// Deserialisation failure describing the mismatch.
        #[source]
        source: serde_json::Error,
    },

    /// Override argument was null.
    #[error("override for `{target}` is missing")]
    MissingOverride {
        /// Concrete type of the merge target.
        target: &'static str,
    },

    /// Override argument was not a field-name mapping.
    #[error("override for `{target}` must be an object, found {found}")]
    InvalidOverride {
        /// Concrete type of the merge target.
        target: &'static str,
        /// JSON kind of the rejected override.
        found: &'static str,
    },

    /// A relation producer failed while populating a new instance.
    #[error("relation producer failed: {source}")]
    Relation {
        /// Underlying error reported by the producer.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
