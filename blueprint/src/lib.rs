//! Immutable, composable blueprint factories for test fixtures.
//!
//! A [`BlueprintFactory`] wraps a production capability (anything implementing
//! [`Blueprint`], including plain closures) and a sequence of relation
//! bindings. Each call to [`BlueprintFactory::create`] produces a fresh
//! instance, applies the bindings in attachment order, and optionally overlays
//! a sparse override through the merge engine in [`merge`].
//!
//! Field access is provided by the [`Fields`] trait, which the companion
//! `blueprint_macros` crate derives for structs with named fields.
//!
//! ```rust
//! use blueprint::{BlueprintFactory, Fields};
//! use serde_json::json;
//!
//! #[derive(Clone, Debug, PartialEq, Fields)]
//! struct Item {
//!     name: Option<String>,
//!     price: Option<f32>,
//! }
//!
//! let items = BlueprintFactory::new(|| Item {
//!     name: Some("Blueprint".into()),
//!     price: Some(5.0),
//! });
//!
//! let cookie = items.create_with(json!({"name": "Cookie"}))?;
//! assert_eq!(cookie.name.as_deref(), Some("Cookie"));
//! assert_eq!(cookie.price, Some(5.0));
//! # Ok::<_, blueprint::BlueprintError>(())
//! ```

extern crate self as blueprint;

pub use blueprint_macros::Fields;

mod error;
pub mod factory;
mod field;
pub mod merge;
mod result_ext;
pub mod variant;

#[doc(hidden)]
pub mod __private;

pub use error::BlueprintError;
pub use factory::{Blueprint, BlueprintFactory};
pub use field::{Access, FieldAccessor, FieldWrite, Fields};
pub use merge::{
    MergeReport, merge_instance, merge_instance_checked, merge_map, merge_value,
};
pub use result_ext::BlueprintResultExt;
pub use variant::{Override, VariantMap, Variants};

/// Result type returned by fallible blueprint operations.
pub type BlueprintResult<T> = Result<T, BlueprintError>;
