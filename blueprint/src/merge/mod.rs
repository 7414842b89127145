//! Merge engine overlaying sparse overrides onto produced instances.
//!
//! Two forms are provided:
//!
//! - instance merges ([`merge_instance`], [`merge_instance_checked`]) walk the
//!   target's declared fields and then every ancestor reachable through
//!   [`crate::Fields::Parent`], copying each field the source holds a value
//!   for;
//! - map merges ([`merge_map`], [`merge_value`]) address fields by name and
//!   only see the fields declared directly on the target's type.
//!
//! Fields the source leaves empty keep the target's value, so overrides are
//! deltas rather than replacements. Restricted fields are skipped silently by
//! both forms.
//!
//! # Example
//!
//! ```rust
//! use blueprint::{Fields, merge_instance};
//!
//! #[derive(Clone, Debug, Fields)]
//! struct Person {
//!     name: Option<String>,
//!     age: Option<u32>,
//! }
//!
//! let mut target = Person { name: Some("Alice".into()), age: Some(25) };
//! let source = Person { name: None, age: Some(30) };
//! let report = merge_instance(&mut target, &source);
//!
//! assert_eq!(target.name.as_deref(), Some("Alice"));
//! assert_eq!(target.age, Some(30));
//! assert_eq!(report.applied(), ["age"]);
//! ```

mod instance;
mod map;
mod report;

pub use instance::{merge_instance, merge_instance_checked};
pub use map::{merge_map, merge_value};
pub use report::MergeReport;
