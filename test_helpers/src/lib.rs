//! Test helpers shared across crates.
//!
//! This crate provides fake data for blueprint production capabilities and
//! unique sequences for fields that must never collide.

pub mod fake;
pub mod sequence;

pub use fake::Faker;
pub use sequence::Sequence;
