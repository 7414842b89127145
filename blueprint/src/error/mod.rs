//! Error types produced by factories and the merge engine.

mod constructors;
mod types;

pub use types::BlueprintError;

#[cfg(test)]
mod tests;
