//! Shared test fixtures for integration tests.
//!
//! The shop fixtures model a store holding items; the people fixtures model
//! owners and pets produced from fake data.
#![allow(
    unfulfilled_lint_expectations,
    reason = "each integration test uses a different subset of the fixtures"
)]
#![expect(
    dead_code,
    reason = "each integration test uses a different subset of the fixtures"
)]

pub mod people;
pub mod shop;
