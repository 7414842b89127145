//! Unique sequences for fields that must never collide.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing counter shared between production capabilities.
///
/// # Examples
///
/// ```
/// use blueprint_test_helpers::Sequence;
///
/// let ids = Sequence::new();
/// assert_eq!(ids.next(), 1);
/// assert_eq!(ids.next_label("store"), "store-2");
/// ```
#[derive(Debug, Default)]
pub struct Sequence {
    last: AtomicU64,
}

impl Sequence {
    /// Create a sequence whose first value is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Advance the sequence and return the new value.
    #[must_use]
    pub fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Advance the sequence and return `"{prefix}-{value}"`.
    #[must_use]
    pub fn next_label(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next())
    }
}
