//! Extensions for mapping foreign errors into `BlueprintResult` concisely.
//!
//! Relation producers return [`crate::BlueprintResult`], so nested factory
//! calls compose directly. Producers that call into other libraries can use
//! [`BlueprintResultExt::into_relation`] instead of spelling out
//! `.map_err(BlueprintError::relation)`.
//!
//! # Examples
//!
//! ```
//! use blueprint::{BlueprintResult, BlueprintResultExt};
//!
//! fn parse_stock(raw: &str) -> BlueprintResult<u32> {
//!     raw.parse::<u32>().into_relation()
//! }
//!
//! assert_eq!(parse_stock("12").ok(), Some(12));
//! assert!(parse_stock("twelve").is_err());
//! ```

use crate::{BlueprintError, BlueprintResult};

/// Generic extension for mapping any `Result<T, E>` into a
/// [`BlueprintResult`] carrying a [`BlueprintError::Relation`].
pub trait BlueprintResultExt<T> {
    /// Convert `Result<T, E>` into `BlueprintResult<T>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`BlueprintError::Relation`].
    fn into_relation(self) -> BlueprintResult<T>;
}

impl<T, E> BlueprintResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_relation(self) -> BlueprintResult<T> {
        self.map_err(BlueprintError::relation)
    }
}
