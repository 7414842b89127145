//! Production capability for fresh instances.

use crate::BlueprintResult;

/// Produces fresh, independently owned instances.
///
/// Implement this trait on a configuration struct when the production logic
/// needs collaborators such as a fake data source or another factory.
/// Closures of the form `Fn() -> T` implement it automatically and never
/// fail.
///
/// # Examples
///
/// ```rust
/// use blueprint::{Blueprint, BlueprintFactory, BlueprintResult};
///
/// struct Greeting {
///     punctuation: char,
/// }
///
/// impl Blueprint for Greeting {
///     type Product = String;
///
///     fn blueprint(&self) -> BlueprintResult<String> {
///         Ok(format!("hello{}", self.punctuation))
///     }
/// }
///
/// let greetings = BlueprintFactory::new(Greeting { punctuation: '!' });
/// assert_eq!(greetings.create()?, "hello!");
/// # Ok::<_, blueprint::BlueprintError>(())
/// ```
pub trait Blueprint: Send + Sync + 'static {
    /// Type of the instances produced.
    type Product;

    /// Return a new instance sharing no mutable state with earlier ones.
    ///
    /// # Errors
    ///
    /// Implementations built on other factories propagate their failures,
    /// which abort [`crate::BlueprintFactory::create`].
    fn blueprint(&self) -> BlueprintResult<Self::Product>;
}

impl<F, T> Blueprint for F
where
    F: Fn() -> T + Send + Sync + 'static,
{
    type Product = T;

    fn blueprint(&self) -> BlueprintResult<T> {
        Ok(self())
    }
}
