//! Immutable, chainable factories producing blueprint instances.
//!
//! A [`BlueprintFactory`] never changes after construction. Attaching a
//! relation with [`BlueprintFactory::with`] (or one of its shaped variants)
//! returns a new factory that shares the production capability and the
//! existing bindings, plus one more binding at the end. Factories held
//! elsewhere keep their original behaviour.
//!
//! # Example
//!
//! ```rust
//! use blueprint::{BlueprintFactory, Fields};
//! use serde::Deserialize;
//!
//! #[derive(Clone, Debug, PartialEq, Deserialize, Fields)]
//! struct Item {
//!     name: Option<String>,
//! }
//!
//! #[derive(Clone, Debug, Fields)]
//! struct Store {
//!     name: Option<String>,
//!     items: Option<Vec<Item>>,
//! }
//!
//! let items = BlueprintFactory::new(|| Item { name: Some("Blueprint".into()) });
//! let stores = BlueprintFactory::new(|| Store { name: Some("Corner".into()), items: None });
//!
//! let stocked = stores.with_count(
//!     move |count| items.create_many(count),
//!     3,
//!     |store: &mut Store, items| store.items = Some(items),
//! );
//!
//! assert_eq!(stocked.create()?.items.map(|items| items.len()), Some(3));
//! assert!(stores.create()?.items.is_none());
//! # Ok::<_, blueprint::BlueprintError>(())
//! ```

mod binding;
mod production;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::merge::{merge_instance, merge_value};
use crate::{BlueprintResult, Fields, Override, Variants};

use binding::{Binding, apply_all};
pub use production::Blueprint;

/// Composition root producing instances of `T`.
pub struct BlueprintFactory<T> {
    blueprint: Arc<dyn Blueprint<Product = T>>,
    bindings: Arc<[Binding<T>]>,
}

impl<T: 'static> BlueprintFactory<T> {
    /// Create a factory from a production capability.
    ///
    /// Any `Fn() -> T + Send + Sync` closure is accepted, as is any type
    /// implementing [`Blueprint`].
    #[must_use]
    pub fn new<B>(blueprint: B) -> Self
    where
        B: Blueprint<Product = T>,
    {
        Self {
            blueprint: Arc::new(blueprint),
            bindings: Arc::from(Vec::new()),
        }
    }

    /// Number of relation bindings attached to this factory.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Produce one instance and apply every relation binding in order.
    ///
    /// # Errors
    ///
    /// Propagates a failure of the production capability, or the first error
    /// raised by a relation producer.
    pub fn create(&self) -> BlueprintResult<T> {
        let mut instance = self.blueprint.blueprint()?;
        apply_all(&self.bindings, &mut instance)?;
        Ok(instance)
    }

    /// Produce `count` independent instances, each through [`Self::create`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while creating an instance.
    pub fn create_many(&self, count: usize) -> BlueprintResult<Vec<T>> {
        trace!(count, "creating blueprint batch");
        (0..count).map(|_| self.create()).collect()
    }

    /// Return a new factory whose instances also receive a related value.
    ///
    /// On every [`Self::create`] the new factory calls `producer` and passes
    /// its result to `setter`. `self` is left unchanged.
    #[must_use]
    pub fn with<R, P, S>(&self, producer: P, setter: S) -> Self
    where
        R: 'static,
        P: Fn() -> BlueprintResult<R> + Send + Sync + 'static,
        S: Fn(&mut T, R) + Send + Sync + 'static,
    {
        self.bind(Binding::new(producer, setter))
    }

    /// Return a new factory binding a list of `count` related values.
    ///
    /// `count` is captured now and passed to `producer` on every create.
    #[must_use]
    pub fn with_count<R, P, S>(&self, producer: P, count: usize, setter: S) -> Self
    where
        R: 'static,
        P: Fn(usize) -> BlueprintResult<Vec<R>> + Send + Sync + 'static,
        S: Fn(&mut T, Vec<R>) + Send + Sync + 'static,
    {
        self.with(move || producer(count), setter)
    }

    /// Return a new factory binding a related value derived from `variant`.
    ///
    /// `variant` is captured now; each create passes `producer` its own clone.
    #[must_use]
    pub fn with_variant<V, R, P, S>(&self, producer: P, variant: V, setter: S) -> Self
    where
        V: Clone + Send + Sync + 'static,
        R: 'static,
        P: Fn(V) -> BlueprintResult<R> + Send + Sync + 'static,
        S: Fn(&mut T, R) + Send + Sync + 'static,
    {
        self.with(move || producer(variant.clone()), setter)
    }

    fn bind(&self, binding: Binding<T>) -> Self {
        let bindings: Arc<[Binding<T>]> = self
            .bindings
            .iter()
            .cloned()
            .chain(std::iter::once(binding))
            .collect();
        Self {
            blueprint: Arc::clone(&self.blueprint),
            bindings,
        }
    }
}

impl<T: Fields> BlueprintFactory<T> {
    /// Create an instance and overlay `overrides` onto it.
    ///
    /// Bindings run before the overlay, so an override wins over a bound
    /// relation for any field it supplies.
    ///
    /// # Errors
    ///
    /// Propagates relation failures and map merge failures such as
    /// [`crate::BlueprintError::FieldTypeMismatch`].
    pub fn create_with(&self, overrides: impl Into<Override<T>>) -> BlueprintResult<T> {
        let mut instance = self.create()?;
        match overrides.into() {
            Override::Instance(source) => {
                merge_instance(&mut instance, &source);
            }
            Override::Map(source) => {
                merge_value(&mut instance, &source)?;
            }
        }
        Ok(instance)
    }

    /// Create one instance per override in `variants`, preserving order.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`Self::create_with`].
    pub fn create_each(&self, variants: impl Into<Variants<T>>) -> BlueprintResult<Vec<T>> {
        let batch = variants.into();
        trace!(count = batch.len(), "creating blueprint variants");
        batch
            .into_overrides()
            .into_iter()
            .map(|source| self.create_with(source))
            .collect()
    }
}

impl<T> Clone for BlueprintFactory<T> {
    fn clone(&self) -> Self {
        Self {
            blueprint: Arc::clone(&self.blueprint),
            bindings: Arc::clone(&self.bindings),
        }
    }
}

impl<T> fmt::Debug for BlueprintFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlueprintFactory")
            .field("product", &std::any::type_name::<T>())
            .field("bindings", &self.bindings.len())
            .finish_non_exhaustive()
    }
}
