//! Deferred relation bindings applied to each new instance.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::BlueprintResult;

type BindingFn<T> = dyn Fn(&mut T) -> BlueprintResult<()> + Send + Sync;

/// A relation binding: computes a related value and stores it on an instance.
pub(crate) struct Binding<T> {
    apply: Arc<BindingFn<T>>,
}

impl<T: 'static> Binding<T> {
    /// Build a binding from a producer and a setter.
    pub(crate) fn new<R, P, S>(producer: P, setter: S) -> Self
    where
        R: 'static,
        P: Fn() -> BlueprintResult<R> + Send + Sync + 'static,
        S: Fn(&mut T, R) + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(move |instance: &mut T| {
                let related = producer()?;
                setter(instance, related);
                Ok(())
            }),
        }
    }
}

impl<T> Binding<T> {
    fn apply(&self, instance: &mut T) -> BlueprintResult<()> {
        (self.apply)(instance)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

/// Apply `bindings` to `instance` in attachment order.
///
/// The first failure aborts the sequence; later bindings do not run.
pub(crate) fn apply_all<T>(bindings: &[Binding<T>], instance: &mut T) -> BlueprintResult<()> {
    for (position, binding) in bindings.iter().enumerate() {
        if let Err(err) = binding.apply(instance) {
            debug!(position, error = %err, "relation binding failed");
            return Err(err);
        }
        trace!(position, "relation binding applied");
    }
    Ok(())
}
