use std::sync::{Arc, RwLock};

use crate::error::StoreError;

use super::observers::{BasicObserver, ObserverSet};
use super::registry::UpdateRegistry;

/// Reduced state container: direct state updates and argumentless observer
/// notification, nothing else.
///
/// For hosts that only need the one mutation path. There are no actions, no
/// batching, and no teardown; observers learn that something changed, not
/// what.
///
/// # Examples
///
/// ```
/// use satchel::BasicStore;
///
/// let store = BasicStore::<i32>::builder()
///     .state(0)
///     .update("increment", |count, _| *count += 1)
///     .build()?;
///
/// store.update_state("increment");
/// assert_eq!(store.get(), 1);
/// # Ok::<(), satchel::StoreError>(())
/// ```
pub struct BasicStore<S, P = ()> {
    inner: Arc<RwLock<Inner<S, P>>>,
}

struct Inner<S, P> {
    state: S,
    state_updates: UpdateRegistry<S, P>,
    observers: ObserverSet<dyn Fn() + Send + Sync>,
}

impl<S, P> BasicStore<S, P> {
    /// Start building a store. An initial state and at least one update
    /// handler are required; see [`BasicStoreBuilder::build`].
    pub fn builder() -> BasicStoreBuilder<S, P> {
        BasicStoreBuilder::new()
    }

    /// Apply the named update with no payload, then notify observers.
    ///
    /// Unknown names are ignored and notify nobody.
    pub fn update_state(&self, name: &str) {
        self.apply(name, None);
    }

    /// Apply the named update with a payload, then notify observers.
    pub fn update_state_with(&self, name: &str, payload: P) {
        self.apply(name, Some(payload));
    }

    fn apply(&self, name: &str, payload: Option<P>) {
        let observers = {
            let mut guard = self.inner.write().unwrap();
            let inner = &mut *guard;
            match inner.state_updates.get(name) {
                Some((_, handler)) => {
                    handler(&mut inner.state, payload);
                    Some(inner.observers.snapshot())
                }
                None => None,
            }
        };

        if let Some(observers) = observers {
            for observer in &observers {
                observer();
            }
        }
    }

    /// Register an observer callback, keeping registration order.
    /// Already-registered callbacks (same `Arc`) are left alone.
    pub fn register(&self, observer: &BasicObserver) {
        self.inner.write().unwrap().observers.register(observer);
    }

    /// Remove a previously registered observer. Absent callbacks are
    /// ignored.
    pub fn deregister(&self, observer: &BasicObserver) {
        self.inner.write().unwrap().observers.deregister(observer);
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.read().unwrap().observers.len()
    }

    /// Clone out the current state.
    pub fn get(&self) -> S
    where
        S: Clone,
    {
        self.read(S::clone)
    }

    /// Read the state through a closure without cloning.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.read().unwrap().state)
    }
}

impl<S, P> Clone for BasicStore<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Builder for [`BasicStore`]. The initial state and at least one update
/// handler are mandatory.
pub struct BasicStoreBuilder<S, P = ()> {
    state: Option<S>,
    state_updates: UpdateRegistry<S, P>,
}

impl<S, P> BasicStoreBuilder<S, P> {
    fn new() -> Self {
        Self {
            state: None,
            state_updates: UpdateRegistry::new(),
        }
    }

    /// Set the initial state.
    pub fn state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Register an update handler under `name`. Re-using a name replaces the
    /// earlier handler.
    pub fn update(
        mut self,
        name: &'static str,
        handler: impl Fn(&mut S, Option<P>) + Send + Sync + 'static,
    ) -> Self {
        self.state_updates.insert(name, handler);
        self
    }

    /// Finalize the store.
    ///
    /// Fails with [`StoreError::MissingState`] when no initial state was set,
    /// then [`StoreError::MissingUpdates`] when no update handler was
    /// registered.
    pub fn build(self) -> Result<BasicStore<S, P>, StoreError> {
        let state = self.state.ok_or(StoreError::MissingState)?;
        if self.state_updates.is_empty() {
            return Err(StoreError::MissingUpdates);
        }

        Ok(BasicStore {
            inner: Arc::new(RwLock::new(Inner {
                state,
                state_updates: self.state_updates,
                observers: ObserverSet::new(),
            })),
        })
    }
}
