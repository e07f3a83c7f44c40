use std::sync::{Arc, RwLock};

use crate::error::StoreError;

use super::observers::{Observer, ObserverSet};
use super::registry::{ActionRegistry, UpdateRegistry};

/// One entry in a [`Store::batch_update`] call: an update name plus an
/// optional payload.
pub struct Update<P> {
    name: &'static str,
    payload: Option<P>,
}

impl<P> Update<P> {
    /// An update with no payload.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
        }
    }

    /// An update carrying a payload.
    pub fn with_payload(name: &'static str, payload: P) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Shared-state container with named update handlers, optional action
/// handlers, and observer notification.
///
/// All mutation is routed through the handlers declared at construction;
/// outside code only ever sees the state through [`get`](Store::get) and
/// [`read`](Store::read). Cloning a `Store` produces another handle onto the
/// same instance, which is how action handlers hold on to the store for
/// deferred work.
///
/// # Examples
///
/// ```
/// use satchel::Store;
///
/// let store = Store::<i32, i32>::builder()
///     .state(0)
///     .update("increment", |count, _| *count += 1)
///     .update("increment_by", |count, amount| *count += amount.unwrap_or(0))
///     .build()?;
///
/// store.update("increment")?;
/// store.update_with("increment_by", 4)?;
/// assert_eq!(store.get(), Some(5));
/// # Ok::<(), satchel::StoreError>(())
/// ```
pub struct Store<S, P = ()> {
    inner: Arc<RwLock<Lifecycle<S, P>>>,
}

// Explicit lifecycle: every operation checks this first, so a destroyed
// store fails fast instead of trailing off into absent internals.
enum Lifecycle<S, P> {
    Active(Active<S, P>),
    Destroyed,
}

struct Active<S, P> {
    state: S,
    updates: UpdateRegistry<S, P>,
    actions: Option<ActionRegistry<S, P>>,
    observers: ObserverSet<dyn Fn(&[&'static str]) + Send + Sync>,
}

impl<S, P> Store<S, P> {
    /// Start building a store. An initial state and at least one update
    /// handler are required; see [`StoreBuilder::build`].
    pub fn builder() -> StoreBuilder<S, P> {
        StoreBuilder::new()
    }

    /// Apply the named update with no payload, then notify observers with the
    /// applied name.
    ///
    /// Unknown names are ignored and notify nobody.
    pub fn update(&self, name: &str) -> Result<(), StoreError> {
        self.apply(name, None)
    }

    /// Apply the named update with a payload, then notify observers with the
    /// applied name.
    pub fn update_with(&self, name: &str, payload: P) -> Result<(), StoreError> {
        self.apply(name, Some(payload))
    }

    fn apply(&self, name: &str, payload: Option<P>) -> Result<(), StoreError> {
        let notification = {
            let mut guard = self.inner.write().unwrap();
            let active = match &mut *guard {
                Lifecycle::Active(active) => active,
                Lifecycle::Destroyed => return Err(StoreError::UpdatesDestroyed),
            };

            match active.updates.get(name) {
                Some((key, handler)) => {
                    handler(&mut active.state, payload);
                    Some((key, active.observers.snapshot()))
                }
                None => None,
            }
        };

        if let Some((applied, observers)) = notification {
            notify(&observers, &[applied]);
        }
        Ok(())
    }

    /// Apply a sequence of updates in order against the shared state, then
    /// notify observers exactly once with every name that dispatched.
    ///
    /// Handlers mutate in place, so later entries see the mutations of
    /// earlier ones. Entries whose name has no handler are skipped and
    /// excluded from the notification; a batch in which nothing dispatched
    /// notifies nobody.
    pub fn batch_update<I>(&self, updates: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = Update<P>>,
    {
        let notification = {
            let mut guard = self.inner.write().unwrap();
            let active = match &mut *guard {
                Lifecycle::Active(active) => active,
                Lifecycle::Destroyed => return Err(StoreError::UpdatesDestroyed),
            };

            let mut applied = Vec::new();
            for update in updates {
                if let Some((key, handler)) = active.updates.get(update.name) {
                    handler(&mut active.state, update.payload);
                    applied.push(key);
                }
            }

            if applied.is_empty() {
                None
            } else {
                Some((applied, active.observers.snapshot()))
            }
        };

        if let Some((applied, observers)) = notification {
            notify(&observers, &applied);
        }
        Ok(())
    }

    /// Invoke the named action handler with a handle to this store and no
    /// payload.
    ///
    /// Actions are the indirection for asynchronous or externally driven
    /// triggers: a handler may call [`update`](Store::update) immediately, or
    /// clone the handle into deferred work and land the result later. The
    /// store imposes no timing on whatever the handler schedules. Unknown
    /// names are ignored.
    pub fn dispatch_action(&self, name: &str) -> Result<(), StoreError> {
        self.dispatch(name, None)
    }

    /// Invoke the named action handler with a handle to this store and a
    /// payload.
    pub fn dispatch_action_with(&self, name: &str, payload: P) -> Result<(), StoreError> {
        self.dispatch(name, Some(payload))
    }

    fn dispatch(&self, name: &str, payload: Option<P>) -> Result<(), StoreError> {
        let handler = {
            let guard = self.inner.read().unwrap();
            let active = match &*guard {
                Lifecycle::Active(active) => active,
                Lifecycle::Destroyed => return Err(StoreError::ActionsDestroyed),
            };

            match &active.actions {
                Some(actions) => actions.get(name),
                None => return Err(StoreError::NoActionHandlers),
            }
        };

        // Invoked with the lock released so the handler can re-enter the
        // store synchronously.
        if let Some(handler) = handler {
            handler(self, payload);
        }
        Ok(())
    }

    /// Register an observer callback, keeping registration order.
    ///
    /// Registration is idempotent: a callback already present (same `Arc`)
    /// is left alone.
    pub fn register(&self, observer: &Observer) -> Result<(), StoreError> {
        match &mut *self.inner.write().unwrap() {
            Lifecycle::Active(active) => {
                active.observers.register(observer);
                Ok(())
            }
            Lifecycle::Destroyed => Err(StoreError::ObserversDestroyed),
        }
    }

    /// Remove a previously registered observer. Absent callbacks are
    /// ignored.
    pub fn deregister(&self, observer: &Observer) -> Result<(), StoreError> {
        match &mut *self.inner.write().unwrap() {
            Lifecycle::Active(active) => {
                active.observers.deregister(observer);
                Ok(())
            }
            Lifecycle::Destroyed => Err(StoreError::ObserversDestroyed),
        }
    }

    /// Number of registered observers, or `None` once destroyed.
    pub fn observer_count(&self) -> Option<usize> {
        match &*self.inner.read().unwrap() {
            Lifecycle::Active(active) => Some(active.observers.len()),
            Lifecycle::Destroyed => None,
        }
    }

    /// Clone out the current state, or `None` once destroyed.
    pub fn get(&self) -> Option<S>
    where
        S: Clone,
    {
        self.read(S::clone)
    }

    /// Read the state through a closure without cloning, or `None` once
    /// destroyed.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        match &*self.inner.read().unwrap() {
            Lifecycle::Active(active) => Some(f(&active.state)),
            Lifecycle::Destroyed => None,
        }
    }

    /// Tear the store down permanently.
    ///
    /// State, update handlers, action handlers, and observers are all
    /// dropped. Every subsequent operation fails, and [`get`](Store::get) /
    /// [`read`](Store::read) return `None`. There is no way back; construct
    /// a fresh store to resume.
    pub fn destroy(&self) {
        *self.inner.write().unwrap() = Lifecycle::Destroyed;
    }
}

impl<S, P> Clone for Store<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Fan a notification out to a snapshot of observers, in registration order.
fn notify(observers: &[Observer], applied: &[&'static str]) {
    for observer in observers {
        observer(applied);
    }
}

/// Builder for [`Store`]. The initial state and at least one update handler
/// are mandatory; action handlers are optional.
pub struct StoreBuilder<S, P = ()> {
    state: Option<S>,
    updates: UpdateRegistry<S, P>,
    actions: Option<ActionRegistry<S, P>>,
}

impl<S, P> StoreBuilder<S, P> {
    fn new() -> Self {
        Self {
            state: None,
            updates: UpdateRegistry::new(),
            actions: None,
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
        self.updates.insert(name, handler);
        self
    }

    /// Register an action handler under `name`. The first call materializes
    /// the action registry; without one, [`Store::dispatch_action`] fails.
    pub fn action(
        mut self,
        name: &'static str,
        handler: impl Fn(&Store<S, P>, Option<P>) + Send + Sync + 'static,
    ) -> Self {
        self.actions
            .get_or_insert_with(ActionRegistry::new)
            .insert(name, handler);
        self
    }

    /// Finalize the store.
    ///
    /// Fails with [`StoreError::MissingState`] when no initial state was set,
    /// then [`StoreError::MissingUpdates`] when no update handler was
    /// registered.
    pub fn build(self) -> Result<Store<S, P>, StoreError> {
        let state = self.state.ok_or(StoreError::MissingState)?;
        if self.updates.is_empty() {
            return Err(StoreError::MissingUpdates);
        }

        Ok(Store {
            inner: Arc::new(RwLock::new(Lifecycle::Active(Active {
                state,
                updates: self.updates,
                actions: self.actions,
                observers: ObserverSet::new(),
            }))),
        })
    }
}
