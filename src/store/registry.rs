use std::collections::HashMap;
use std::sync::Arc;

use super::store::Store;

/// A named mutation handler. Receives exclusive access to the state and the
/// payload passed at the call site, if any.
pub(crate) type UpdateFn<S, P> = Box<dyn Fn(&mut S, Option<P>) + Send + Sync>;

/// A named action handler. Receives a handle to the owning store rather than
/// the bare state, so it can trigger updates itself, immediately or later.
pub(crate) type ActionFn<S, P> = Arc<dyn Fn(&Store<S, P>, Option<P>) + Send + Sync>;

/// Dispatch table mapping update names to their handlers.
///
/// Routing is permissive: unknown names resolve to `None` and the caller
/// takes its no-op branch.
pub(crate) struct UpdateRegistry<S, P> {
    handlers: HashMap<&'static str, UpdateFn<S, P>>,
}

impl<S, P> UpdateRegistry<S, P> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under `name`. A repeated name replaces the earlier
    /// handler.
    pub(crate) fn insert(
        &mut self,
        name: &'static str,
        handler: impl Fn(&mut S, Option<P>) + Send + Sync + 'static,
    ) {
        self.handlers.insert(name, Box::new(handler));
    }

    /// Look up a handler, returning the registry's own key alongside it so
    /// notifications can carry a `'static` name.
    pub(crate) fn get(&self, name: &str) -> Option<(&'static str, &UpdateFn<S, P>)> {
        self.handlers.get_key_value(name).map(|(key, handler)| (*key, handler))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Dispatch table mapping action names to their handlers.
///
/// Handlers are `Arc`ed so a lookup can be cloned out and invoked after the
/// store's internal lock is released.
pub(crate) struct ActionRegistry<S, P> {
    handlers: HashMap<&'static str, ActionFn<S, P>>,
}

impl<S, P> ActionRegistry<S, P> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under `name`. A repeated name replaces the earlier
    /// handler.
    pub(crate) fn insert(
        &mut self,
        name: &'static str,
        handler: impl Fn(&Store<S, P>, Option<P>) + Send + Sync + 'static,
    ) {
        self.handlers.insert(name, Arc::new(handler));
    }

    pub(crate) fn get(&self, name: &str) -> Option<ActionFn<S, P>> {
        self.handlers.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_the_registry_key() {
        let mut registry: UpdateRegistry<i32, ()> = UpdateRegistry::new();
        registry.insert("increment", |count, _| *count += 1);

        let name = String::from("increment");
        let (key, handler) = registry.get(&name).expect("registered handler");
        assert_eq!(key, "increment");

        let mut count = 0;
        handler(&mut count, None);
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let mut registry: UpdateRegistry<i32, ()> = UpdateRegistry::new();
        registry.insert("increment", |count, _| *count += 1);

        assert!(registry.get("decrement").is_none());
    }

    #[test]
    fn repeated_names_replace_the_earlier_handler() {
        let mut registry: UpdateRegistry<i32, ()> = UpdateRegistry::new();
        registry.insert("step", |count, _| *count += 1);
        registry.insert("step", |count, _| *count += 10);

        let mut count = 0;
        let (_, handler) = registry.get("step").expect("registered handler");
        handler(&mut count, None);
        assert_eq!(count, 10);
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry: UpdateRegistry<i32, ()> = UpdateRegistry::new();
        assert!(registry.is_empty());
    }
}
