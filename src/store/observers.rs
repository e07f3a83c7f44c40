use std::sync::Arc;

/// Observer callback for [`Store`](super::Store).
///
/// Receives the names of the updates applied by the notifying call: a single
/// name for `update`, the full ordered list for `batch_update`.
pub type Observer = Arc<dyn Fn(&[&'static str]) + Send + Sync>;

/// Observer callback for [`BasicStore`](super::BasicStore), notified without
/// arguments.
pub type BasicObserver = Arc<dyn Fn() + Send + Sync>;

/// Ordered set of observer callbacks.
///
/// Identity is the `Arc` allocation (`Arc::ptr_eq`): clones of one `Arc` are
/// the same observer, while separately built closures stay distinct even when
/// textually identical. Insertion order is preserved and duplicates are
/// refused.
pub(crate) struct ObserverSet<F: ?Sized> {
    observers: Vec<Arc<F>>,
}

impl<F: ?Sized> ObserverSet<F> {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add `observer` unless it is already present.
    pub(crate) fn register(&mut self, observer: &Arc<F>) {
        if !self.observers.iter().any(|o| Arc::ptr_eq(o, observer)) {
            self.observers.push(Arc::clone(observer));
        }
    }

    /// Remove `observer` if present. Absent observers are ignored.
    pub(crate) fn deregister(&mut self, observer: &Arc<F>) {
        if let Some(index) = self.observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            self.observers.remove(index);
        }
    }

    /// Clone the current callbacks for iteration outside any lock.
    ///
    /// Fan-out runs against the set as it stood when the update applied; a
    /// callback that registers or deregisters observers mid-notification must
    /// not perturb the in-flight iteration.
    pub(crate) fn snapshot(&self) -> Vec<Arc<F>> {
        self.observers.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}
