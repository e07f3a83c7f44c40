//! # Satchel
//!
//! A minimal shared-state container for Rust.
//!
//! Satchel keeps one application-defined state value behind a small set of
//! controlled mutation paths:
//!
//! ## Updates
//!
//! Named, synchronous mutation handlers declared at construction. Calling
//! [`Store::update`] routes through the matching handler and notifies every
//! registered observer with the applied name. [`Store::batch_update`] applies
//! a sequence of updates with a single notification at the end.
//!
//! ## Actions
//!
//! Named handlers that receive a handle to the store itself instead of the
//! bare state. Actions are the hook for asynchronous or externally driven
//! triggers: defer or fan out however you like, then land the result through
//! an ordinary update.
//!
//! ## Observers
//!
//! Plain callbacks, registered and deregistered by identity, invoked in
//! registration order after every applied update.
//!
//! Two variants are provided: [`Store`] with the full surface (actions,
//! batching, destroy) and [`BasicStore`] with direct updates only.

pub mod error;
pub mod store;

// Re-export main types for convenience
pub use error::StoreError;
pub use store::{
    BasicObserver, BasicStore, BasicStoreBuilder, Observer, Store, StoreBuilder, Update,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = Store::<i32, i32>::builder()
            .state(0)
            .update("add", |count, amount| *count += amount.unwrap_or(1))
            .build()
            .unwrap();
        store.update("add").unwrap();
        store.update_with("add", 4).unwrap();
        assert_eq!(store.get(), Some(5));
    }
}
