//! Shared-state containers with named update dispatch.
//!
//! Two variants of one abstraction:
//! - [`Store`]: updates, batched updates, actions, observers, and an explicit
//!   destroy lifecycle.
//! - [`BasicStore`]: direct state updates and observer notification only.

mod basic;
mod observers;
mod registry;
mod store;

pub use basic::{BasicStore, BasicStoreBuilder};
pub use observers::{BasicObserver, Observer};
pub use store::{Store, StoreBuilder, Update};
