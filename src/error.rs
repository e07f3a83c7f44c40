//! Error types for store construction and use.

use thiserror::Error;

/// Errors raised by store construction and operations.
///
/// All errors are raised synchronously at the point of misuse and are never
/// recovered internally. A failed call leaves state, handlers, and observers
/// untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The builder was finalized without an initial state.
    #[error("no initial state provided")]
    MissingState,

    /// The builder was finalized without any update handlers.
    #[error("no update handlers provided")]
    MissingUpdates,

    /// An action was dispatched on a store built without action handlers.
    #[error("no action handlers registered")]
    NoActionHandlers,

    /// An update was requested after the store was destroyed.
    #[error("update handlers unavailable, store has been destroyed")]
    UpdatesDestroyed,

    /// An action was dispatched after the store was destroyed.
    #[error("action handlers unavailable, store has been destroyed")]
    ActionsDestroyed,

    /// An observer was registered or deregistered after the store was
    /// destroyed.
    #[error("observer registry unavailable, store has been destroyed")]
    ObserversDestroyed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_facility() {
        assert_eq!(StoreError::MissingState.to_string(), "no initial state provided");
        assert_eq!(
            StoreError::MissingUpdates.to_string(),
            "no update handlers provided"
        );
        assert_eq!(
            StoreError::NoActionHandlers.to_string(),
            "no action handlers registered"
        );
    }

    #[test]
    fn destroyed_messages_are_distinct_per_facility() {
        let messages = [
            StoreError::UpdatesDestroyed.to_string(),
            StoreError::ActionsDestroyed.to_string(),
            StoreError::ObserversDestroyed.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }
}
