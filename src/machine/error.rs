//! Transition errors.

use thiserror::Error;

/// Errors that can occur when changing a machine's state.
///
/// All of these point at a defect in the calling code rather than a
/// condition the machine can recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Next state is null.")]
    NullNextState,

    #[error("{label} has not been initialized. Call initialize() before set_state()")]
    NotInitialized { label: String },

    #[error("{label} was already initialized and is in \"{state}\" state.")]
    AlreadyInitialized { label: String, state: String },

    #[error("Invalid state transition from \"{from}\" to \"{to}\".")]
    InvalidTransition {
        from: String,
        to: String,
        from_category: String,
        to_category: String,
    },
}
