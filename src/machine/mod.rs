//! The state machine base and the hooks concrete machines implement.
//!
//! # Key Concepts
//!
//! - **StateMachineBehavior**: Initial state and message factory per machine kind
//! - **StateMachine**: Guarded transitions, publishing one message per change
//! - **MachineOptions**: Label and diagnostic levels

mod base;
mod behavior;
mod error;
mod options;

pub use base::{StateMachine, TransitionOutcome};
pub use behavior::StateMachineBehavior;
pub use error::TransitionError;
pub use options::{MachineOptions, MachineOptionsBuilder, OptionsError, DEFAULT_LABEL};
