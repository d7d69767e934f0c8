//! Core state types.
//!
//! This module contains the pieces every machine is built from:
//! - The `FiniteState` trait describing a categorized state
//! - `StateRef`, the shared handle machines hold on to
//! - `same_state`, the identity check used to detect redundant transitions

mod state;

pub use state::{same_state, DynState, FiniteState, StateRef};
