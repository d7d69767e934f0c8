//! Hooks a concrete state machine supplies to the shared transition logic.

use crate::core::{FiniteState, StateRef};

/// Behavior specific to one kind of state machine.
///
/// The base [`StateMachine`](super::StateMachine) owns the guarded
/// transition algorithm; implementors decide where the machine starts and
/// what message shape announces a change.
///
/// # Example
///
/// ```rust
/// use statebus::core::{DynState, StateRef};
/// use statebus::finite_state;
/// use statebus::machine::StateMachineBehavior;
/// use statebus::messaging::StateChanged;
/// use std::sync::Arc;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Category { Door }
///
/// finite_state! {
///     enum DoorState { Open, Closed }
///     category: Category = Category::Door
/// }
///
/// struct DoorBehavior {
///     closed: StateRef<DynState<Category>>,
/// }
///
/// impl StateMachineBehavior for DoorBehavior {
///     type State = DynState<Category>;
///     type Message = StateChanged<DynState<Category>>;
///
///     fn initial_state(&self) -> StateRef<Self::State> {
///         Arc::clone(&self.closed)
///     }
///
///     fn create_state_changed_message(
///         &self,
///         previous: Option<StateRef<Self::State>>,
///         next: StateRef<Self::State>,
///     ) -> Self::Message {
///         StateChanged::new(previous, next)
///     }
/// }
/// # let _ = DoorState::Open;
/// ```
pub trait StateMachineBehavior {
    /// State type held by the machine, often `DynState<Category>`.
    type State: FiniteState + ?Sized;

    /// Notification published on every accepted transition.
    type Message;

    /// State established by [`StateMachine::initialize`](super::StateMachine::initialize).
    fn initial_state(&self) -> StateRef<Self::State>;

    /// Build the notification for a transition from `previous` to `next`.
    fn create_state_changed_message(
        &self,
        previous: Option<StateRef<Self::State>>,
        next: StateRef<Self::State>,
    ) -> Self::Message;
}
