//! Statebus: guarded finite-state machines that announce their changes
//!
//! A [`StateMachine`] keeps a current and a previous state and enforces a
//! single way of changing them. Every accepted change is published as a
//! message on an injected [`MessageBus`], so other parts of an application
//! can react without the machine knowing about them.
//!
//! # Core Concepts
//!
//! - **FiniteState**: A named state tagged with a category
//! - **StateMachineBehavior**: Per-machine initial state and message factory
//! - **StateMachine**: The guarded transition algorithm
//! - **MessageBus**: Where state-changed messages go
//!
//! # Example
//!
//! ```rust
//! use statebus::core::{DynState, StateRef};
//! use statebus::finite_state;
//! use statebus::machine::{StateMachine, StateMachineBehavior, TransitionError};
//! use statebus::messaging::{LocalBus, StateChanged};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum Category {
//!     Movement,
//!     Combat,
//! }
//!
//! finite_state! {
//!     enum Movement { Idle, Walking }
//!     category: Category = Category::Movement
//! }
//!
//! finite_state! {
//!     enum Combat { Attacking }
//!     category: Category = Category::Combat
//! }
//!
//! struct Character {
//!     idle: StateRef<DynState<Category>>,
//! }
//!
//! impl StateMachineBehavior for Character {
//!     type State = DynState<Category>;
//!     type Message = StateChanged<DynState<Category>>;
//!
//!     fn initial_state(&self) -> StateRef<Self::State> {
//!         Arc::clone(&self.idle)
//!     }
//!
//!     fn create_state_changed_message(
//!         &self,
//!         previous: Option<StateRef<Self::State>>,
//!         next: StateRef<Self::State>,
//!     ) -> Self::Message {
//!         StateChanged::new(previous, next)
//!     }
//! }
//!
//! let idle: StateRef<DynState<Category>> = Arc::new(Movement::Idle);
//! let walking: StateRef<DynState<Category>> = Arc::new(Movement::Walking);
//! let attacking: StateRef<DynState<Category>> = Arc::new(Combat::Attacking);
//!
//! let bus: Arc<LocalBus<StateChanged<DynState<Category>>>> = Arc::new(LocalBus::new());
//! let mut machine = StateMachine::new(Character { idle }, bus);
//! machine.initialize().unwrap();
//!
//! machine.set_state(Arc::clone(&walking)).unwrap();
//! assert_eq!(machine.current_state().unwrap().name(), "Walking");
//!
//! let err = machine.set_state(attacking).unwrap_err();
//! assert!(matches!(err, TransitionError::InvalidTransition { .. }));
//! ```

pub mod core;
pub mod machine;
mod macros;
pub mod messaging;

// Re-export commonly used types
pub use self::core::{DynState, FiniteState, StateRef};
pub use machine::{StateMachine, StateMachineBehavior, TransitionError, TransitionOutcome};
pub use messaging::{LocalBus, MessageBus, StateChanged, StateChangedMessage};
