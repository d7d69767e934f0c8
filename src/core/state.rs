//! Core `FiniteState` trait for state machine states.
//!
//! States are owned outside the machine. A machine only keeps shared
//! handles ([`StateRef`]) to long-lived state instances, typically one
//! instance per logical state.

use std::fmt::Debug;
use std::sync::Arc;

/// Shared handle to an externally owned state instance.
pub type StateRef<S> = Arc<S>;

/// Trait object form of a state, used when a machine mixes several state
/// types that share one category type.
pub type DynState<C> = dyn FiniteState<Category = C>;

/// Trait for state machine states.
///
/// Every state belongs to exactly one category. Once a machine holds a
/// state, it only accepts targets of the same category.
///
/// # Example
///
/// ```rust
/// use statebus::core::FiniteState;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Category {
///     Movement,
///     Combat,
/// }
///
/// #[derive(Debug)]
/// enum Locomotion {
///     Idle,
///     Walking,
/// }
///
/// impl FiniteState for Locomotion {
///     type Category = Category;
///
///     fn category(&self) -> Category {
///         Category::Movement
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Walking => "Walking",
///         }
///     }
/// }
///
/// assert_eq!(Locomotion::Walking.category(), Category::Movement);
/// assert_eq!(Locomotion::Idle.name(), "Idle");
/// ```
pub trait FiniteState: Debug + Send + Sync {
    /// Tag separating groups of mutually incompatible states.
    type Category: Clone + PartialEq + Debug + Send + Sync;

    /// The category this state belongs to.
    fn category(&self) -> Self::Category;

    /// Display name used in diagnostics and errors.
    fn name(&self) -> &str;
}

/// Check whether two handles point at the same state instance.
///
/// This is an identity check, not a value comparison: two separately
/// allocated states with equal contents are different states.
pub fn same_state<S: ?Sized>(a: &StateRef<S>, b: &StateRef<S>) -> bool {
    Arc::ptr_eq(a, b)
}
