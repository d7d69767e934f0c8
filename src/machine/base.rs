//! State machine base holding the guarded transition algorithm.

use crate::core::{same_state, FiniteState, StateRef};
use crate::machine::behavior::StateMachineBehavior;
use crate::machine::error::TransitionError;
use crate::machine::options::MachineOptions;
use crate::messaging::MessageBus;
use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

/// Result of a call to [`StateMachine::set_state`] that did not fail.
pub enum TransitionOutcome<S: ?Sized> {
    /// The machine moved to `next` and a notification was published
    Changed {
        previous: Option<StateRef<S>>,
        next: StateRef<S>,
    },

    /// The target was already the current state; nothing happened
    Unchanged,
}

impl<S: ?Sized> TransitionOutcome<S> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

impl<S: FiniteState + ?Sized> fmt::Debug for TransitionOutcome<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed { previous, next } => f
                .debug_struct("Changed")
                .field("previous", &previous.as_ref().map(|s| s.name()))
                .field("next", &next.name())
                .finish(),
            Self::Unchanged => f.write_str("Unchanged"),
        }
    }
}

/// Finite-state machine base.
///
/// Keeps the current and previous state and enforces how state changes
/// happen:
/// - a target must be present
/// - re-entering the current state is skipped with a warning
/// - once a state is set, targets must share its category
/// - every accepted change publishes exactly one message on the bus
///
/// Construction is two-phase: create the machine, then call
/// [`initialize`](Self::initialize) before any [`set_state`](Self::set_state).
///
/// "Same state" is instance identity (`Arc::ptr_eq`); category
/// compatibility is `PartialEq` on the category tag.
///
/// Concrete machines usually keep a `StateMachine` in a private field and
/// expose domain operations that call `set_state`.
pub struct StateMachine<B: StateMachineBehavior> {
    behavior: B,
    bus: Arc<dyn MessageBus<B::Message>>,
    options: MachineOptions,
    current: Option<StateRef<B::State>>,
    previous: Option<StateRef<B::State>>,
}

impl<B: StateMachineBehavior> StateMachine<B> {
    /// Create an uninitialized machine publishing on `bus`.
    pub fn new(behavior: B, bus: Arc<dyn MessageBus<B::Message>>) -> Self {
        Self::with_options(behavior, bus, MachineOptions::default())
    }

    pub fn with_options(
        behavior: B,
        bus: Arc<dyn MessageBus<B::Message>>,
        options: MachineOptions,
    ) -> Self {
        Self {
            behavior,
            bus,
            options,
            current: None,
            previous: None,
        }
    }

    /// The active state, `None` until initialized.
    pub fn current_state(&self) -> Option<&StateRef<B::State>> {
        self.current.as_ref()
    }

    /// The state active before the last accepted transition.
    pub fn previous_state(&self) -> Option<&StateRef<B::State>> {
        self.previous.as_ref()
    }

    /// Category every future target must belong to.
    pub fn category(&self) -> Option<<B::State as FiniteState>::Category> {
        self.current.as_ref().map(|state| state.category())
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Establish the initial state supplied by the behavior.
    ///
    /// Publishes one message with no previous state. Fails if the machine
    /// was already initialized.
    pub fn initialize(&mut self) -> Result<TransitionOutcome<B::State>, TransitionError> {
        if let Some(current) = &self.current {
            return Err(TransitionError::AlreadyInitialized {
                label: self.options.label.clone(),
                state: current.name().to_string(),
            });
        }

        let initial = self.behavior.initial_state();
        debug!(
            "{} initializing in \"{}\" state ({:?})",
            self.options.label,
            initial.name(),
            initial.category()
        );
        Ok(self.commit(initial))
    }

    /// Move to `next`, publishing a state-changed message.
    ///
    /// Checks run in order: missing target, uninitialized machine,
    /// redundant target, category mismatch. A failed check leaves the
    /// machine untouched.
    pub fn set_state(
        &mut self,
        next: impl Into<Option<StateRef<B::State>>>,
    ) -> Result<TransitionOutcome<B::State>, TransitionError> {
        let next = next.into().ok_or(TransitionError::NullNextState)?;

        let Some(current) = &self.current else {
            return Err(TransitionError::NotInitialized {
                label: self.options.label.clone(),
            });
        };

        if same_state(current, &next) {
            if self.options.warn_on_redundant {
                warn!(
                    "{} is already in \"{}\" state.",
                    self.options.label,
                    next.name()
                );
            } else {
                debug!(
                    "{} is already in \"{}\" state.",
                    self.options.label,
                    next.name()
                );
            }
            return Ok(TransitionOutcome::Unchanged);
        }

        let (from_category, to_category) = (current.category(), next.category());
        if from_category != to_category {
            return Err(TransitionError::InvalidTransition {
                from: current.name().to_string(),
                to: next.name().to_string(),
                from_category: format!("{:?}", from_category),
                to_category: format!("{:?}", to_category),
            });
        }

        Ok(self.commit(next))
    }

    // Publishes before either field changes. A subscriber that unwinds
    // leaves the machine exactly as it was before the call.
    fn commit(&mut self, next: StateRef<B::State>) -> TransitionOutcome<B::State> {
        let previous = self.current.clone();

        let message = self
            .behavior
            .create_state_changed_message(previous.clone(), Arc::clone(&next));
        self.bus.publish(message);

        self.previous = previous.clone();
        self.current = Some(Arc::clone(&next));

        info!("{} is now in \"{}\" state.", self.options.label, next.name());

        TransitionOutcome::Changed { previous, next }
    }
}

impl<B: StateMachineBehavior> fmt::Debug for StateMachine<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("label", &self.options.label)
            .field("current", &self.current.as_ref().map(|s| s.name()))
            .field("previous", &self.previous.as_ref().map(|s| s.name()))
            .finish()
    }
}
