//! Messages announcing state changes and the bus that carries them.
//!
//! The bus is a capability injected into each machine, so machines never
//! reach for process-wide state and can be tested in isolation.
//!
//! # Key Concepts
//!
//! - **MessageBus**: Synchronous, infallible `publish`
//! - **StateChangedMessage**: Any payload exposing the `(previous, next)` pair
//! - **StateChanged**: Ready-made payload for machines without a custom shape
//! - **LocalBus**: In-process bus delivering to subscribed handlers

mod bus;

pub use bus::{LocalBus, SubscriptionId};

use crate::core::{FiniteState, StateRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Destination for messages published by state machines.
///
/// Publishing is synchronous and always succeeds from the caller's point
/// of view.
pub trait MessageBus<M> {
    fn publish(&self, message: M);
}

/// A notification carrying the two states of a transition.
///
/// `previous_state` is `None` for the transition that establishes a
/// machine's initial state.
pub trait StateChangedMessage<S: ?Sized> {
    fn previous_state(&self) -> Option<&StateRef<S>>;

    fn next_state(&self) -> &StateRef<S>;
}

/// Default state-changed payload.
pub struct StateChanged<S: ?Sized> {
    /// Unique message identifier
    pub id: Uuid,
    /// State the machine left, if any
    pub previous: Option<StateRef<S>>,
    /// State the machine entered
    pub next: StateRef<S>,
    /// When the message was created
    pub occurred_at: DateTime<Utc>,
}

impl<S: FiniteState + ?Sized> StateChanged<S> {
    pub fn new(previous: Option<StateRef<S>>, next: StateRef<S>) -> Self {
        Self {
            id: Uuid::new_v4(),
            previous,
            next,
            occurred_at: Utc::now(),
        }
    }

    /// Serializable view of this message, with states reduced to their names.
    pub fn summary(&self) -> TransitionSummary {
        TransitionSummary {
            id: self.id,
            from: self.previous.as_ref().map(|s| s.name().to_string()),
            to: self.next.name().to_string(),
            occurred_at: self.occurred_at,
        }
    }
}

impl<S: ?Sized> Clone for StateChanged<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            previous: self.previous.clone(),
            next: Arc::clone(&self.next),
            occurred_at: self.occurred_at,
        }
    }
}

impl<S: FiniteState + ?Sized> fmt::Debug for StateChanged<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateChanged")
            .field("id", &self.id)
            .field("previous", &self.previous.as_ref().map(|s| s.name()))
            .field("next", &self.next.name())
            .field("occurred_at", &self.occurred_at)
            .finish()
    }
}

impl<S: ?Sized> StateChangedMessage<S> for StateChanged<S> {
    fn previous_state(&self) -> Option<&StateRef<S>> {
        self.previous.as_ref()
    }

    fn next_state(&self) -> &StateRef<S> {
        &self.next
    }
}

/// Name-only record of a transition, suitable for logs and export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionSummary {
    pub id: Uuid,
    pub from: Option<String>,
    pub to: String,
    pub occurred_at: DateTime<Utc>,
}

impl TransitionSummary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestCategory {
        Movement,
    }

    #[derive(Debug)]
    enum Movement {
        Idle,
        Walking,
    }

    impl FiniteState for Movement {
        type Category = TestCategory;

        fn category(&self) -> TestCategory {
            TestCategory::Movement
        }

        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Walking => "Walking",
            }
        }
    }

    #[test]
    fn state_changed_exposes_both_states() {
        let idle = Arc::new(Movement::Idle);
        let walking = Arc::new(Movement::Walking);

        let message = StateChanged::new(Some(Arc::clone(&idle)), Arc::clone(&walking));

        assert!(Arc::ptr_eq(message.previous_state().unwrap(), &idle));
        assert!(Arc::ptr_eq(message.next_state(), &walking));
    }

    #[test]
    fn initial_message_has_no_previous_state() {
        let message = StateChanged::new(None, Arc::new(Movement::Idle));
        assert!(message.previous_state().is_none());
        assert_eq!(message.next_state().name(), "Idle");
    }

    #[test]
    fn messages_get_distinct_ids() {
        let idle = Arc::new(Movement::Idle);
        let a = StateChanged::new(None, Arc::clone(&idle));
        let b = StateChanged::new(None, idle);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn clone_shares_state_instances() {
        let message = StateChanged::new(None, Arc::new(Movement::Walking));
        let cloned = message.clone();

        assert_eq!(message.id, cloned.id);
        assert!(Arc::ptr_eq(&message.next, &cloned.next));
    }

    #[test]
    fn summary_uses_state_names() {
        let message = StateChanged::new(
            Some(Arc::new(Movement::Idle)),
            Arc::new(Movement::Walking),
        );
        let summary = message.summary();

        assert_eq!(summary.id, message.id);
        assert_eq!(summary.from.as_deref(), Some("Idle"));
        assert_eq!(summary.to, "Walking");
    }

    #[test]
    fn summary_serializes_to_json() {
        let message = StateChanged::new(None, Arc::new(Movement::Idle));
        let summary = message.summary();

        let json = summary.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["from"], serde_json::Value::Null);
        assert_eq!(value["to"], "Idle");

        let back: TransitionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn debug_output_names_states() {
        let message = StateChanged::new(
            Some(Arc::new(Movement::Idle)),
            Arc::new(Movement::Walking),
        );
        let debug = format!("{:?}", message);
        assert!(debug.contains("Idle"));
        assert!(debug.contains("Walking"));
    }
}
