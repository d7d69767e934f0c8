//! In-process synchronous message bus.

use super::MessageBus;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Type alias for subscriber callbacks
type Handler<M> = Arc<dyn Fn(&M) + Send + Sync>;

/// Handle returned by [`LocalBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Bus that delivers each published message to every subscriber, in
/// subscription order, before `publish` returns.
///
/// Handlers may subscribe, unsubscribe or publish from inside a callback.
/// Changes to the subscriber list take effect from the next publish.
///
/// # Example
///
/// ```rust
/// use statebus::messaging::{LocalBus, MessageBus};
/// use std::sync::{Arc, Mutex};
///
/// let bus = LocalBus::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// bus.subscribe(move |msg: &String| sink.lock().unwrap().push(msg.clone()));
///
/// bus.publish("hello".to_string());
/// assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
/// ```
pub struct LocalBus<M> {
    subscribers: RwLock<Vec<(SubscriptionId, Handler<M>)>>,
}

impl<M> LocalBus<M> {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Register a handler for every future message.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&M) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.push((id, Arc::new(handler)));
        debug!("Subscriber {} added ({} total)", id, subscribers.len());
        id
    }

    /// Remove a handler. Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        let removed = subscribers.len() != before;
        if removed {
            debug!("Subscriber {} removed ({} left)", id, subscribers.len());
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // The lock is released before handlers run so they can touch the bus.
    fn snapshot(&self) -> Vec<Handler<M>> {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect()
    }
}

impl<M> Default for LocalBus<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for LocalBus<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl<M> MessageBus<M> for LocalBus<M> {
    fn publish(&self, message: M) {
        for handler in self.snapshot() {
            handler(&message);
        }
    }
}
