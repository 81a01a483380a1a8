//! Cross-surface refresh broadcast
//!
//! The only coupling between concurrently open surfaces: after a commit,
//! the editing surface publishes a refresh event and listening surfaces
//! re-issue their reads.

use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A session changed; list-displaying surfaces should reload
    RefreshPopup,
}

type Subscriber = Box<dyn Fn(Event) + Send + Sync>;

#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, f: F)
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        self.subscribers.write().push(Box::new(f));
    }

    /// Deliver an event to every subscriber, synchronously and in
    /// subscription order.
    pub fn publish(&self, event: Event) {
        tracing::debug!(?event, "Broadcasting");
        for subscriber in self.subscribers.read().iter() {
            subscriber(event);
        }
    }
}
