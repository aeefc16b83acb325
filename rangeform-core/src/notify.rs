//! Value-changed notification.
//!
//! Subscribers are plain callbacks run synchronously on the thread that
//! made the edit. `subscribe_channel` bridges into an mpsc channel for
//! hosts that drain events in their own loop.

use std::sync::mpsc::Sender;

/// Emitted once per user edit of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChanged {
    pub name: String,
    pub value: f64,
}

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ValueChanged)>;

/// Ordered list of value-changed subscribers.
#[derive(Default)]
pub struct Notifier {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ValueChanged) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Forward every event into `tx`. Sends to a dropped receiver are ignored.
    pub fn subscribe_channel(&mut self, tx: Sender<ValueChanged>) -> SubscriptionId {
        self.subscribe(move |event| {
            let _ = tx.send(event.clone());
        })
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Call every subscriber in registration order.
    pub fn emit(&mut self, event: &ValueChanged) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
