//! Observable wrapper around the presentation state.
//!
//! `FeedStore` is the State Publisher: it owns the single `FeedState`
//! instance for the session and a list of subscriber callbacks, and it
//! notifies every subscriber synchronously after each mutation. The store
//! is constructed once at the composition root and passed by reference to
//! whoever needs it. It is not `Send`: all mutation happens on the task
//! that owns it. No locks.

use postfeed_core::{FeedState, FetchOutcome};

type Subscriber = Box<dyn FnMut(&FeedState)>;

/// Owns the session's presentation state and its subscribers.
#[derive(Default)]
pub struct FeedStore {
    state: FeedState,
    subscribers: Vec<Subscriber>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for renderers.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Register a callback invoked after every state mutation with the
    /// post-transition state.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&FeedState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn begin_load(&mut self) {
        self.state.begin_load();
        self.notify();
    }

    pub fn finish(&mut self, outcome: FetchOutcome) {
        self.state.finish(outcome);
        self.notify();
    }

    /// Acknowledge the current error message.
    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
        self.notify();
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
