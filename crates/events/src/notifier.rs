//! Single-slot change notifier.
//!
//! A one-way observer hook: mutations on one side signal a dependent view on
//! the other without the mutating side knowing anything about that view. This
//! is not a pub/sub bus; the slot holds at most one subscriber and `notify`
//! is a no-op while the slot is empty.

use crate::event::Event;

/// Subscriber callback invoked with each event.
pub type Subscriber<E> = Box<dyn FnMut(&E)>;

/// One-directional notification hook with a single subscriber slot.
pub struct ChangeNotifier<E: Event> {
    subscriber: Option<Subscriber<E>>,
}

impl<E: Event> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the subscriber, replacing any previous one.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&E) + 'static) {
        self.subscriber = Some(Box::new(subscriber));
    }

    /// Empty the subscriber slot.
    pub fn clear_subscriber(&mut self) {
        self.subscriber = None;
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Invoke the subscriber if present; no-op otherwise.
    pub fn notify(&mut self, event: &E) {
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(event);
        }
    }
}

impl<E: Event> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self { subscriber: None }
    }
}

impl<E: Event> core::fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribed", &self.subscriber.is_some())
            .finish()
    }
}
