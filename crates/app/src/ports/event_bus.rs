//! Event bus port: synchronous publish/subscribe for house events.

use hearth_domain::event::{EventSource, HouseEvent};

use crate::event_bus::ListenerRegistry;

/// Publishes house events to the listeners registered for their source.
///
/// Implementors own both the registry and the listeners, so delivery can
/// hand each listener mutable access to the state it reacts on. Delivery
/// runs on the caller's stack and is finished when
/// [`publish`](Self::publish) returns.
pub trait EventPublisher<K: Copy + PartialEq> {
    /// Listener wiring used by [`publish`](Self::publish).
    fn registry(&self) -> &ListenerRegistry<K>;

    /// Hand `event` to a single listener. May publish follow-up events.
    fn deliver(&mut self, listener: K, event: &HouseEvent);

    /// Deliver `event` to every listener of `source`, in registration order.
    fn publish(&mut self, source: EventSource, event: HouseEvent) {
        for listener in self.registry().listeners_of(source) {
            self.deliver(listener, &event);
        }
    }
}
