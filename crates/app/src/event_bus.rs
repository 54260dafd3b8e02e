//! In-process listener registry.
//!
//! Wiring is explicit: the composition root registers each listener for
//! each source it cares about. Nothing is discovered at runtime and there
//! is no global instance.

use hearth_domain::event::EventSource;

/// Ordered `(source, listener)` routes.
///
/// `K` is a small copyable tag naming a listener; the owner of the registry
/// maps tags to the actual components in
/// [`EventPublisher::deliver`](crate::ports::EventPublisher::deliver).
#[derive(Debug, Clone)]
pub struct ListenerRegistry<K> {
    routes: Vec<(EventSource, K)>,
}

impl<K> Default for ListenerRegistry<K> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<K: Copy + PartialEq> ListenerRegistry<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` on `source`. Returns `false` if the route
    /// already existed; the first registration keeps its position.
    pub fn register(&mut self, source: EventSource, listener: K) -> bool {
        if self
            .routes
            .iter()
            .any(|(s, l)| *s == source && *l == listener)
        {
            return false;
        }
        self.routes.push((source, listener));
        true
    }

    /// Listeners of `source` in registration order.
    ///
    /// Returns a snapshot so a listener can publish while being notified.
    #[must_use]
    pub fn listeners_of(&self, source: EventSource) -> Vec<K> {
        self.routes
            .iter()
            .filter(|(s, _)| *s == source)
            .map(|(_, l)| *l)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::EventPublisher;
    use hearth_domain::event::HouseEvent;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tag {
        First,
        Second,
        Relay,
    }

    #[derive(Default)]
    struct Recorder {
        registry: ListenerRegistry<Tag>,
        received: Vec<(Tag, HouseEvent)>,
    }

    impl EventPublisher<Tag> for Recorder {
        fn registry(&self) -> &ListenerRegistry<Tag> {
            &self.registry
        }

        fn deliver(&mut self, listener: Tag, event: &HouseEvent) {
            self.received.push((listener, *event));
            if listener == Tag::Relay && *event == HouseEvent::RoomsChanged {
                self.publish(
                    EventSource::Security,
                    HouseEvent::AwayModeChanged { enabled: true },
                );
            }
        }
    }

    #[test]
    fn should_list_listeners_in_registration_order() {
        let mut registry = ListenerRegistry::new();
        registry.register(EventSource::Clock, Tag::Second);
        registry.register(EventSource::Clock, Tag::First);
        registry.register(EventSource::Security, Tag::First);

        assert_eq!(
            registry.listeners_of(EventSource::Clock),
            vec![Tag::Second, Tag::First]
        );
        assert_eq!(registry.listeners_of(EventSource::Security), vec![Tag::First]);
        assert!(registry.listeners_of(EventSource::HouseLayout).is_empty());
    }

    #[test]
    fn should_ignore_duplicate_registration() {
        let mut registry = ListenerRegistry::new();
        assert!(registry.register(EventSource::Clock, Tag::First));
        assert!(registry.register(EventSource::Clock, Tag::Second));
        assert!(!registry.register(EventSource::Clock, Tag::First));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.listeners_of(EventSource::Clock),
            vec![Tag::First, Tag::Second]
        );
    }

    #[test]
    fn should_deliver_only_to_listeners_of_the_source() {
        let mut recorder = Recorder::default();
        recorder.registry.register(EventSource::Clock, Tag::First);
        recorder.registry.register(EventSource::Security, Tag::Second);

        recorder.publish(EventSource::Security, HouseEvent::AwayModeChanged { enabled: false });

        assert_eq!(
            recorder.received,
            vec![(Tag::Second, HouseEvent::AwayModeChanged { enabled: false })]
        );
    }

    #[test]
    fn should_finish_nested_publication_before_next_listener() {
        let mut recorder = Recorder::default();
        recorder.registry.register(EventSource::HouseLayout, Tag::Relay);
        recorder.registry.register(EventSource::HouseLayout, Tag::Second);
        recorder.registry.register(EventSource::Security, Tag::First);

        recorder.publish(EventSource::HouseLayout, HouseEvent::RoomsChanged);

        assert_eq!(
            recorder.received,
            vec![
                (Tag::Relay, HouseEvent::RoomsChanged),
                (Tag::First, HouseEvent::AwayModeChanged { enabled: true }),
                (Tag::Second, HouseEvent::RoomsChanged),
            ]
        );
    }

    #[test]
    fn should_do_nothing_without_listeners() {
        let mut recorder = Recorder::default();
        assert!(recorder.registry().is_empty());
        recorder.publish(EventSource::Clock, HouseEvent::RoomsChanged);
        assert!(recorder.received.is_empty());
    }
}
