//! Completion events delivered by the host environment.
//!
//! A [`TransitionEndEvent`] is the record of one style property finishing its
//! transition on one element. The host adapter builds these from whichever
//! platform channel actually fired (standard or vendor-prefixed) and delivers
//! them to [`TransitionWatcher::deliver`](crate::watcher::TransitionWatcher::deliver);
//! the core never inspects the channel beyond passing it through verbatim.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque handle to a UI node. Referenced by the watcher, never owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Generate a new unique element handle.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which platform event name delivered a completion.
///
/// A given host fires only one of the two per real completion, so funneling
/// both into the same delivery path cannot double-count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventChannel {
    /// The standard `transitionend` event name.
    Standard,
    /// The `webkitTransitionEnd` vendor-prefixed alias.
    WebkitPrefixed,
}

/// One style property finished transitioning on one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEndEvent {
    /// The element the transition ran on. Exact match required; events from
    /// descendants never count toward a wave.
    pub target: ElementId,
    /// The style property that finished.
    pub property_name: String,
    /// Seconds the transition ran for, as reported by the host.
    pub elapsed_secs: f32,
    /// The event name the host delivered this on.
    pub channel: EventChannel,
}

impl TransitionEndEvent {
    /// Create an event on the standard channel with zero elapsed time.
    pub fn new(target: ElementId, property_name: impl Into<String>) -> Self {
        Self {
            target,
            property_name: property_name.into(),
            elapsed_secs: 0.0,
            channel: EventChannel::Standard,
        }
    }

    /// Set the elapsed time.
    pub fn with_elapsed_secs(mut self, elapsed_secs: f32) -> Self {
        self.elapsed_secs = elapsed_secs;
        self
    }

    /// Set the delivery channel.
    pub fn with_channel(mut self, channel: EventChannel) -> Self {
        self.channel = channel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_are_unique() {
        let a = ElementId::new();
        let b = ElementId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_event_builders() {
        let elem = ElementId::new();
        let event = TransitionEndEvent::new(elem, "left")
            .with_elapsed_secs(0.3)
            .with_channel(EventChannel::WebkitPrefixed);

        assert_eq!(event.target, elem);
        assert_eq!(event.property_name, "left");
        assert_eq!(event.elapsed_secs, 0.3);
        assert_eq!(event.channel, EventChannel::WebkitPrefixed);
    }

    #[test]
    fn test_event_serialization() {
        let event = TransitionEndEvent::new(ElementId(7), "opacity").with_elapsed_secs(1.5);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("opacity"));
        assert!(json.contains("standard"));

        let parsed: TransitionEndEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
