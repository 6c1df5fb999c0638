//! Per-binding wave state.
//!
//! A [`Binding`] ties one property set and one callback to one element and
//! tracks a single wave at a time: events accumulate in arrival order until
//! every required property has been observed, the callback fires once with the
//! accumulated list, and the accumulator resets in place for the next wave.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::events::{ElementId, TransitionEndEvent};
use crate::properties::PropertySet;
use crate::request::{TransitionCallback, WatchOutcome};

/// Unique identifier for a registered binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingId(pub u64);

impl BindingId {
    /// Generate a new unique binding ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BindingId {
    fn default() -> Self {
        Self::new()
    }
}

/// What a delivered event did to a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingProgress {
    /// Wrong target or property; the event was dropped silently.
    Ignored,
    /// The event was accumulated but the wave is not yet complete.
    Pending,
    /// Every required property has been observed; the wave is ready to fire.
    Ready {
        /// Whether the binding asked to be deregistered after this wave.
        detach: bool,
    },
}

/// One element + property set + callback, tracking its own wave state.
pub struct Binding {
    id: BindingId,
    element: ElementId,
    properties: PropertySet,
    callback: TransitionCallback,
    detach_after_completion: bool,
    /// Accumulated events for the in-flight wave, in arrival order.
    events: Vec<TransitionEndEvent>,
}

impl Binding {
    pub(crate) fn new(
        element: ElementId,
        properties: PropertySet,
        callback: TransitionCallback,
        detach_after_completion: bool,
    ) -> Self {
        Self {
            id: BindingId::new(),
            element,
            properties,
            callback,
            detach_after_completion,
            events: Vec::new(),
        }
    }

    /// This binding's ID.
    pub fn id(&self) -> BindingId {
        self.id
    }

    /// The element this binding watches.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The property set this binding waits on.
    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    /// Number of events accumulated toward the current wave.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Accumulate one delivered event.
    ///
    /// Events from other elements (descendants included) or for properties
    /// outside the set are ignored. Membership, not count, decides readiness:
    /// duplicates neither block nor complete a wave, except that a wildcard
    /// set is complete after any single matching event.
    pub(crate) fn accumulate(&mut self, event: &TransitionEndEvent) -> BindingProgress {
        if event.target != self.element || !self.properties.contains(&event.property_name) {
            return BindingProgress::Ignored;
        }

        self.events.push(event.clone());

        if self.wave_complete() {
            BindingProgress::Ready {
                detach: self.detach_after_completion,
            }
        } else {
            BindingProgress::Pending
        }
    }

    /// Invoke the callback with the accumulated wave and reset the
    /// accumulator in place, leaving the binding ready for the next wave.
    pub(crate) fn fire_wave(&mut self) {
        let events = std::mem::take(&mut self.events);
        debug!(
            "transition wave complete for element {:?}: {} event(s)",
            self.element,
            events.len()
        );
        (self.callback)(WatchOutcome::Completed { events });
    }

    fn wave_complete(&self) -> bool {
        match self.properties.names() {
            // Wildcard: any single matching event completes the wave.
            None => !self.events.is_empty(),
            Some(names) => names
                .iter()
                .all(|name| self.events.iter().any(|e| &e.property_name == name)),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("element", &self.element)
            .field("properties", &self.properties)
            .field("detach_after_completion", &self.detach_after_completion)
            .field("pending_events", &self.events.len())
            .finish()
    }
}
