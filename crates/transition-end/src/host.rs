//! Host-environment adapter seam.
//!
//! The browser-ish pieces this library cannot own live behind
//! [`TransitionHost`]: style resolution and the completion-notification
//! source. Alias handling (the standard event name plus the one
//! vendor-prefixed alias) belongs entirely to the adapter; the core
//! subscribes once per element and receives a single
//! [`TransitionEndEvent`](crate::events::TransitionEndEvent) per real
//! completion regardless of which channel fired.
//!
//! [`MockHost`] is an in-memory adapter for tests and embedder test suites.

use std::collections::HashMap;

use crate::events::ElementId;
use crate::style::ComputedStyle;

/// What the host environment must provide.
pub trait TransitionHost {
    /// Snapshot the element's resolved transition style.
    fn computed_style(&self, element: ElementId) -> ComputedStyle;

    /// Start delivering the element's completion events to the watcher.
    ///
    /// Called once per registered binding; the adapter may refcount.
    fn subscribe(&mut self, element: ElementId);

    /// Stop delivering the element's completion events for one binding.
    fn unsubscribe(&mut self, element: ElementId);
}

/// In-memory host adapter with per-element styles and subscription counters.
#[derive(Debug, Default)]
pub struct MockHost {
    styles: HashMap<ElementId, ComputedStyle>,
    subscriptions: HashMap<ElementId, usize>,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
}

impl MockHost {
    /// Create an empty mock host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style snapshot returned for an element.
    pub fn set_style(&mut self, element: ElementId, style: ComputedStyle) {
        self.styles.insert(element, style);
    }

    /// Live subscription count for an element.
    pub fn subscription_count(&self, element: ElementId) -> usize {
        self.subscriptions.get(&element).copied().unwrap_or(0)
    }

    /// Total `subscribe` calls observed.
    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls
    }

    /// Total `unsubscribe` calls observed.
    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls
    }
}

impl TransitionHost for MockHost {
    fn computed_style(&self, element: ElementId) -> ComputedStyle {
        self.styles.get(&element).cloned().unwrap_or_default()
    }

    fn subscribe(&mut self, element: ElementId) {
        self.subscribe_calls += 1;
        *self.subscriptions.entry(element).or_insert(0) += 1;
    }

    fn unsubscribe(&mut self, element: ElementId) {
        self.unsubscribe_calls += 1;
        if let Some(count) = self.subscriptions.get_mut(&element) {
            *count = count.saturating_sub(1);
        }
    }
}
