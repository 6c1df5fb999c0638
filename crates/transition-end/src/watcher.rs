//! The transition watcher: registration and event delivery.
//!
//! [`TransitionWatcher`] is the single entry point. `watch` validates a
//! request, fans it out into bindings, and makes the one-shot admission
//! decision per binding: no matching transition means the callback runs
//! immediately and nothing is registered; otherwise the binding starts
//! listening and the host runtime drives it by calling `deliver` from its
//! event loop.
//!
//! # Usage
//!
//! ```ignore
//! use transition_end::{TransitionWatcher, WatchRequest, MockHost};
//!
//! let mut host = MockHost::new();
//! let mut watcher = TransitionWatcher::new();
//!
//! watcher.watch(
//!     &mut host,
//!     WatchRequest::new(element)
//!         .properties("left width")
//!         .on_complete(|outcome| { /* ... */ }),
//! )?;
//!
//! // Later, from the host event loop:
//! watcher.deliver(&mut host, &event);
//! ```

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::binding::{Binding, BindingId, BindingProgress};
use crate::error::WatchError;
use crate::events::{ElementId, TransitionEndEvent};
use crate::host::TransitionHost;
use crate::request::{WatchOutcome, WatchRequest};
use crate::style::has_active_transition;

/// Registry of live bindings, keyed by binding and indexed by element.
#[derive(Debug, Default)]
pub struct TransitionWatcher {
    bindings: HashMap<BindingId, Binding>,
    /// Bindings listening on each element, in registration order.
    element_index: HashMap<ElementId, Vec<BindingId>>,
}

impl TransitionWatcher {
    /// Create a watcher with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a watch request.
    ///
    /// Each entry of the request (one per map entry, or exactly one for the
    /// flat form) becomes its own binding. Entries whose property set has no
    /// active transition on the element short-circuit: their callback is
    /// invoked synchronously with [`WatchOutcome::Immediate`] and nothing is
    /// registered.
    ///
    /// Returns the IDs of the bindings that were actually registered.
    pub fn watch<H: TransitionHost>(
        &mut self,
        host: &mut H,
        request: WatchRequest,
    ) -> Result<Vec<BindingId>, WatchError> {
        let (element, entries, detach) = request.into_entries()?;
        let style = host.computed_style(element);

        let mut registered = Vec::new();
        for (properties, mut callback) in entries {
            if !has_active_transition(&style, &properties) {
                debug!(
                    "no active transition on {:?} for {:?}; invoking immediately",
                    element, properties
                );
                callback(WatchOutcome::Immediate);
                continue;
            }

            let binding = Binding::new(element, properties, callback, detach);
            let id = binding.id();
            debug!("registered {:?}", binding);

            host.subscribe(element);
            self.element_index.entry(element).or_default().push(id);
            self.bindings.insert(id, binding);
            registered.push(id);
        }

        Ok(registered)
    }

    /// Deliver one completion event from the host.
    ///
    /// Routes the event to every binding listening on its exact target
    /// element; bindings for other elements (ancestors included) never see
    /// it. Completed waves fire their callback during this call, and bindings
    /// that asked to detach are deregistered before their callback runs.
    pub fn deliver<H: TransitionHost>(&mut self, host: &mut H, event: &TransitionEndEvent) {
        let ids: Vec<BindingId> = match self.element_index.get(&event.target) {
            Some(ids) => ids.clone(),
            None => {
                trace!("no bindings for {:?}; event ignored", event.target);
                return;
            }
        };

        for id in ids {
            let progress = match self.bindings.get_mut(&id) {
                Some(binding) => binding.accumulate(event),
                None => continue,
            };

            match progress {
                BindingProgress::Ignored => {
                    trace!("{:?} ignored event for '{}'", id, event.property_name);
                }
                BindingProgress::Pending => {
                    trace!("{:?} accumulated '{}'", id, event.property_name);
                }
                BindingProgress::Ready { detach: false } => {
                    if let Some(binding) = self.bindings.get_mut(&id) {
                        binding.fire_wave();
                    }
                }
                BindingProgress::Ready { detach: true } => {
                    if let Some(mut binding) = self.bindings.remove(&id) {
                        self.unindex(event.target, id);
                        host.unsubscribe(event.target);
                        debug!("detached {:?} after completed wave", id);
                        binding.fire_wave();
                    }
                }
            }
        }
    }

    /// Whether a binding is still registered and listening.
    pub fn is_listening(&self, id: BindingId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// Number of live bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn unindex(&mut self, element: ElementId, id: BindingId) {
        if let Some(ids) = self.element_index.get_mut(&element) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.element_index.remove(&element);
            }
        }
    }
}
