//! Typed watch requests.
//!
//! This replaces the order-independent variadic call shape common in dynamic
//! UI runtimes with a struct of named optional fields plus builder methods for
//! the two legal call shapes:
//!
//! ```ignore
//! use transition_end::{WatchRequest, WatchOutcome};
//!
//! // Flat form: one property list, one callback.
//! let request = WatchRequest::new(element)
//!     .properties("left width")
//!     .on_complete(|outcome| { /* ... */ })
//!     .detach_after_completion(true);
//!
//! // Map form: independent property lists with their own callbacks.
//! let request = WatchRequest::new(element)
//!     .on_properties("left width", |outcome| { /* ... */ })
//!     .on_properties("top height", |outcome| { /* ... */ });
//! ```
//!
//! When both forms are present the map wins and the flat form is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WatchError;
use crate::events::{ElementId, TransitionEndEvent};
use crate::properties::PropertySet;

/// Callback invoked when a watch resolves.
pub type TransitionCallback = Box<dyn FnMut(WatchOutcome)>;

/// How a watch resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WatchOutcome {
    /// No matching transition was configured; the callback ran synchronously
    /// at registration with nothing to report.
    Immediate,
    /// A full wave of completions was observed.
    Completed {
        /// The accumulated completion events, in arrival order.
        events: Vec<TransitionEndEvent>,
    },
}

impl WatchOutcome {
    /// The accumulated events, empty for the immediate outcome.
    pub fn events(&self) -> &[TransitionEndEvent] {
        match self {
            Self::Immediate => &[],
            Self::Completed { events } => events,
        }
    }

    /// Whether this is the no-transition short-circuit outcome.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate)
    }
}

/// A request to watch one element for transition completion.
///
/// `element` is the one required field; validation happens in
/// [`TransitionWatcher::watch`](crate::watcher::TransitionWatcher::watch).
#[derive(Default)]
pub struct WatchRequest {
    /// The element whose transitions are watched.
    pub element: Option<ElementId>,
    /// Flat-form property list; absent means "all".
    pub property_list: Option<String>,
    /// Flat-form callback.
    pub callback: Option<TransitionCallback>,
    /// Map-form entries of property list to callback. Takes precedence over
    /// the flat form when non-empty.
    pub property_callbacks: Vec<(String, TransitionCallback)>,
    /// Deregister the binding after its first completed wave. Default false.
    pub detach_after_completion: bool,
}

impl WatchRequest {
    /// Start a request for the given element.
    pub fn new(element: ElementId) -> Self {
        Self {
            element: Some(element),
            ..Self::default()
        }
    }

    /// Set the flat-form property list.
    pub fn properties(mut self, list: impl Into<String>) -> Self {
        self.property_list = Some(list.into());
        self
    }

    /// Set the flat-form callback.
    pub fn on_complete(mut self, callback: impl FnMut(WatchOutcome) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Add a map-form entry binding a property list to its own callback.
    pub fn on_properties(
        mut self,
        list: impl Into<String>,
        callback: impl FnMut(WatchOutcome) + 'static,
    ) -> Self {
        self.property_callbacks.push((list.into(), Box::new(callback)));
        self
    }

    /// Deregister after the first completed wave.
    pub fn detach_after_completion(mut self, detach: bool) -> Self {
        self.detach_after_completion = detach;
        self
    }

    /// Validate and fan out into per-binding (property set, callback) entries.
    pub(crate) fn into_entries(
        self,
    ) -> Result<(ElementId, Vec<(PropertySet, TransitionCallback)>, bool), WatchError> {
        let element = self.element.ok_or(WatchError::MissingElement)?;

        let entries: Vec<(PropertySet, TransitionCallback)> =
            if !self.property_callbacks.is_empty() {
                self.property_callbacks
                    .into_iter()
                    .map(|(list, callback)| (PropertySet::parse(&list), callback))
                    .collect()
            } else if let Some(callback) = self.callback {
                let set = PropertySet::parse(self.property_list.as_deref().unwrap_or(""));
                vec![(set, callback)]
            } else {
                return Err(WatchError::InvalidArguments);
            };

        Ok((element, entries, self.detach_after_completion))
    }
}

impl fmt::Debug for WatchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchRequest")
            .field("element", &self.element)
            .field("property_list", &self.property_list)
            .field("callback", &self.callback.is_some())
            .field(
                "property_callbacks",
                &self
                    .property_callbacks
                    .iter()
                    .map(|(list, _)| list.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("detach_after_completion", &self.detach_after_completion)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_is_rejected() {
        let request = WatchRequest::default().on_complete(|_| {});
        let err = match request.into_entries() {
            Err(err) => err,
            Ok(_) => panic!("expected error"),
        };
        assert_eq!(err, WatchError::MissingElement);
    }

    #[test]
    fn test_missing_callback_and_map_is_rejected() {
        let request = WatchRequest::new(ElementId::new()).properties("left");
        let err = match request.into_entries() {
            Err(err) => err,
            Ok(_) => panic!("expected error"),
        };
        assert_eq!(err, WatchError::InvalidArguments);
    }

    #[test]
    fn test_flat_form_produces_one_entry() {
        let request = WatchRequest::new(ElementId::new())
            .properties("left width")
            .on_complete(|_| {});

        let (_, entries, detach) = request.into_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, PropertySet::parse("left width"));
        assert!(!detach);
    }

    #[test]
    fn test_flat_form_without_properties_is_wildcard() {
        let request = WatchRequest::new(ElementId::new()).on_complete(|_| {});

        let (_, entries, _) = request.into_entries().unwrap();
        assert!(entries[0].0.is_all());
    }

    #[test]
    fn test_map_form_fans_out_per_entry() {
        let request = WatchRequest::new(ElementId::new())
            .on_properties("left width", |_| {})
            .on_properties("top height", |_| {});

        let (_, entries, _) = request.into_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, PropertySet::parse("left width"));
        assert_eq!(entries[1].0, PropertySet::parse("top height"));
    }

    #[test]
    fn test_map_takes_precedence_over_flat_form() {
        let request = WatchRequest::new(ElementId::new())
            .properties("color")
            .on_complete(|_| {})
            .on_properties("left", |_| {});

        let (_, entries, _) = request.into_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, PropertySet::parse("left"));
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(WatchOutcome::Immediate.is_immediate());
        assert!(WatchOutcome::Immediate.events().is_empty());

        let outcome = WatchOutcome::Completed {
            events: vec![TransitionEndEvent::new(ElementId(1), "left")],
        };
        assert!(!outcome.is_immediate());
        assert_eq!(outcome.events().len(), 1);
    }
}
