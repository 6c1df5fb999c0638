//! Transition-end watching for CSS-like property transitions.
//!
//! This crate invokes a callback once all transition-completion events for a
//! specified set of style properties have fired on a given element, falling
//! back to immediate invocation when no matching transition is configured.
//!
//! This crate provides:
//! - **Watch requests**: typed, builder-assembled registration shapes
//! - **Property sets**: delimiter-agnostic property-list parsing with an `all` wildcard
//! - **Activity detection**: one-shot computed-style admission check
//! - **Wave aggregation**: per-binding accumulation of completion events
//! - **Host adapter**: the seam to the embedding runtime's style and event systems
//!
//! # Architecture
//!
//! ```text
//! TransitionWatcher
//!   ├── watch(request)  → activity check → immediate fire | register binding
//!   └── deliver(event)  → route to bindings on the exact target element
//!
//! TransitionHost (adapter)
//!   ├── computed_style  → resolved transition-duration / transition-property
//!   └── subscribe/unsubscribe → completion-notification source
//! ```
//!
//! The embedding runtime owns scheduling: registration returns immediately,
//! and callbacks fire while it pumps completion events through `deliver`.

pub mod binding;
pub mod error;
pub mod events;
pub mod host;
pub mod properties;
pub mod request;
pub mod style;
pub mod watcher;

pub use binding::{Binding, BindingId, BindingProgress};
pub use error::WatchError;
pub use events::{ElementId, EventChannel, TransitionEndEvent};
pub use host::{MockHost, TransitionHost};
pub use properties::PropertySet;
pub use request::{TransitionCallback, WatchOutcome, WatchRequest};
pub use style::{has_active_transition, ComputedStyle};
pub use watcher::TransitionWatcher;
