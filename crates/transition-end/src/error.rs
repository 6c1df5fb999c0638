//! Error types for watch registration.
//!
//! Only two failure kinds exist, both raised synchronously from
//! [`TransitionWatcher::watch`](crate::watcher::TransitionWatcher::watch) when a
//! request is malformed. Everything else is a silent non-error: missing or
//! unparseable style data counts as "no transition", and completion events for
//! unrelated elements or properties are ignored.

/// A malformed watch request. Unrecoverable at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WatchError {
    /// No target element was supplied.
    #[error("transition watch requires a target element")]
    MissingElement,
    /// Neither a flat callback nor a property-to-callback map was supplied.
    #[error("transition watch requires a callback or a property-to-callback map")]
    InvalidArguments,
}
