//! # Event payload dispatched through an [`EventRegistry`](crate::EventRegistry).
//!
//! An [`Event`] carries an immutable type name, `bubbles`/`cancelable` flags and one
//! mutable "default prevented" flag that listeners set to tell the dispatcher's caller
//! that the ordinary follow-up action should not happen.
//!
//! ## Prevented flag
//! The flag has two surfaces over the same backing value:
//! - [`Event::prevent_default`] / [`Event::default_prevented`]
//! - the legacy [`Event::return_value`] / [`Event::set_return_value`] pair
//!   (`return_value == !default_prevented`)
//!
//! Both are gated by `cancelable`: on a non-cancelable event neither has any effect.
//! Once set, the flag is never cleared (`set_return_value(true)` is a no-op).
//!
//! ## Ordering
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use evtarget::{Event, EventInit};
//!
//! let ev = Event::with_init("submit", EventInit { bubbles: true, cancelable: true })
//!     .with_detail(String::from("form-1"));
//!
//! assert_eq!(ev.event_type(), "submit");
//! assert!(ev.return_value());
//!
//! ev.prevent_default();
//! assert!(ev.default_prevented());
//! assert!(!ev.return_value());
//! assert_eq!(ev.detail::<String>().map(String::as_str), Some("form-1"));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Construction flags for an [`Event`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventInit {
    /// Whether the event is meant to bubble. Carried as data only; the registry
    /// dispatches on a single target.
    pub bubbles: bool,
    /// Whether listeners may prevent the default action.
    pub cancelable: bool,
}

/// Event dispatched to listeners.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp of creation.
    pub at: SystemTime,

    event_type: Arc<str>,
    bubbles: bool,
    cancelable: bool,
    default_prevented: AtomicBool,
    detail: Option<Arc<dyn Any + Send + Sync>>,
}

impl Event {
    /// Creates a non-bubbling, non-cancelable event of the given type.
    pub fn new(event_type: impl Into<Arc<str>>) -> Self {
        Self::with_init(event_type, EventInit::default())
    }

    /// Creates an event with explicit construction flags.
    pub fn with_init(event_type: impl Into<Arc<str>>, init: EventInit) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            event_type: event_type.into(),
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            default_prevented: AtomicBool::new(false),
            detail: None,
        }
    }

    /// Creates a custom event carrying `detail`.
    pub fn custom<T>(event_type: impl Into<Arc<str>>, detail: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::new(event_type).with_detail(detail)
    }

    /// Attaches a typed detail payload.
    #[inline]
    pub fn with_detail<T>(mut self, detail: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.detail = Some(Arc::new(detail));
        self
    }

    /// Event type name.
    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Shared handle to the type name (cheap clone).
    #[inline]
    pub fn event_type_arc(&self) -> Arc<str> {
        Arc::clone(&self.event_type)
    }

    #[inline]
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    #[inline]
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Returns the detail payload if it was attached with type `T`.
    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.detail.as_deref().and_then(|d| d.downcast_ref::<T>())
    }

    /// True if a detail payload of any type is attached.
    #[inline]
    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Marks the default action as prevented. No effect unless the event is cancelable.
    #[inline]
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.store(true, AtomicOrdering::Relaxed);
        }
    }

    #[inline]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(AtomicOrdering::Relaxed)
    }

    /// Legacy alias: `!default_prevented()`.
    #[inline]
    pub fn return_value(&self) -> bool {
        !self.default_prevented()
    }

    /// Legacy alias: writing `false` is `prevent_default()`; writing `true` is ignored.
    #[inline]
    pub fn set_return_value(&self, value: bool) {
        if !value {
            self.prevent_default();
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("seq", &self.seq)
            .field("at", &self.at)
            .field("type", &self.event_type)
            .field("bubbles", &self.bubbles)
            .field("cancelable", &self.cancelable)
            .field("default_prevented", &self.default_prevented())
            .field("has_detail", &self.has_detail())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cancelable(ty: &str) -> Event {
        Event::with_init(
            ty,
            EventInit {
                bubbles: true,
                cancelable: true,
            },
        )
    }

    #[test]
    fn test_new_event_defaults() {
        let ev = Event::new("foo");
        assert_eq!(ev.event_type(), "foo");
        assert!(!ev.bubbles());
        assert!(!ev.cancelable());
        assert!(!ev.default_prevented());
        assert!(ev.return_value());
        assert!(!ev.has_detail());
    }

    #[test]
    fn test_at_is_stamped_on_creation() {
        let before = SystemTime::now();
        let ev = Event::new("foo");
        let after = SystemTime::now();
        assert!(before <= ev.at && ev.at <= after);
        assert!(format!("{ev:?}").contains("at: SystemTime"));
    }

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new("a");
        let b = Event::new("b");
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_prevent_default_sets_both_surfaces() {
        let ev = cancelable("foo");
        ev.prevent_default();
        assert!(ev.default_prevented());
        assert!(!ev.return_value());
    }

    #[test]
    fn test_return_value_false_sets_default_prevented() {
        let ev = cancelable("foo");
        ev.set_return_value(false);
        assert!(ev.default_prevented());
        assert!(!ev.return_value());
    }

    #[test]
    fn test_return_value_true_does_not_clear_flag() {
        let ev = cancelable("foo");
        ev.prevent_default();
        ev.set_return_value(true);
        assert!(ev.default_prevented());
        assert!(!ev.return_value());
    }

    #[test]
    fn test_non_cancelable_ignores_both_surfaces() {
        let ev = Event::with_init(
            "foo",
            EventInit {
                bubbles: true,
                cancelable: false,
            },
        );
        ev.prevent_default();
        ev.set_return_value(false);
        assert!(!ev.default_prevented());
        assert!(ev.return_value());
    }

    #[test]
    fn test_detail_downcast() {
        let ev = Event::custom("foo", String::from("some data"));
        assert_eq!(ev.detail::<String>().map(String::as_str), Some("some data"));
        assert!(ev.detail::<u32>().is_none());
    }
}
