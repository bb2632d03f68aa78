//! # Listener shapes and identity.
//!
//! A [`Listener`] is one of two capability shapes:
//! - [`Listener::Callable`]: a function `Fn(&EventRegistry, &Event) -> Result<(), ListenerError>`;
//!   the registry it was dispatched from is passed as receiver context.
//! - [`Listener::Handler`]: an object implementing [`HandleEvent`].
//!
//! The registry matches on the variant at dispatch time.
//!
//! ## Identity
//! Listeners compare by reference identity (the `Arc` allocation), never by value.
//! Clones of one `Listener` are the same listener; two `Listener::callable(...)` built
//! from identical closures are different listeners. Keep a clone around if you want to
//! remove it later.
//!
//! ## Example
//! ```rust
//! use evtarget::{Event, EventRegistry, Listener};
//!
//! let registry = EventRegistry::new();
//! let hello = Listener::callable(|_target: &EventRegistry, ev: &Event| {
//!     println!("got {}", ev.event_type());
//!     Ok(())
//! });
//!
//! registry.add_event_listener("hello", Some(hello.clone()), false);
//! assert_eq!(registry.dispatch_event(&Event::new("hello")).ok(), Some(true));
//! registry.remove_event_listener("hello", Some(&hello), false);
//! assert_eq!(registry.listener_count("hello"), 0);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::core::EventRegistry;
use crate::error::ListenerError;
use crate::events::Event;

/// Signature of a callable listener.
pub type CallbackFn = dyn Fn(&EventRegistry, &Event) -> Result<(), ListenerError> + Send + Sync;

/// # Object-shaped listener.
///
/// Implement this for types that keep their own state and want to be notified
/// through a method rather than a closure.
///
/// # Example
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use evtarget::{Event, HandleEvent, ListenerError};
///
/// #[derive(Default)]
/// struct Counter(AtomicUsize);
///
/// impl HandleEvent for Counter {
///     fn handle_event(&self, _event: &Event) -> Result<(), ListenerError> {
///         self.0.fetch_add(1, Ordering::Relaxed);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str { "counter" }
/// }
/// ```
pub trait HandleEvent: Send + Sync + 'static {
    /// Handles one dispatched event.
    ///
    /// Returning an error aborts the dispatch; listeners after this one do not run.
    fn handle_event(&self, event: &Event) -> Result<(), ListenerError>;

    /// Returns the handler name used in logs and dispatch errors.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Listener registered on an [`EventRegistry`].
#[derive(Clone)]
pub enum Listener {
    /// Function taking the dispatching registry and the event.
    Callable(Arc<CallbackFn>),
    /// Object exposing [`HandleEvent::handle_event`].
    Handler(Arc<dyn HandleEvent>),
}

impl Listener {
    /// Wraps a closure as a callable listener.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&EventRegistry, &Event) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Listener::Callable(Arc::new(f))
    }

    /// Wraps an owned handler object.
    pub fn handler<H: HandleEvent>(handler: H) -> Self {
        Listener::Handler(Arc::new(handler))
    }

    /// Returns true if both values refer to the same listener.
    pub fn same(&self, other: &Listener) -> bool {
        match (self, other) {
            (Listener::Callable(a), Listener::Callable(b)) => {
                Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
            }
            (Listener::Handler(a), Listener::Handler(b)) => {
                Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
            }
            _ => false,
        }
    }

    /// Diagnostic name: the handler's [`HandleEvent::name`], or `"callable"`.
    pub fn name(&self) -> &'static str {
        match self {
            Listener::Callable(_) => "callable",
            Listener::Handler(h) => h.name(),
        }
    }

    #[inline]
    pub fn is_handler(&self) -> bool {
        matches!(self, Listener::Handler(_))
    }

    /// Invokes whichever capability this listener has.
    pub(crate) fn invoke(&self, target: &EventRegistry, event: &Event) -> Result<(), ListenerError> {
        match self {
            Listener::Handler(h) => h.handle_event(event),
            Listener::Callable(f) => f(target, event),
        }
    }
}

impl<H: HandleEvent> From<Arc<H>> for Listener {
    /// Keeps the caller's allocation, so the same `Arc` always maps to the same listener.
    fn from(handler: Arc<H>) -> Self {
        Listener::Handler(handler)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listener::Callable(cb) => f
                .debug_tuple("Callable")
                .field(&Arc::as_ptr(cb).cast::<()>())
                .finish(),
            Listener::Handler(h) => f.debug_tuple("Handler").field(&h.name()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Noop;

    impl HandleEvent for Noop {
        fn handle_event(&self, _event: &Event) -> Result<(), ListenerError> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "noop"
        }
    }

    fn noop_fn(_: &EventRegistry, _: &Event) -> Result<(), ListenerError> {
        Ok(())
    }

    #[test]
    fn test_clone_keeps_identity() {
        let l = Listener::callable(noop_fn);
        let c = l.clone();
        assert!(l.same(&c));
        assert_eq!(l, c);
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let a = Listener::callable(noop_fn);
        let b = Listener::callable(noop_fn);
        assert!(!a.same(&b));
    }

    #[test]
    fn test_same_arc_handler_is_same_listener() {
        let h = Arc::new(Noop);
        let a = Listener::from(Arc::clone(&h));
        let b = Listener::from(h);
        assert!(a.same(&b));
        assert!(!a.same(&Listener::handler(Noop)));
    }

    #[test]
    fn test_variants_never_equal() {
        let a = Listener::callable(noop_fn);
        let b = Listener::handler(Noop);
        assert!(!a.same(&b));
        assert!(!b.same(&a));
    }

    #[test]
    fn test_names() {
        assert_eq!(Listener::callable(noop_fn).name(), "callable");
        assert_eq!(Listener::handler(Noop).name(), "noop");
        assert!(Listener::handler(Noop).is_handler());
    }

    #[test]
    fn test_invoke_routes_by_shape() {
        struct Hits(AtomicUsize);
        impl HandleEvent for Hits {
            fn handle_event(&self, _event: &Event) -> Result<(), ListenerError> {
                self.0.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
        }

        let registry = EventRegistry::new();
        let ev = Event::new("x");

        let hits = Arc::new(Hits(AtomicUsize::new(0)));
        Listener::from(Arc::clone(&hits))
            .invoke(&registry, &ev)
            .unwrap();
        assert_eq!(hits.0.load(Ordering::Relaxed), 1);

        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        Listener::callable(move |_, _| {
            c.fetch_add(1, Ordering::Relaxed);
            Ok(())
        })
        .invoke(&registry, &ev)
        .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }
}
