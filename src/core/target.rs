//! # Composition seam for observable types.
//!
//! Types become observable by embedding an [`EventRegistry`] and implementing
//! [`EventTarget`]: one accessor, and every subscribe/unsubscribe/dispatch call is
//! forwarded to the embedded registry.
//!
//! ## Example
//! ```rust
//! use evtarget::{Event, EventRegistry, EventTarget, Listener};
//!
//! #[derive(Default)]
//! struct Button {
//!     events: EventRegistry,
//! }
//!
//! impl EventTarget for Button {
//!     fn event_registry(&self) -> &EventRegistry {
//!         &self.events
//!     }
//! }
//!
//! let button = Button::default();
//! let click = Listener::callable(|_, ev: &Event| {
//!     assert_eq!(ev.detail::<u8>(), Some(&1));
//!     Ok(())
//! });
//! button.on("click", &click);
//! assert!(button.emit("click", 1_u8).unwrap());
//! button.off("click", &click);
//! ```

use std::any::Any;

use crate::core::EventRegistry;
use crate::error::DispatchError;
use crate::events::Event;
use crate::listeners::{AddListenerOptions, Listener, ListenerOptions};

/// Capability set `{subscribe, unsubscribe, dispatch}` delegated to an embedded registry.
///
/// Callable listeners receive the embedded [`EventRegistry`] as receiver context.
pub trait EventTarget {
    /// Returns the registry this type delegates to.
    fn event_registry(&self) -> &EventRegistry;

    /// See [`EventRegistry::add_event_listener`].
    fn add_event_listener(
        &self,
        event_type: &str,
        listener: Option<Listener>,
        options: impl Into<AddListenerOptions>,
    ) {
        self.event_registry()
            .add_event_listener(event_type, listener, options);
    }

    /// See [`EventRegistry::remove_event_listener`].
    fn remove_event_listener(
        &self,
        event_type: &str,
        listener: Option<&Listener>,
        options: impl Into<ListenerOptions>,
    ) {
        self.event_registry()
            .remove_event_listener(event_type, listener, options);
    }

    /// See [`EventRegistry::dispatch_event`].
    fn dispatch_event(&self, event: &Event) -> Result<bool, DispatchError> {
        self.event_registry().dispatch_event(event)
    }

    /// Subscribes with default options.
    fn on(&self, event_type: &str, listener: &Listener) {
        self.event_registry()
            .add_event_listener(event_type, Some(listener.clone()), false);
    }

    /// Unsubscribes with default options.
    fn off(&self, event_type: &str, listener: &Listener) {
        self.event_registry()
            .remove_event_listener(event_type, Some(listener), false);
    }

    /// Dispatches a custom event of `event_type` carrying `detail`.
    fn emit<T>(&self, event_type: &str, detail: T) -> Result<bool, DispatchError>
    where
        T: Any + Send + Sync,
    {
        self.event_registry()
            .dispatch_event(&Event::custom(event_type, detail))
    }
}

impl EventTarget for EventRegistry {
    fn event_registry(&self) -> &EventRegistry {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct NicerTarget {
        events: EventRegistry,
    }

    impl EventTarget for NicerTarget {
        fn event_registry(&self) -> &EventRegistry {
            &self.events
        }
    }

    fn counting(calls: &Arc<AtomicUsize>, expected: &'static str) -> Listener {
        let calls = Arc::clone(calls);
        Listener::callable(move |_, ev| {
            assert_eq!(ev.detail::<&'static str>(), Some(&expected));
            calls.fetch_add(1, Ordering::Relaxed);
            Ok(())
        })
    }

    #[test]
    fn test_composed_target_on_emit_off() {
        let target = NicerTarget::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let listener = counting(&calls, "some data");

        target.on("foo", &listener);

        target.emit("foo", "some data").unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 1);

        target.emit("foo", "some data").unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);

        target.off("foo", &listener);
        target.emit("foo", "some data").unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_trait_methods_delegate_to_registry() {
        let target = NicerTarget::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let listener = Listener::callable(move |_, _| {
            c.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });

        EventTarget::add_event_listener(&target, "foo", Some(listener.clone()), true);
        assert_eq!(target.event_registry().listener_count("foo"), 1);

        assert!(EventTarget::dispatch_event(&target, &Event::new("foo")).unwrap());
        assert_eq!(calls.load(Ordering::Relaxed), 1);

        EventTarget::remove_event_listener(&target, "foo", Some(&listener), true);
        assert_eq!(target.event_registry().listeners("foo"), Some(Vec::new()));
    }

    #[test]
    fn test_callable_receives_embedded_registry() {
        let target = NicerTarget::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&seen);
        let expected = std::ptr::from_ref(target.event_registry()) as usize;
        target.on(
            "foo",
            &Listener::callable(move |registry, _| {
                assert_eq!(std::ptr::from_ref(registry) as usize, expected);
                s.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }),
        );

        target.emit("foo", ()).unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_registry_is_its_own_target() {
        let registry = EventRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let listener = counting(&calls, "x");
        registry.on("foo", &listener);
        assert!(registry.emit("foo", "x").unwrap());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }
}
