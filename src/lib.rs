//! # evtarget
//!
//! **evtarget** is a small synchronous event target for Rust.
//!
//! It lets independent observers subscribe to named event types on an object and
//! be notified, in registration order, when that object dispatches an event. A
//! listener can signal "handled, skip the default action" through the event's
//! prevented flag, which becomes the return value of the dispatch. Other types
//! gain the same behavior by embedding an [`EventRegistry`] and implementing
//! [`EventTarget`].
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   add_event_listener(type, listener)        remove_event_listener(type, listener)
//!                  │                                        │
//!                  ▼                                        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventRegistry                                                    │
//! │  listeners: HashMap<type, Vec<Listener>>  (behind a Mutex)        │
//! │    "click"  ─► [L1, L2, L1]                                       │
//! │    "submit" ─► [H1]                                               │
//! │    "x"      ─► []            (keys persist once created)          │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                │ dispatch_event(&Event)
//!                                ▼
//!                   snapshot = listeners[type].clone()
//!                                │   (lock released)
//!              ┌─────────────────┼─────────────────┐
//!              ▼                 ▼                 ▼
//!        L1(reg, &ev)      L2(reg, &ev)     H1.handle_event(&ev)
//!              │                 │                 │
//!              └──── Err? ───► abort, return DispatchError
//!                                ▼
//!                  Ok(!event.default_prevented())
//! ```
//!
//! ### Dispatch
//! ```text
//! dispatch_event(ev)
//!   ├─► no key for ev.type        ─► Ok(true)
//!   ├─► snapshot listeners        (changes made by listeners apply to later dispatches)
//!   ├─► for each listener, in order:
//!   │       ├─ Callable ─► f(&registry, &ev)
//!   │       └─ Handler  ─► h.handle_event(&ev)
//!   │       Err ─► DispatchError::ListenerFailed (remaining listeners skipped)
//!   └─► Ok(!ev.default_prevented())  (prevent_default never stops the loop)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Registry**      | Ordered per-type listeners, identity removal, sync dispatch.  | [`EventRegistry`]                           |
//! | **Composition**   | Make any type observable by embedding a registry.             | [`EventTarget`]                             |
//! | **Listeners**     | Closures or handler objects.                                  | [`Listener`], [`HandleEvent`]               |
//! | **Events**        | Type name, cancelable flag, prevented flag, typed detail.     | [`Event`], [`EventInit`]                    |
//! | **Errors**        | Fail-fast listener errors surfaced from dispatch.             | [`ListenerError`], [`DispatchError`]        |
//! | **Configuration** | Log label and listener-leak warning threshold.                | [`RegistryConfig`]                          |
//!
//! ## Optional features
//! - `logging`: exports a built-in [`LogListener`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use evtarget::{Event, EventInit, EventRegistry, Listener};
//!
//! let registry = EventRegistry::new();
//!
//! let l1 = Listener::callable(|_, _| Ok(()));
//! let l2 = Listener::callable(|_, ev: &Event| {
//!     ev.prevent_default();
//!     Ok(())
//! });
//!
//! registry.add_event_listener("foo", Some(l1.clone()), false);
//! registry.add_event_listener("foo", Some(l2), false);
//!
//! let ev = Event::with_init("foo", EventInit { bubbles: false, cancelable: true });
//! assert_eq!(registry.dispatch_event(&ev).ok(), Some(false));
//!
//! registry.remove_event_listener("foo", Some(&l1), false);
//! assert_eq!(registry.listener_count("foo"), 1);
//! ```
mod core;
mod error;
mod events;
mod listeners;

// ---- Public re-exports ----

pub use crate::core::{EventRegistry, EventTarget, RegistryConfig};
pub use error::{DispatchError, ListenerError};
pub use events::{Event, EventInit};
pub use listeners::{AddListenerOptions, CallbackFn, HandleEvent, Listener, ListenerOptions};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
