//! # Listeners registered on an event registry.
//!
//! This module provides the [`Listener`] tagged union, the [`HandleEvent`] trait for
//! object-shaped listeners, and the subscription option bags.
//!
//! ## Architecture
//! ```text
//! dispatch_event(&Event)
//!        │  (snapshot of the type's list)
//!        ├──► Listener::Callable ──► f(&EventRegistry, &Event)
//!        ├──► Listener::Handler  ──► handler.handle_event(&Event)
//!        └──► ...                   (registration order, stops at first Err)
//! ```
//!
//! ## Listener shapes
//! - **Callable** - closures or functions; receive the dispatching registry as context
//! - **Handler** - stateful objects implementing [`HandleEvent`]
//!
//! ## Implementing a handler
//! ```no_run
//! use evtarget::{Event, HandleEvent, ListenerError};
//!
//! struct Guard;
//!
//! impl HandleEvent for Guard {
//!     fn handle_event(&self, event: &Event) -> Result<(), ListenerError> {
//!         if event.event_type() == "navigate" {
//!             event.prevent_default();
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod listener;
#[cfg(feature = "logging")]
mod log;
mod options;

pub use listener::{CallbackFn, HandleEvent, Listener};
#[cfg(feature = "logging")]
pub use log::LogListener;
pub use options::{AddListenerOptions, ListenerOptions};
