//! Event payload.
//!
//! ## Contents
//! - [`Event`] type name, flags, prevented-default state and optional detail
//! - [`EventInit`] construction flags (`bubbles`, `cancelable`)
//!
//! The registry only relies on the type name and the prevented flag; everything
//! else is carried for listeners.

mod event;

pub use event::{Event, EventInit};
