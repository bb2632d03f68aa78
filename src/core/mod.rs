//! Dispatch core: listener registry, composition trait and configuration.
//!
//! Modules:
//! - [`registry`]: ordered per-type listener storage, subscribe/unsubscribe/dispatch;
//! - [`target`]: [`EventTarget`] trait for types that embed a registry;
//! - [`config`]: diagnostics settings for a registry.

mod config;
mod registry;
mod target;

pub use config::RegistryConfig;
pub use registry::EventRegistry;
pub use target::EventTarget;
