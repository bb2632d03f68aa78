//! # Registry configuration.
//!
//! Provides [`RegistryConfig`], the settings an [`EventRegistry`](crate::EventRegistry)
//! is built with. It affects diagnostics only; dispatch semantics never change.
//!
//! ## Sentinel values
//! - `max_listeners = 0` → no listener-leak warning

use std::borrow::Cow;

/// Configuration for an event registry.
///
/// ## Field semantics
/// - `label`: name attached to every log record of this registry
/// - `max_listeners`: per-type listener count above which a leak warning is logged once (`0` = never)
///
/// ## Notes
/// All fields are public. Prefer the helper accessors over sprinkling sentinel checks (`0`).
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Label used in log records to tell registries apart.
    pub label: Cow<'static, str>,

    /// Listener-leak warning threshold per event type.
    ///
    /// - `0` = disabled
    /// - `n > 0` = warn once per type when its list grows beyond `n`
    ///
    /// Listeners are never rejected; the warning is purely diagnostic.
    pub max_listeners: usize,
}

impl RegistryConfig {
    /// Creates the default configuration with a custom label.
    pub fn labeled(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Returns the leak warning threshold as an `Option`.
    ///
    /// - `None` → never warn
    /// - `Some(n)` → warn when a type has more than `n` listeners
    #[inline]
    pub fn listener_warning_threshold(&self) -> Option<usize> {
        if self.max_listeners == 0 {
            None
        } else {
            Some(self.max_listeners)
        }
    }
}

impl Default for RegistryConfig {
    /// Default configuration:
    ///
    /// - `label = "event-target"`
    /// - `max_listeners = 0` (no leak warning)
    fn default() -> Self {
        Self {
            label: Cow::Borrowed("event-target"),
            max_listeners: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_warning() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.label, "event-target");
        assert_eq!(cfg.listener_warning_threshold(), None);
    }

    #[test]
    fn test_threshold_and_label() {
        let cfg = RegistryConfig {
            max_listeners: 10,
            ..RegistryConfig::labeled("window")
        };
        assert_eq!(cfg.label, "window");
        assert_eq!(cfg.listener_warning_threshold(), Some(10));
    }
}
