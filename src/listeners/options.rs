//! # Subscription options.
//!
//! [`AddListenerOptions`] and [`ListenerOptions`] mirror the option bags of
//! conventional event targets. They are accepted for API compatibility only:
//! the registry dispatches on a single target, so `capture` changes nothing, and
//! `once` / `passive` are not honored.
//!
//! A plain `bool` converts to `{ capture: bool }`:
//! ```rust
//! use evtarget::{AddListenerOptions, ListenerOptions};
//!
//! assert_eq!(AddListenerOptions::from(true).capture, true);
//! assert_eq!(ListenerOptions::from(false), ListenerOptions::default());
//! ```

/// Options for [`EventRegistry::remove_event_listener`](crate::EventRegistry::remove_event_listener).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Capture-phase flag. Ignored.
    pub capture: bool,
}

/// Options for [`EventRegistry::add_event_listener`](crate::EventRegistry::add_event_listener).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddListenerOptions {
    /// Capture-phase flag. Ignored.
    pub capture: bool,
    /// Auto-remove after the first call. Not honored.
    pub once: bool,
    /// Listener promises not to prevent default. Not honored.
    pub passive: bool,
}

impl AddListenerOptions {
    /// True if any flag the registry does not honor is set.
    #[inline]
    pub fn has_unhonored(&self) -> bool {
        self.once || self.passive
    }
}

impl From<bool> for ListenerOptions {
    fn from(capture: bool) -> Self {
        Self { capture }
    }
}

impl From<bool> for AddListenerOptions {
    fn from(capture: bool) -> Self {
        Self {
            capture,
            ..Self::default()
        }
    }
}

impl From<ListenerOptions> for AddListenerOptions {
    fn from(opts: ListenerOptions) -> Self {
        Self {
            capture: opts.capture,
            ..Self::default()
        }
    }
}

impl From<AddListenerOptions> for ListenerOptions {
    fn from(opts: AddListenerOptions) -> Self {
        Self {
            capture: opts.capture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_shorthand_is_capture() {
        let opts = AddListenerOptions::from(true);
        assert!(opts.capture);
        assert!(!opts.once);
        assert!(!opts.passive);
        assert!(ListenerOptions::from(true).capture);
    }

    #[test]
    fn test_unhonored_flags() {
        assert!(!AddListenerOptions::from(true).has_unhonored());
        let opts = AddListenerOptions {
            once: true,
            ..Default::default()
        };
        assert!(opts.has_unhonored());
    }

    #[test]
    fn test_conversions_keep_capture() {
        let add = AddListenerOptions::from(ListenerOptions { capture: true });
        assert!(add.capture);
        let back = ListenerOptions::from(AddListenerOptions {
            capture: true,
            once: true,
            passive: true,
        });
        assert_eq!(back, ListenerOptions { capture: true });
    }
}
