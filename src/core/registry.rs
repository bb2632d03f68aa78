//! # Event registry - ordered listener storage and synchronous dispatch.
//!
//! [`EventRegistry`] maps an event-type name to the ordered list of listeners
//! subscribed to it and notifies them, in registration order, on dispatch.
//!
//! ## Architecture
//! ```text
//! add_event_listener(type, l) ──► listeners[type].push(l)      (key created lazily)
//! remove_event_listener(type, l) ─► listeners[type].retain(!= l) (all occurrences)
//!
//! dispatch_event(&Event)
//!   ├─► no key for event.type ──► Ok(true)
//!   ├─► snapshot = listeners[type].clone()      (lock released here)
//!   ├─► for l in snapshot: l.invoke(self, ev)?  (fail-fast)
//!   └─► Ok(!ev.default_prevented())
//! ```
//!
//! ## Rules
//! - Keys are created on the first subscribe (even for an absent listener) and never removed.
//! - No deduplication: the same listener added twice runs twice.
//! - Removal is by identity and removes every occurrence.
//! - The lock is never held while a listener runs, so listeners may subscribe,
//!   unsubscribe or dispatch (recursively, on the same registry) during a dispatch.
//!   Those changes only affect later dispatches.
//! - Preventing default does not stop the remaining listeners.
//! - The first listener error aborts the dispatch and is returned to the caller.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::core::RegistryConfig;
use crate::error::DispatchError;
use crate::events::Event;
use crate::listeners::{AddListenerOptions, Listener, ListenerOptions};

#[derive(Default)]
struct State {
    listeners: HashMap<String, Vec<Listener>>,
    /// Types that already produced a leak warning.
    warned: HashSet<String>,
}

/// Registry of listeners keyed by event type.
///
/// All methods take `&self`; see the module docs for reentrancy rules.
pub struct EventRegistry {
    state: Mutex<State>,
    cfg: RegistryConfig,
}

impl EventRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(cfg: RegistryConfig) -> Self {
        Self {
            state: Mutex::new(State::default()),
            cfg,
        }
    }

    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.cfg
    }

    /// Subscribes `listener` to `event_type`.
    ///
    /// Creates the type key if absent. `None` only creates the key. The listener is
    /// appended even if it is already present. `options` are accepted and ignored.
    pub fn add_event_listener(
        &self,
        event_type: &str,
        listener: Option<Listener>,
        options: impl Into<AddListenerOptions>,
    ) {
        let options = options.into();
        if options.has_unhonored() {
            trace!(
                registry = %self.cfg.label,
                event_type,
                once = options.once,
                passive = options.passive,
                "listener options accepted but not honored"
            );
        }

        let (count, first_overflow) = {
            let mut state = self.state.lock();
            let State { listeners, warned } = &mut *state;

            let list = listeners.entry(event_type.to_owned()).or_default();
            let Some(listener) = listener else {
                return;
            };
            list.push(listener);

            let count = list.len();
            let first_overflow = match self.cfg.listener_warning_threshold() {
                Some(max) if count > max => warned.insert(event_type.to_owned()),
                _ => false,
            };
            (count, first_overflow)
        };

        debug!(registry = %self.cfg.label, event_type, count, "listener added");
        if first_overflow {
            warn!(
                registry = %self.cfg.label,
                event_type,
                count,
                max = self.cfg.max_listeners,
                "possible listener leak: listener count exceeds max_listeners"
            );
        }
    }

    /// Unsubscribes every occurrence of `listener` (by identity) from `event_type`.
    ///
    /// No-op if the type key does not exist or `listener` is `None`. The key stays
    /// even if its list becomes empty. `options` are accepted and ignored.
    pub fn remove_event_listener(
        &self,
        event_type: &str,
        listener: Option<&Listener>,
        _options: impl Into<ListenerOptions>,
    ) {
        let Some(listener) = listener else {
            return;
        };

        let (removed, count) = {
            let mut state = self.state.lock();
            let Some(list) = state.listeners.get_mut(event_type) else {
                return;
            };
            let before = list.len();
            list.retain(|l| !l.same(listener));
            (before - list.len(), list.len())
        };

        if removed > 0 {
            debug!(registry = %self.cfg.label, event_type, removed, count, "listener removed");
        }
    }

    /// Dispatches `event` to the listeners of its type.
    ///
    /// Returns `Ok(true)` if no listener prevented the default action (including when
    /// no listener is registered), `Ok(false)` otherwise.
    ///
    /// # Errors
    /// [`DispatchError::ListenerFailed`] when a listener returns an error; the listeners
    /// after it are not invoked.
    pub fn dispatch_event(&self, event: &Event) -> Result<bool, DispatchError> {
        let snapshot = match self.state.lock().listeners.get(event.event_type()) {
            Some(list) => list.clone(),
            None => {
                trace!(registry = %self.cfg.label, event_type = event.event_type(), "no listeners");
                return Ok(true);
            }
        };

        trace!(
            registry = %self.cfg.label,
            event_type = event.event_type(),
            seq = event.seq,
            listeners = snapshot.len(),
            "dispatching"
        );

        for (index, listener) in snapshot.iter().enumerate() {
            if let Err(source) = listener.invoke(self, event) {
                warn!(
                    registry = %self.cfg.label,
                    event_type = event.event_type(),
                    index,
                    listener = %listener.name(),
                    error = %source,
                    "listener failed; dispatch aborted"
                );
                return Err(DispatchError::ListenerFailed {
                    event_type: event.event_type_arc(),
                    index,
                    listener: listener.name(),
                    source,
                });
            }
        }

        let prevented = event.default_prevented();
        trace!(
            registry = %self.cfg.label,
            event_type = event.event_type(),
            seq = event.seq,
            prevented,
            "dispatched"
        );
        Ok(!prevented)
    }

    /// Snapshot of the listeners for `event_type`.
    ///
    /// `None` if the type was never subscribed to; `Some(vec![])` once emptied.
    pub fn listeners(&self, event_type: &str) -> Option<Vec<Listener>> {
        self.state.lock().listeners.get(event_type).cloned()
    }

    /// Number of listener entries for `event_type` (duplicates counted).
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.state
            .lock()
            .listeners
            .get(event_type)
            .map_or(0, Vec::len)
    }

    #[inline]
    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.listener_count(event_type) > 0
    }

    /// All known type keys, sorted. Includes types whose list is empty.
    pub fn event_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.state.lock().listeners.keys().cloned().collect();
        types.sort_unstable();
        types
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("label", &self.cfg.label)
            .field("types", &self.state.lock().listeners.len())
            .finish()
    }
}
