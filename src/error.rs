//! Error types used by listeners and the dispatch core.
//!
//! This module defines two error enums:
//!
//! - [`ListenerError`]: failures reported by an individual listener.
//! - [`DispatchError`]: the failure surfaced by [`EventRegistry::dispatch_event`](crate::EventRegistry::dispatch_event)
//!   when a listener fails (fail-fast: the remaining listeners do not run).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Absent listeners and unknown event types are never errors.

use std::sync::Arc;

use thiserror::Error;

/// # Errors produced by a listener.
///
/// Returned from a callable listener or from [`HandleEvent::handle_event`](crate::HandleEvent::handle_event).
/// The registry never swallows it: it aborts the dispatch and reaches the caller
/// wrapped in [`DispatchError::ListenerFailed`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ListenerError {
    /// Listener reported a failure with a message.
    #[error("listener failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Listener failed with a foreign error.
    #[error(transparent)]
    Source(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ListenerError {
    /// Creates a [`ListenerError::Fail`] from any message.
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evtarget::ListenerError;
    ///
    /// let err = ListenerError::fail("boom");
    /// assert_eq!(err.as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Source(_) => "listener_error",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
            ListenerError::Source(err) => format!("source: {err}"),
        }
    }
}

impl From<&str> for ListenerError {
    fn from(error: &str) -> Self {
        ListenerError::fail(error)
    }
}

impl From<String> for ListenerError {
    fn from(error: String) -> Self {
        ListenerError::Fail { error }
    }
}

/// # Errors produced by dispatching an event.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener failed; listeners after it were not invoked.
    #[error("listener #{index} ({listener}) for '{event_type}' failed: {source}")]
    ListenerFailed {
        /// Type of the event being dispatched.
        event_type: Arc<str>,
        /// Position of the failing listener in the dispatch snapshot (0-based).
        index: usize,
        /// Diagnostic name of the failing listener.
        listener: &'static str,
        /// The error returned by the listener.
        #[source]
        source: ListenerError,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::ListenerFailed { .. } => "dispatch_listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::ListenerFailed {
                event_type,
                index,
                listener,
                source,
            } => format!(
                "type={event_type} index={index} listener={listener} {}",
                source.as_message()
            ),
        }
    }

    /// Returns the listener error that aborted the dispatch.
    pub fn listener_error(&self) -> &ListenerError {
        match self {
            DispatchError::ListenerFailed { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_error_from_str_is_fail() {
        let err: ListenerError = "boom".into();
        assert!(matches!(&err, ListenerError::Fail { error } if error == "boom"));
        assert_eq!(err.to_string(), "listener failed: boom");
        assert_eq!(err.as_message(), "error: boom");
    }

    #[test]
    fn test_listener_error_wraps_foreign_error() {
        let io = std::io::Error::other("disk gone");
        let err = ListenerError::from(Box::new(io) as Box<dyn std::error::Error + Send + Sync>);
        assert_eq!(err.as_label(), "listener_error");
        assert_eq!(err.to_string(), "disk gone");
    }

    #[test]
    fn test_dispatch_error_labels_and_source() {
        let err = DispatchError::ListenerFailed {
            event_type: Arc::from("foo"),
            index: 2,
            listener: "callable",
            source: ListenerError::fail("nope"),
        };
        assert_eq!(err.as_label(), "dispatch_listener_failed");
        assert_eq!(
            err.to_string(),
            "listener #2 (callable) for 'foo' failed: listener failed: nope"
        );
        assert_eq!(err.as_message(), "type=foo index=2 listener=callable error: nope");
        assert_eq!(err.listener_error().as_label(), "listener_failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
