//! # Simple logging listener for debugging and demos.
//!
//! [`LogListener`] records every event it receives through `tracing` at `info` level.
//!
//! ## Output format
//! ```text
//! INFO evtarget: event seq=3 at=SystemTime { tv_sec: 1760781600, tv_nsec: 0 } event_type="click" cancelable=true prevented=false detail=false
//! ```
//!
//! ## Example
//! ```no_run
//! # use evtarget::{EventRegistry, Listener, LogListener};
//! let registry = EventRegistry::new();
//! registry.add_event_listener("click", Some(Listener::handler(LogListener)), false);
//! ```

use tracing::info;

use crate::error::ListenerError;
use crate::events::Event;
use crate::listeners::HandleEvent;

/// Logging listener.
///
/// Enabled via the `logging` feature. Never fails and never prevents default.
///
/// Not intended for production use - implement a custom [`HandleEvent`] for
/// structured logging or metrics collection.
pub struct LogListener;

impl HandleEvent for LogListener {
    fn handle_event(&self, e: &Event) -> Result<(), ListenerError> {
        info!(
            seq = e.seq,
            at = ?e.at,
            event_type = e.event_type(),
            cancelable = e.cancelable(),
            prevented = e.default_prevented(),
            detail = e.has_detail(),
            "event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::{EventInit, EventRegistry, Listener};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_listener_is_transparent() {
        let registry = EventRegistry::new();
        registry.add_event_listener("click", Some(Listener::handler(LogListener)), false);

        let ev = Event::with_init(
            "click",
            EventInit {
                bubbles: false,
                cancelable: true,
            },
        );
        assert!(registry.dispatch_event(&ev).unwrap());
        assert!(!ev.default_prevented());
        assert_eq!(Listener::handler(LogListener).name(), "log");
    }

    #[test]
    fn test_log_record_carries_timestamp() {
        let out = Capture::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LogListener.handle_event(&Event::new("click")).unwrap();
        });

        let text = String::from_utf8(out.0.lock().clone()).unwrap();
        assert!(text.contains("at=SystemTime"), "{text}");
        assert!(text.contains("event_type=\"click\""), "{text}");
    }
}
