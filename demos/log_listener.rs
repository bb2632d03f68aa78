//! # Example: log_listener
//!
//! Attaches the built-in [`LogListener`] to a few event types.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogListener`].
//! ```bash
//! RUST_LOG=info cargo run --example log_listener --features logging
//! ```

use evtarget::{Event, EventInit, EventRegistry, Listener, LogListener};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let registry = EventRegistry::new();
    let log = Listener::handler(LogListener);
    for ty in ["open", "close"] {
        registry.add_event_listener(ty, Some(log.clone()), false);
    }

    registry.dispatch_event(&Event::new("open"))?;
    registry.dispatch_event(&Event::with_init(
        "close",
        EventInit {
            bubbles: true,
            cancelable: true,
        },
    ))?;
    registry.dispatch_event(&Event::custom("open", 42_u32))?;
    Ok(())
}
