//! # Example: handler_object
//!
//! Demonstrates how to build and attach a stateful, object-shaped listener.
//!
//! Shows how to:
//! - Implement the [`HandleEvent`] trait.
//! - Register the same `Arc` as a [`Listener`] and remove it again.
//! - Surface a listener failure as a [`DispatchError`](evtarget::DispatchError).
//!
//! ## Flow
//! ```text
//! Arc<Counter> ──► Listener::from(arc) ──► add("tick")
//!     ├─► dispatch(tick) x3 ──► Counter::handle_event()
//!     ├─► dispatch(tick, detail="stop") ──► Err ──► dispatch aborted
//!     └─► remove("tick", Listener::from(arc))
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example handler_object
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use evtarget::{Event, EventRegistry, HandleEvent, Listener, ListenerError};
use tracing_subscriber::EnvFilter;

/// Counts ticks; refuses ticks that carry a "stop" detail.
#[derive(Default)]
struct Counter {
    ticks: AtomicU32,
}

impl HandleEvent for Counter {
    fn handle_event(&self, event: &Event) -> Result<(), ListenerError> {
        if event.detail::<&'static str>() == Some(&"stop") {
            return Err(ListenerError::fail("counter refuses to stop"));
        }
        let n = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        println!("[counter] tick #{n}");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "counter"
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = EventRegistry::new();
    let counter = Arc::new(Counter::default());

    registry.add_event_listener("tick", Some(Listener::from(Arc::clone(&counter))), false);

    for _ in 0..3 {
        registry.dispatch_event(&Event::new("tick"))?;
    }

    match registry.dispatch_event(&Event::custom("tick", "stop")) {
        Ok(_) => println!("unexpected: dispatch succeeded"),
        Err(err) => println!("[dispatch] {} ({})", err, err.as_label()),
    }

    // Same Arc, same listener: removal works without keeping the first wrapper.
    registry.remove_event_listener("tick", Some(&Listener::from(Arc::clone(&counter))), false);
    registry.dispatch_event(&Event::new("tick"))?;

    println!("total ticks: {}", counter.ticks.load(Ordering::Relaxed));
    Ok(())
}
