//! # Example: composed_target
//!
//! Demonstrates making a domain type observable by embedding an [`EventRegistry`].
//!
//! Shows how to:
//! - Implement [`EventTarget`] with a single accessor.
//! - Use the `on` / `off` / `emit` sugar with typed detail payloads.
//! - Configure a registry label and leak warning via [`RegistryConfig`].
//!
//! ## Flow
//! ```text
//! Thermostat { events: EventRegistry }
//!     ├─► on("reading", display)
//!     ├─► set(21.5) ──► emit("reading", 21.5) ──► display
//!     ├─► off("reading", display)
//!     └─► set(23.0) ──► emit("reading", 23.0) ──► (nobody)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=evtarget=debug cargo run --example composed_target
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use evtarget::{DispatchError, Event, EventRegistry, EventTarget, Listener, RegistryConfig};
use tracing_subscriber::EnvFilter;

struct Thermostat {
    celsius_bits: AtomicU64,
    events: EventRegistry,
}

impl Thermostat {
    fn new() -> Self {
        Self {
            celsius_bits: AtomicU64::new(0),
            events: EventRegistry::with_config(RegistryConfig {
                max_listeners: 4,
                ..RegistryConfig::labeled("thermostat")
            }),
        }
    }

    fn set(&self, celsius: f64) -> Result<(), DispatchError> {
        self.celsius_bits.store(celsius.to_bits(), Ordering::Relaxed);
        self.emit("reading", celsius)?;
        Ok(())
    }
}

impl EventTarget for Thermostat {
    fn event_registry(&self) -> &EventRegistry {
        &self.events
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let thermostat = Thermostat::new();
    let display = Listener::callable(|_, ev: &Event| {
        if let Some(c) = ev.detail::<f64>() {
            println!("[display] {c:.1} °C");
        }
        Ok(())
    });

    thermostat.on("reading", &display);
    thermostat.set(21.5)?;

    thermostat.off("reading", &display);
    thermostat.set(23.0)?;

    println!(
        "types known: {:?}, listeners on 'reading': {}",
        thermostat.event_registry().event_types(),
        thermostat.event_registry().listener_count("reading")
    );
    Ok(())
}
