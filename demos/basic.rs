//! # Example: basic
//!
//! Minimal example of subscribing closures, dispatching, and unsubscribing.
//!
//! Demonstrates how to:
//! - Wrap closures with [`Listener::callable`].
//! - Subscribe them with [`EventRegistry::add_event_listener`].
//! - Dispatch an [`Event`] and observe registration order.
//! - Remove a listener by identity.
//!
//! ## Flow
//! ```text
//! add("greet", first) ─► add("greet", second)
//!     ├─► dispatch(greet) ─► first, second   ─► true
//!     ├─► remove("greet", first)
//!     └─► dispatch(greet) ─► second          ─► true
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=evtarget=trace cargo run --example basic
//! ```

use evtarget::{Event, EventRegistry, Listener};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1. Registry with default configuration
    let registry = EventRegistry::new();

    // 2. Two closures; keep clones so they can be removed later
    let first = Listener::callable(|_, ev: &Event| {
        println!("[first]  got '{}' (seq={})", ev.event_type(), ev.seq);
        Ok(())
    });
    let second = Listener::callable(|_, ev: &Event| {
        println!("[second] got '{}' (seq={})", ev.event_type(), ev.seq);
        Ok(())
    });

    registry.add_event_listener("greet", Some(first.clone()), false);
    registry.add_event_listener("greet", Some(second), false);

    // 3. Both listeners run, in order
    let proceed = registry.dispatch_event(&Event::new("greet"))?;
    println!("dispatch returned {proceed}");

    // 4. Remove the first one; only the second runs now
    registry.remove_event_listener("greet", Some(&first), false);
    let proceed = registry.dispatch_event(&Event::new("greet"))?;
    println!("dispatch returned {proceed}");

    // 5. Nobody listens to this type: vacuously true
    let proceed = registry.dispatch_event(&Event::new("unknown"))?;
    println!("dispatch to unknown type returned {proceed}");

    Ok(())
}
