//! # Example: prevent_default
//!
//! Demonstrates using the dispatch return value to skip a default action.
//!
//! Shows how to:
//! - Create cancelable events with [`EventInit`].
//! - Prevent the default either with `prevent_default()` or the legacy `set_return_value(false)`.
//! - Observe that later listeners still run after the default was prevented.
//!
//! ## Flow
//! ```text
//! dispatch(navigate "/admin")
//!     ├─► guard: path starts with /admin ─► prevent_default()
//!     ├─► audit (still runs)
//!     └─► false ─► caller skips navigation
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example prevent_default
//! ```

use evtarget::{Event, EventInit, EventRegistry, Listener};
use tracing_subscriber::EnvFilter;

fn navigate(registry: &EventRegistry, path: &'static str) -> Result<(), Box<dyn std::error::Error>> {
    let ev = Event::with_init(
        "navigate",
        EventInit {
            bubbles: false,
            cancelable: true,
        },
    )
    .with_detail(path);

    if registry.dispatch_event(&ev)? {
        println!("[router] navigating to {path}");
    } else {
        println!("[router] navigation to {path} was prevented");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = EventRegistry::new();

    registry.add_event_listener(
        "navigate",
        Some(Listener::callable(|_, ev: &Event| {
            if ev.detail::<&'static str>().is_some_and(|p| p.starts_with("/admin")) {
                ev.prevent_default();
            }
            Ok(())
        })),
        false,
    );
    registry.add_event_listener(
        "navigate",
        Some(Listener::callable(|_, ev: &Event| {
            if ev.detail::<&'static str>() == Some(&"/legacy") {
                ev.set_return_value(false);
            }
            Ok(())
        })),
        false,
    );
    registry.add_event_listener(
        "navigate",
        Some(Listener::callable(|_, ev: &Event| {
            println!("[audit] navigate prevented={}", ev.default_prevented());
            Ok(())
        })),
        false,
    );

    navigate(&registry, "/home")?;
    navigate(&registry, "/admin/users")?;
    navigate(&registry, "/legacy")?;
    Ok(())
}
