//! Tracing setup for collaborator binaries.
//!
//! The engine itself only emits events; whichever presentation layer hosts
//! it decides where they go. This helper wires up a sensible default.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtered by `PROMPTSCOPE_LOG` (defaults
/// to `warn`). Later calls are no-ops, so tests and embedders can call it
/// freely.
pub fn init() {
    let filter =
        EnvFilter::try_from_env("PROMPTSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
