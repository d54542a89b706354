//! Diagnostics for the command-line tool.
//!
//! The interpreter only emits `tracing` events; nothing is printed unless
//! the binary installs a subscriber here. Output goes to stderr so that
//! `run --json` stays machine readable on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`:
/// ```bash
/// RUST_LOG=turtle_dojo=debug turtle-dojo run square.py
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
