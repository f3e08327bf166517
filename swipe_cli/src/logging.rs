//! Tracing setup for the CLI.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// Reads `SWIPE_LOG` (for example `SWIPE_LOG=swipe_core=debug`), falling back
/// to `warn`. Output goes to stderr so it never mixes with REPL output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SWIPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();
}
