//! Diagnostics setup for binaries built on this crate.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber filtered by `RUST_LOG`, `default_filter`
/// otherwise. Stdout is left to the messages themselves.
pub fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    // A second call (tests, embedding tools) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init();
}
