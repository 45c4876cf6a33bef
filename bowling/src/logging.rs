//! Development-time tracing for debugging the scoring engine.
//!
//! The library only emits events: `debug` for recorded and rejected bowls,
//! `trace` for bonus pins pushed back to earlier frames. Binaries and tests
//! that want to see them call [`init`] once.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=bowling=trace cargo test -- --nocapture
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
