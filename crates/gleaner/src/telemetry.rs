// ABOUTME: Tracing subscriber setup shared by the gleaner binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`, or `default_filter` when unset.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
