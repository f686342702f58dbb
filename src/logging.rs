//! Diagnostic logging setup

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "ARBOR_LOG";

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so they never mix with the rendered tree on stdout.
/// Defaults to `warn` when `ARBOR_LOG` is unset or invalid.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = Registry::default().with(filter).with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        // A subscriber may already be set (e.g., tests).
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
