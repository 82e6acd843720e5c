//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Default directives when `RUST_LOG` is unset: the services at `info`,
/// sqlx statement logging quieted to warnings.
const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // JSON lines with targets, so swallowed store failures stay traceable
    // to the service that logged them.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(true)
        .try_init();
}
