//! Logging initialization.
//!
//! One `tracing-subscriber` registry for the whole process: an [`EnvFilter`]
//! feeding either a compact formatter for terminals or a JSON formatter for
//! log collection. Tally emits plain events (request ids, expressions,
//! latencies), no spans, so no span-lifecycle events are configured.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::TelemetryConfig;

/// Initializes process-wide logging. Call once, before anything logs.
pub fn init_logging(config: &TelemetryConfig) {
    let registry = tracing_subscriber::registry().with(log_filter(&config.log_level));

    if config.json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact().with_target(true)).init();
    }

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );
}

/// Builds the log filter; `RUST_LOG` takes precedence over the configured
/// level.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
