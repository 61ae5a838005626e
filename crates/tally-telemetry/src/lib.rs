//! # Tally Telemetry
//!
//! Observability for the Tally calculator service: structured logging and
//! process-wide request metrics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod metrics;

use std::sync::Arc;

use parking_lot::RwLock;

pub use logging::init_logging;
pub use metrics::RequestMetrics;

/// Global telemetry state.
static TELEMETRY: RwLock<Option<Arc<Telemetry>>> = RwLock::new(None);

/// Central telemetry manager.
pub struct Telemetry {
    /// Request metrics.
    pub metrics: RequestMetrics,
}

impl Telemetry {
    /// Initializes global telemetry.
    pub fn init() -> Arc<Self> {
        let telemetry = Arc::new(Self {
            metrics: RequestMetrics::default(),
        });

        *TELEMETRY.write() = Some(Arc::clone(&telemetry));
        telemetry
    }

    /// Returns the global telemetry instance.
    #[must_use]
    pub fn global() -> Option<Arc<Self>> {
        TELEMETRY.read().clone()
    }
}

/// Configuration for telemetry.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Service name, reported on startup.
    pub service_name: String,
    /// Log level.
    pub log_level: String,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// Creates a new telemetry configuration.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enables JSON logging.
    #[must_use]
    pub fn with_json_logs(mut self) -> Self {
        self.json_logs = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_builder() {
        let config = TelemetryConfig::new("tally")
            .with_log_level("debug")
            .with_json_logs();

        assert_eq!(config.service_name, "tally");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }

    #[test]
    fn test_global_telemetry() {
        let telemetry = Telemetry::init();
        telemetry.metrics.record_request();

        let global = Telemetry::global().unwrap();
        assert!(global.metrics.requests() >= 1);
    }
}
