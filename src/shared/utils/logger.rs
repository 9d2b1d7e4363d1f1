use log::{debug, info, LevelFilter};
use std::sync::Once;

use crate::shared::config::AppConfig;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger(config: &AppConfig) {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Warn) // Default level for dependencies
            .filter_module("clinicflow", config.log_level)
            .filter_module("tokio", LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!(
            "Logging system initialized ({} environment)",
            config.environment
        );
    });
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        info!("Performance: {} took {}ms", self.operation, duration);
        duration
    }
}
