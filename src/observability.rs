//! Observability module for logging and metrics setup.
//!
//! This module provides:
//! - Structured logging with configurable levels and formats
//! - Metrics recording through the `metrics` facade
//! - Environment-specific configuration support

pub mod metrics;
pub mod tracing_mod;

pub use self::tracing_mod::{catalog_span, grocery_span, init_tracing_with_config};

use anyhow::Result;

use crate::observability_config::ObservabilityConfig;

/// Initialize observability with a custom configuration
pub fn init_observability_with_config(config: &ObservabilityConfig) -> Result<()> {
    // Validate configuration
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid observability configuration: {}", e))?;

    init_tracing_with_config(config)?;
    self::metrics::set_metrics_enabled(config.enable_metrics);

    tracing::info!(
        environment = %config.environment,
        "Observability stack initialized successfully"
    );
    Ok(())
}
