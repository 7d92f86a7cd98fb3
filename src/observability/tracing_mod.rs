//! Tracing and logging setup module.
//!
//! This module provides:
//! - Structured logging configuration
//! - Tracing span creation utilities

use anyhow::Result;
use tracing_subscriber::prelude::*;

use crate::observability_config::{LogFormat, ObservabilityConfig};

/// Initialize structured logging with tracing and configuration
///
/// Logs are written to stderr so stdout stays free for command output.
pub fn init_tracing_with_config(config: &ObservabilityConfig) -> Result<()> {
    // RUST_LOG directives win; the configured level applies to this crate
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("just_groceries={}", config.log_level.to_lowercase()).parse()?);

    match config.effective_log_format() {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_thread_names(false),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_thread_names(true),
                )
                .try_init()?;
        }
    }

    tracing::info!(
        environment = %config.environment,
        log_level = %config.log_level,
        metrics_enabled = config.enable_metrics,
        tags = ?config.tags,
        "Tracing initialized with structured logging"
    );
    Ok(())
}

/// Span wrapping one list generation
pub fn grocery_span(operation: &str, recipes: usize) -> tracing::Span {
    tracing::info_span!(
        "grocery_operation",
        operation = operation,
        recipes = recipes,
        component = "engine"
    )
}

/// Span wrapping catalog loading and drift checks
pub fn catalog_span(operation: &str, source: &str) -> tracing::Span {
    tracing::info_span!(
        "catalog_operation",
        operation = operation,
        source = source,
        component = "catalog"
    )
}
