//! Metrics recording functions.
//!
//! Recording goes through the `metrics` facade. Without an installed recorder
//! every call is a no-op, so the engine can record unconditionally.
//! Recording can also be switched off process-wide.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static METRICS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enable or disable all metric recording in this process
pub fn set_metrics_enabled(enabled: bool) {
    METRICS_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn metrics_enabled() -> bool {
    METRICS_ENABLED.load(Ordering::Relaxed)
}

/// Record which matching stage resolved an ingredient line
///
/// `kind` is one of "rule", "key", "alias", "fuzzy" or "unmatched".
pub fn record_ingredient_match(kind: &'static str) {
    if !metrics_enabled() {
        return;
    }
    metrics::counter!("ingredient_matches_total", "kind" => kind).increment(1);
}

/// Record a merge where quantities were summed without a conversion factor
pub fn record_unconverted_merge(from_unit: &str, to_unit: &str) {
    if !metrics_enabled() {
        return;
    }
    let from_unit = from_unit.to_string();
    let to_unit = to_unit.to_string();
    metrics::counter!("unconverted_merges_total", "from" => from_unit, "to" => to_unit)
        .increment(1);
}

/// Record a finished list generation
pub fn record_list_generated(recipes: usize, lines: usize, items: usize, duration: Duration) {
    if !metrics_enabled() {
        return;
    }
    metrics::counter!("grocery_lists_generated_total").increment(1);
    metrics::histogram!("grocery_list_recipes").record(recipes as f64);
    metrics::histogram!("grocery_list_input_lines").record(lines as f64);
    metrics::histogram!("grocery_list_items").record(items as f64);
    metrics::histogram!("grocery_list_duration_seconds").record(duration.as_secs_f64());
}

/// Record how many prior items carried their checked state forward
pub fn record_prior_merge(carried: usize, prior_total: usize) {
    if !metrics_enabled() {
        return;
    }
    metrics::counter!("prior_items_carried_total").increment(carried as u64);
    metrics::histogram!("prior_list_size").record(prior_total as f64);
}

/// Record drift between the authoritative catalog and a legacy one
pub fn record_catalog_drift(drifted_fields: usize, missing_ingredients: usize) {
    if !metrics_enabled() {
        return;
    }
    metrics::gauge!("catalog_drift_fields").set(drifted_fields as f64);
    metrics::gauge!("catalog_missing_ingredients").set(missing_ingredients as f64);
}

/// Record error metrics
pub fn record_error_metrics(error_type: &str, component: &str) {
    if !metrics_enabled() {
        return;
    }
    let error_type = error_type.to_string();
    let component = component.to_string();
    metrics::counter!("errors_total", "type" => error_type, "component" => component).increment(1);
}

/// Record application startup time
pub fn record_startup_metrics(duration: Duration) {
    if !metrics_enabled() {
        return;
    }
    metrics::histogram!("application_startup_duration_seconds").record(duration.as_secs_f64());
    metrics::counter!("application_starts_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_ingredient_match("rule");
        record_unconverted_merge("clove", "head");
        record_list_generated(2, 10, 7, Duration::from_millis(3));
        record_prior_merge(1, 4);
        record_catalog_drift(0, 0);
        record_error_metrics("config", "startup");
        record_startup_metrics(Duration::from_millis(1));
    }
}
