use anyhow::{Context, Result};
use just_groceries::catalog;
use just_groceries::config::AppConfig;
use just_groceries::engine::GroceryEngine;
use just_groceries::errors::error_logging;
use just_groceries::list_builder::GroceryItem;
use just_groceries::meal_plan::MealPlan;
use just_groceries::observability::{self, metrics};
use std::env;
use std::fs;
use std::time::Instant;
use tracing::info;

const USAGE: &str = "usage: just-groceries <plan.json> [prior-list.json]";

/// Read a weekly meal plan from a JSON file
fn read_plan(path: &str) -> Result<MealPlan> {
    let content = fs::read_to_string(path)
        .inspect_err(|e| {
            error_logging::log_filesystem_error(e, "read_plan", Some(path));
            metrics::record_error_metrics("filesystem", "meal_plan");
        })
        .with_context(|| format!("cannot read meal plan {}", path))?;

    MealPlan::from_json_str(&content).map_err(|e| {
        error_logging::log_validation_error(
            &e,
            "parse_plan",
            "meal_plan",
            Some(content.as_str()),
        );
        metrics::record_error_metrics(e.kind(), "meal_plan");
        anyhow::anyhow!("invalid meal plan {}: {}", path, e)
    })
}

/// Read a previously generated list; both a bare item array and a full list are accepted
fn read_prior_items(path: &str) -> Result<Vec<GroceryItem>> {
    let content = fs::read_to_string(path)
        .inspect_err(|e| {
            error_logging::log_filesystem_error(e, "read_prior_list", Some(path));
            metrics::record_error_metrics("filesystem", "prior_list");
        })
        .with_context(|| format!("cannot read prior list {}", path))?;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum PriorFile {
        Items(Vec<GroceryItem>),
        List { items: Vec<GroceryItem> },
    }

    let prior: PriorFile = serde_json::from_str(&content)
        .inspect_err(|_| metrics::record_error_metrics("serialization", "prior_list"))
        .with_context(|| format!("invalid prior list {}", path))?;
    Ok(match prior {
        PriorFile::Items(items) | PriorFile::List { items } => items,
    })
}

fn main() -> Result<()> {
    let started = Instant::now();

    // Load environment variables from .env file first
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| {
        error_logging::log_config_error(&e, "environment", "load_config");
        metrics::record_error_metrics(e.kind(), "config");
        anyhow::anyhow!("{}", e)
    })?;

    observability::init_observability_with_config(&config.observability)?;

    config.validate().map_err(|e| {
        error_logging::log_config_error(&e, "app_config", "validate_config");
        metrics::record_error_metrics(e.kind(), "config");
        anyhow::anyhow!("Configuration validation failed: {}", e)
    })?;
    info!("{}", config.summary());

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(plan_path) = args.first() else {
        anyhow::bail!(USAGE);
    };
    if args.len() > 2 {
        anyhow::bail!(USAGE);
    }

    let loaded = catalog::load_configured(&config.catalog)?;
    info!(
        ingredients = loaded.catalog.len(),
        rules = loaded.catalog.rules().len(),
        drift = loaded.drift.len(),
        "Reference catalog ready"
    );

    let plan = read_plan(plan_path)?;
    let prior = match args.get(1) {
        Some(path) => Some(read_prior_items(path)?),
        None => None,
    };

    metrics::record_startup_metrics(started.elapsed());

    let engine = GroceryEngine::new(&loaded.catalog, config.engine.clone());
    let list = engine.generate_for_plan(&plan, prior.as_deref());

    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
