//! # Unified Application Configuration
//!
//! This module consolidates the engine tunables, catalog locations and
//! observability settings into a single configuration object. Values are
//! loaded from environment variables, fall back to defaults, and are
//! validated before the engine is built.

use crate::errors::{AppError, AppResult};
use crate::observability_config::ObservabilityConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Tunables of the normalization and consolidation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum similarity for a consolidation rule variant to fold a phrase
    pub rule_similarity_threshold: f64,
    /// Minimum similarity for a fuzzy catalog match
    pub fuzzy_similarity_threshold: f64,
    /// Flat estimated cost of an ingredient the catalog does not know
    pub unmatched_item_cost: f64,
    /// Shelf life assumed for an ingredient the catalog does not know
    pub unmatched_shelf_life_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rule_similarity_threshold: 0.8,
            fuzzy_similarity_threshold: 0.75,
            unmatched_item_cost: 3.00,
            unmatched_shelf_life_days: 7,
        }
    }
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("Rule similarity threshold", self.rule_similarity_threshold),
            ("Fuzzy similarity threshold", self.fuzzy_similarity_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(AppError::Config(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        if !self.unmatched_item_cost.is_finite() || self.unmatched_item_cost < 0.0 {
            return Err(AppError::Config(
                "Unmatched item cost must be a non-negative number".to_string(),
            ));
        }

        if self.unmatched_shelf_life_days == 0 {
            return Err(AppError::Config(
                "Unmatched shelf life cannot be 0 days".to_string(),
            ));
        }

        Ok(())
    }
}

/// Where reference data is loaded from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Authoritative catalog JSON; the built-in table is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Legacy catalog compared against the authoritative one for drift
    pub legacy_catalog_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> AppResult<()> {
        for path in [&self.catalog_path, &self.legacy_catalog_path].into_iter().flatten() {
            if path.as_os_str().is_empty() {
                return Err(AppError::Config("Catalog path cannot be empty".to_string()));
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                return Err(AppError::Config(format!(
                    "Catalog path '{}' must point to a .json file",
                    path.display()
                )));
            }
        }

        if self.catalog_path.is_some() && self.catalog_path == self.legacy_catalog_path {
            return Err(AppError::Config(
                "Catalog and legacy catalog cannot be the same file".to_string(),
            ));
        }

        Ok(())
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Engine tunables
    pub engine: EngineConfig,
    /// Reference data locations
    pub catalog: CatalogConfig,
    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        // Load engine configuration
        config.engine.rule_similarity_threshold = env::var("GROCERY_RULE_SIMILARITY")
            .unwrap_or_else(|_| "0.8".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("GROCERY_RULE_SIMILARITY must be a valid number".to_string())
            })?;

        config.engine.fuzzy_similarity_threshold = env::var("GROCERY_FUZZY_SIMILARITY")
            .unwrap_or_else(|_| "0.75".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("GROCERY_FUZZY_SIMILARITY must be a valid number".to_string())
            })?;

        config.engine.unmatched_item_cost = env::var("GROCERY_UNMATCHED_COST")
            .unwrap_or_else(|_| "3.00".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("GROCERY_UNMATCHED_COST must be a valid number".to_string())
            })?;

        config.engine.unmatched_shelf_life_days = env::var("GROCERY_UNMATCHED_SHELF_LIFE_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config(
                    "GROCERY_UNMATCHED_SHELF_LIFE_DAYS must be a valid number".to_string(),
                )
            })?;

        // Load catalog locations
        config.catalog.catalog_path = env::var("GROCERY_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        config.catalog.legacy_catalog_path = env::var("GROCERY_LEGACY_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        // Load observability configuration
        config.observability = ObservabilityConfig::from_env();

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.engine.validate()?;
        self.catalog.validate()?;
        self.observability.validate()?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: rule_similarity={}, fuzzy_similarity={}, unmatched_cost={:.2}, unmatched_shelf_life_days={}, catalog={}, legacy_catalog={}, environment={}",
            self.engine.rule_similarity_threshold,
            self.engine.fuzzy_similarity_threshold,
            self.engine.unmatched_item_cost,
            self.engine.unmatched_shelf_life_days,
            self.catalog
                .catalog_path
                .as_ref()
                .map_or_else(|| "builtin".to_string(), |p| p.display().to_string()),
            self.catalog
                .legacy_catalog_path
                .as_ref()
                .map_or_else(|| "none".to_string(), |p| p.display().to_string()),
            self.observability.environment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_validation() {
        let mut config = EngineConfig::default();
        assert!(config.validate().is_ok());

        // Invalid: threshold outside (0, 1]
        config.rule_similarity_threshold = 1.5;
        assert!(config.validate().is_err());
        config.rule_similarity_threshold = 0.0;
        assert!(config.validate().is_err());
        config.rule_similarity_threshold = 0.8;

        config.fuzzy_similarity_threshold = f64::NAN;
        assert!(config.validate().is_err());
        config.fuzzy_similarity_threshold = 0.75;

        // Invalid: negative cost
        config.unmatched_item_cost = -1.0;
        assert!(config.validate().is_err());
        config.unmatched_item_cost = 3.0;

        // Invalid: zero shelf life
        config.unmatched_shelf_life_days = 0;
        assert!(config.validate().is_err());
        config.unmatched_shelf_life_days = 7;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_config_validation() {
        let mut config = CatalogConfig::default();
        assert!(config.validate().is_ok());

        // Invalid: not a JSON file
        config.catalog_path = Some(PathBuf::from("catalog.csv"));
        assert!(config.validate().is_err());

        config.catalog_path = Some(PathBuf::from("data/catalog.json"));
        assert!(config.validate().is_ok());

        // Invalid: same file twice
        config.legacy_catalog_path = Some(PathBuf::from("data/catalog.json"));
        assert!(config.validate().is_err());

        config.legacy_catalog_path = Some(PathBuf::from("data/legacy.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_summary_mentions_builtin_catalog() {
        let summary = AppConfig::default().summary();
        assert!(summary.contains("catalog=builtin"));
        assert!(summary.contains("legacy_catalog=none"));
    }
}
