//! # Consolidator
//!
//! Aggregates ingredient lines from many recipes into one entry per canonical
//! ingredient, converting units where the catalog knows a factor.
//!
//! Handles cases like:
//! - "1 lb chicken breast" + "2 lb chicken" = 3 lb chicken (two sources, high priority)
//! - "1 cup milk" + "1 quart milk" = 5 cup milk (converted through the standard unit)
//! - "2 cloves garlic" + "1 head garlic" = 12 clove garlic (via the clove factor)
//!
//! When no factor is known for one of the units, the raw numbers are summed and
//! the entry is flagged with `mixed_units`. This is a known gap kept for
//! compatibility with existing lists; it is logged and counted.

use crate::catalog::{CanonicalIngredient, Category, Priority};
use crate::config::EngineConfig;
use crate::normalizer::capitalize;
use crate::observability::metrics;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// One ingredient line ready to be consolidated
#[derive(Debug, Clone)]
pub struct ConsolidationLine<'a> {
    /// Matched catalog ingredient, or `None` when unmatched
    pub ingredient: Option<&'a CanonicalIngredient>,
    /// Cleaned name used for unmatched grouping and display
    pub cleaned_name: String,
    /// Category for unmatched lines; matched lines use the catalog's
    pub fallback_category: Category,
    pub quantity: f64,
    pub unit: String,
    pub recipe_name: String,
    pub servings: f64,
    pub original_text: String,
}

/// Where part of an entry's quantity came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRef {
    pub recipe_name: String,
    /// Quantity after servings scaling, in the line's own unit
    pub quantity: f64,
    pub unit: String,
    pub original_text: String,
}

/// Aggregated quantity of one ingredient across a generation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedEntry {
    /// Display name ("Chicken", "Dragonfruit")
    pub base_ingredient: String,
    pub total_quantity: f64,
    pub unit: String,
    pub category: Category,
    pub priority: Priority,
    pub sources: Vec<SourceRef>,
    pub estimated_cost: f64,
    pub shelf_life_days: u32,
    /// Catalog base name when matched
    pub canonical_name: Option<String>,
    /// Set when a quantity was added without a conversion factor
    pub mixed_units: bool,
}

/// Groups lines by canonical ingredient and sums their quantities
#[derive(Debug, Clone)]
pub struct Consolidator {
    unmatched_item_cost: f64,
    unmatched_shelf_life_days: u32,
}

impl Consolidator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            unmatched_item_cost: config.unmatched_item_cost,
            unmatched_shelf_life_days: config.unmatched_shelf_life_days,
        }
    }

    /// Consolidate lines in first-occurrence order
    pub fn consolidate(&self, lines: &[ConsolidationLine<'_>]) -> Vec<ConsolidatedEntry> {
        let mut entries: Vec<ConsolidatedEntry> = Vec::new();
        let mut ingredients: Vec<Option<&CanonicalIngredient>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for line in lines {
            let quantity = line.quantity * effective_servings(line.servings);
            let source = SourceRef {
                recipe_name: line.recipe_name.clone(),
                quantity,
                unit: line.unit.clone(),
                original_text: line.original_text.clone(),
            };

            let key = group_key(line);
            match index.get(&key) {
                Some(&position) => {
                    let entry = &mut entries[position];
                    add_to_entry(entry, ingredients[position], quantity, &line.unit);
                    entry.sources.push(source);
                    if entry.sources.len() >= 2 {
                        entry.priority = Priority::High;
                    }
                }
                None => {
                    let (base_ingredient, category, canonical_name) = match line.ingredient {
                        Some(ingredient) => (
                            capitalize(&ingredient.base_name),
                            ingredient.category,
                            Some(ingredient.base_name.clone()),
                        ),
                        None => (capitalize(&line.cleaned_name), line.fallback_category, None),
                    };

                    index.insert(key, entries.len());
                    ingredients.push(line.ingredient);
                    entries.push(ConsolidatedEntry {
                        base_ingredient,
                        total_quantity: quantity,
                        unit: line.unit.clone(),
                        category,
                        priority: category.default_priority(),
                        sources: vec![source],
                        estimated_cost: 0.0,
                        shelf_life_days: line
                            .ingredient
                            .map_or(self.unmatched_shelf_life_days, |i| i.shelf_life_days),
                        canonical_name,
                        mixed_units: false,
                    });
                }
            }
        }

        for (entry, ingredient) in entries.iter_mut().zip(ingredients) {
            entry.estimated_cost = self.estimate_cost(entry, ingredient);
        }

        debug!(
            lines = lines.len(),
            entries = entries.len(),
            "Consolidated ingredient lines"
        );
        entries
    }

    /// Cost of an entry in its standard unit, rounded to cents
    fn estimate_cost(
        &self,
        entry: &ConsolidatedEntry,
        ingredient: Option<&CanonicalIngredient>,
    ) -> f64 {
        let cost = match ingredient {
            Some(ingredient) => {
                let standard = ingredient
                    .to_standard(entry.total_quantity, &entry.unit)
                    .unwrap_or(entry.total_quantity);
                standard * ingredient.average_cost
            }
            None => self.unmatched_item_cost,
        };
        round_cents(cost)
    }
}

/// Servings multiplier; non-positive or non-finite values count as one serving
pub fn effective_servings(servings: f64) -> f64 {
    if servings.is_finite() && servings > 0.0 {
        servings
    } else {
        1.0
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn group_key(line: &ConsolidationLine<'_>) -> String {
    match line.ingredient {
        Some(ingredient) => format!("catalog:{}", ingredient.base_name),
        None => format!("text:{}", capitalize(&line.cleaned_name)),
    }
}

fn add_to_entry(
    entry: &mut ConsolidatedEntry,
    ingredient: Option<&CanonicalIngredient>,
    quantity: f64,
    unit: &str,
) {
    if unit == entry.unit {
        entry.total_quantity += quantity;
        return;
    }

    match ingredient.and_then(|i| i.convert(quantity, unit, &entry.unit)) {
        Some(converted) => {
            debug!(
                ingredient = %entry.base_ingredient,
                from_unit = %unit,
                to_unit = %entry.unit,
                quantity,
                converted,
                "Converted quantity before merging"
            );
            entry.total_quantity += converted;
        }
        None => {
            warn!(
                ingredient = %entry.base_ingredient,
                from_unit = %unit,
                to_unit = %entry.unit,
                quantity,
                "No conversion factor, summing unconverted quantity"
            );
            metrics::record_unconverted_merge(unit, &entry.unit);
            entry.total_quantity += quantity;
            entry.mixed_units = true;
        }
    }
}
