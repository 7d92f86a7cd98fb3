//! # Grocery Engine
//!
//! Entry points used by callers: turning recipes into a consolidated shopping
//! list, and categorizing free ingredient text.
//!
//! The engine borrows an immutable [`Catalog`] and owns no other state, so one
//! catalog can back any number of engines on any number of threads.
//!
//! ```rust
//! use just_groceries::catalog::{Catalog, Category};
//! use just_groceries::config::EngineConfig;
//! use just_groceries::engine::GroceryEngine;
//! use just_groceries::meal_plan::RecipeInput;
//!
//! let catalog = Catalog::builtin();
//! let engine = GroceryEngine::new(&catalog, EngineConfig::default());
//!
//! let recipes = vec![RecipeInput::new(
//!     "Fried Rice",
//!     2.0,
//!     vec!["2 cups of cooked rice".to_string()],
//! )];
//! let list = engine.generate_grocery_list(&recipes, None);
//!
//! assert_eq!(list.items[0].name, "Rice");
//! assert_eq!(list.items[0].quantity_display, "4 cups");
//! assert_eq!(list.items[0].category, Category::GrainsPasta);
//! ```

use crate::catalog::{Catalog, Category};
use crate::categorizer::categorize;
use crate::config::EngineConfig;
use crate::consolidator::{ConsolidationLine, Consolidator};
use crate::extractor::{extract_quantity, ParsedLine};
use crate::list_builder::{build_items, merge_prior, sort_items, GroceryItem, GroceryList};
use crate::matcher::{IngredientMatch, Matcher};
use crate::meal_plan::{MealPlan, RecipeInput};
use crate::observability::{grocery_span, metrics};
use std::time::Instant;
use tracing::{debug, info};

/// Normalization and consolidation engine over a borrowed catalog
#[derive(Debug, Clone)]
pub struct GroceryEngine<'a> {
    catalog: &'a Catalog,
    config: EngineConfig,
    matcher: Matcher<'a>,
    consolidator: Consolidator,
}

impl<'a> GroceryEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: EngineConfig) -> Self {
        let matcher = Matcher::new(catalog, &config);
        let consolidator = Consolidator::new(&config);
        Self {
            catalog,
            config,
            matcher,
            consolidator,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse a raw line and match it, folding the cleaned name through the rules
    fn parse_line(&self, raw: &str) -> (ParsedLine, Option<IngredientMatch<'a>>) {
        let mut parsed = extract_quantity(raw);
        let matched = self.matcher.find(&parsed.cleaned_name);
        parsed.cleaned_name = self.matcher.resolve_name(&parsed.cleaned_name);
        (parsed, matched)
    }

    /// Extract quantity, unit and the rule-resolved cleaned name from raw text
    ///
    /// Text without a leading number yields quantity 1 and unit "piece".
    pub fn extract(&self, raw: &str) -> ParsedLine {
        self.parse_line(raw).0
    }

    /// Match a cleaned ingredient name against the catalog
    pub fn match_ingredient(&self, cleaned_name: &str) -> Option<IngredientMatch<'a>> {
        self.matcher.find(cleaned_name)
    }

    /// Category of free ingredient text
    ///
    /// Uses the catalog when the text matches, the keyword table otherwise.
    pub fn categorize_ingredient(&self, text: &str) -> Category {
        let (parsed, matched) = self.parse_line(text);
        match matched {
            Some(m) => m.ingredient.category,
            None => categorize(&parsed.cleaned_name),
        }
    }

    /// Build a consolidated shopping list from recipes
    ///
    /// When `prior` is given, items matching a prior item by name keep its
    /// checked state and id. An empty recipe set gives an empty list.
    pub fn generate_grocery_list(
        &self,
        recipes: &[RecipeInput],
        prior: Option<&[GroceryItem]>,
    ) -> GroceryList {
        let started = Instant::now();
        let span = grocery_span("generate_grocery_list", recipes.len());
        let _guard = span.enter();

        let mut lines: Vec<ConsolidationLine<'a>> = Vec::new();
        for recipe in recipes {
            for raw in &recipe.ingredient_lines {
                if raw.trim().is_empty() {
                    continue;
                }

                let (parsed, matched) = self.parse_line(raw);
                if parsed.cleaned_name.is_empty() {
                    debug!(
                        recipe = %recipe.name,
                        raw = %raw,
                        "Ingredient text collapsed to nothing, skipping"
                    );
                    continue;
                }

                metrics::record_ingredient_match(matched.map_or("unmatched", |m| m.kind.as_str()));

                let fallback_category = match matched {
                    Some(m) => m.ingredient.category,
                    None => categorize(&parsed.cleaned_name),
                };

                lines.push(ConsolidationLine {
                    ingredient: matched.map(|m| m.ingredient),
                    cleaned_name: parsed.cleaned_name,
                    fallback_category,
                    quantity: parsed.quantity,
                    unit: parsed.unit,
                    recipe_name: recipe.name.clone(),
                    servings: recipe.servings,
                    original_text: raw.trim().to_string(),
                });
            }
        }

        let entries = self.consolidator.consolidate(&lines);
        let mut items = build_items(&entries);

        if let Some(prior) = prior {
            let carried = merge_prior(&mut items, prior);
            metrics::record_prior_merge(carried, prior.len());
        }

        sort_items(&mut items);
        let list = GroceryList::from_items(items);

        let elapsed = started.elapsed();
        metrics::record_list_generated(recipes.len(), lines.len(), list.items.len(), elapsed);
        info!(
            recipes = recipes.len(),
            lines = lines.len(),
            items = list.items.len(),
            estimated_minutes = list.estimated_shopping_time_minutes,
            estimated_cost = list.estimated_total_cost,
            duration_ms = elapsed.as_millis() as u64,
            "Generated grocery list"
        );

        list
    }

    /// Build a shopping list for every meal of a weekly plan
    pub fn generate_for_plan(&self, plan: &MealPlan, prior: Option<&[GroceryItem]>) -> GroceryList {
        self.generate_grocery_list(&plan.to_recipes(), prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Priority;
    use crate::matcher::MatchKind;

    fn recipe(name: &str, servings: f64, lines: &[&str]) -> RecipeInput {
        RecipeInput::new(name, servings, lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_extract_pinch_of_salt() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        let parsed = engine.extract("pinch of salt");
        assert_eq!(parsed.quantity, 0.125);
        assert_eq!(parsed.unit, "tsp");
        assert_eq!(parsed.display_name(), "Salt");
    }

    #[test]
    fn test_extract_folds_rule_variants() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        let parsed = engine.extract("1 cup plain greek yogurt");
        assert_eq!(parsed.cleaned_name, "greek yogurt");

        let parsed = engine.extract("2 tsp kosher salt");
        assert_eq!(parsed.cleaned_name, "salt");
    }

    #[test]
    fn test_match_ingredient_reports_stage() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        let m = engine.match_ingredient("sea salt").unwrap();
        assert_eq!(m.kind, MatchKind::Rule);
        assert!(engine.match_ingredient("dragonfruit").is_none());
    }

    #[test]
    fn test_categorize_ingredient() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        assert_eq!(engine.categorize_ingredient("2 lb salmon fillets"), Category::Seafood);
        assert_eq!(engine.categorize_ingredient("1 cup kale, chopped"), Category::Produce);
        assert_eq!(engine.categorize_ingredient("xanthan gum"), Category::General);
    }

    #[test]
    fn test_consolidates_across_recipes() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        let list = engine.generate_grocery_list(
            &[
                recipe("Stir Fry", 1.0, &["1 lb chicken breast", "1 tbsp soy sauce"]),
                recipe("Soup", 1.0, &["2 lb chicken", "", "   "]),
            ],
            None,
        );

        let chicken = list.items.iter().find(|i| i.name == "Chicken").unwrap();
        assert_eq!(chicken.quantity_display, "3 lbs");
        assert_eq!(chicken.priority, Priority::High);
        assert_eq!(chicken.from_recipes, vec!["Stir Fry", "Soup"]);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn test_empty_recipe_set() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        let list = engine.generate_grocery_list(&[], None);
        assert!(list.items.is_empty());
        assert_eq!(list.estimated_total_cost, 0.0);
        assert_eq!(list.estimated_shopping_time_minutes, 15);
    }
}
