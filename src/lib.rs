//! # JustGroceries
//!
//! Turns free-text recipe ingredient lines into a normalized, deduplicated,
//! quantity-summed and categorized shopping list, with cost and shopping-time
//! estimates.
//!
//! Pipeline: text normalizer and quantity extractor, then the matcher against
//! the reference catalog, then the consolidator, and finally the list builder.

pub mod catalog;
pub mod categorizer;
pub mod config;
pub mod consolidator;
pub mod engine;
pub mod errors;
pub mod extractor;
pub mod list_builder;
pub mod matcher;
pub mod meal_plan;
pub mod normalizer;
pub mod observability;
pub mod observability_config;

// Re-export types for easier access
pub use catalog::{CanonicalIngredient, Catalog, Category, Priority};
pub use engine::GroceryEngine;
pub use list_builder::{GroceryItem, GroceryList};
pub use meal_plan::{MealPlan, RecipeInput};
