//! # List Builder / Estimator
//!
//! Turns consolidated entries into shopping-list items, carries checked state
//! forward from a previously saved list, and estimates shopping time and cost.

use crate::catalog::{Category, Priority};
use crate::consolidator::{round_cents, ConsolidatedEntry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Fixed overhead of a shopping trip, in minutes
const BASE_SHOPPING_MINUTES: f64 = 8.0;
/// Extra minutes per distinct category (walking between sections)
const MINUTES_PER_CATEGORY: f64 = 2.0;
/// Extra minutes per high-priority item (picking carefully)
const MINUTES_PER_HIGH_PRIORITY: f64 = 0.3;
/// Shortest trip ever estimated
const MIN_SHOPPING_MINUTES: u32 = 15;

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    /// "3 lbs", "0.5 cup", "As needed"
    pub quantity_display: String,
    pub category: Category,
    #[serde(default)]
    pub from_recipes: Vec<String>,
    #[serde(default)]
    pub is_checked: bool,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub shelf_life_days: u32,
    #[serde(default)]
    pub store_section: String,
}

/// A generated shopping list with its estimates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
    pub estimated_shopping_time_minutes: u32,
    pub estimated_total_cost: f64,
}

impl GroceryList {
    /// Assemble a list from finished items, computing both estimates
    pub fn from_items(items: Vec<GroceryItem>) -> Self {
        let estimated_shopping_time_minutes = estimate_shopping_time(&items);
        let estimated_total_cost = total_cost(&items);
        Self {
            items,
            estimated_shopping_time_minutes,
            estimated_total_cost,
        }
    }

    /// Items grouped by category, in store order
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&GroceryItem>> {
        let mut groups: BTreeMap<Category, Vec<&GroceryItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.category).or_default().push(item);
        }
        groups
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_checked).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build unsorted items from consolidated entries
pub fn build_items(entries: &[ConsolidatedEntry]) -> Vec<GroceryItem> {
    let mut used_ids: HashSet<String> = HashSet::new();

    entries
        .iter()
        .map(|entry| {
            let mut from_recipes: Vec<String> = Vec::new();
            for source in &entry.sources {
                if !from_recipes.contains(&source.recipe_name) {
                    from_recipes.push(source.recipe_name.clone());
                }
            }

            GroceryItem {
                id: unique_id(item_id(&entry.base_ingredient), &mut used_ids),
                name: entry.base_ingredient.clone(),
                quantity_display: format_quantity(entry.total_quantity, &entry.unit),
                category: entry.category,
                from_recipes,
                is_checked: false,
                priority: entry.priority,
                estimated_cost: entry.estimated_cost,
                shelf_life_days: entry.shelf_life_days,
                store_section: entry.category.store_section().to_string(),
            }
        })
        .collect()
}

/// Render a quantity with its unit
///
/// # Examples
///
/// ```rust
/// use just_groceries::list_builder::format_quantity;
///
/// assert_eq!(format_quantity(3.0, "lb"), "3 lbs");
/// assert_eq!(format_quantity(1.0, "cup"), "1 cup");
/// assert_eq!(format_quantity(0.5, "cup"), "0.5 cup");
/// assert_eq!(format_quantity(2.25, "tbsp"), "2.3 tbsp");
/// assert_eq!(format_quantity(1.0, "serving"), "As needed");
/// ```
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    if quantity == 1.0 && unit == "serving" {
        return "As needed".to_string();
    }

    let rounded = (quantity * 10.0).round() / 10.0;
    let number = if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    };

    let unit = if rounded > 1.0 {
        pluralize_unit(unit)
    } else {
        unit.to_string()
    };

    format!("{} {}", number, unit)
}

fn pluralize_unit(unit: &str) -> String {
    match unit {
        "oz" | "g" | "kg" | "ml" | "l" | "tsp" | "tbsp" | "dozen" => unit.to_string(),
        "loaf" => "loaves".to_string(),
        "box" | "bunch" => format!("{}es", unit),
        _ if unit.ends_with('s') || unit.is_empty() => unit.to_string(),
        _ => format!("{}s", unit),
    }
}

/// Deterministic id for a display name ("Olive oil" -> "grocery-olive-oil")
pub fn item_id(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "grocery-item".to_string()
    } else {
        format!("grocery-{}", slug)
    }
}

fn unique_id(id: String, used: &mut HashSet<String>) -> String {
    if used.insert(id.clone()) {
        return id;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", id, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Carry `is_checked` and `id` from a prior list onto matching new items
///
/// Every new item looks for a prior item with the same (case-insensitive)
/// name, falling back to the first prior name where either contains the
/// other. All matching items take the prior checked state. A prior id goes
/// to one item only: exact matches first, then the first containment match.
/// Returns how many new items matched a prior item.
pub fn merge_prior(items: &mut [GroceryItem], prior: &[GroceryItem]) -> usize {
    let prior_names: Vec<String> = prior.iter().map(|p| p.name.trim().to_lowercase()).collect();

    let matches: Vec<Option<(usize, bool)>> = items
        .iter()
        .map(|item| {
            let name = item.name.trim().to_lowercase();
            if name.is_empty() {
                return None;
            }
            let candidates = || prior_names.iter().enumerate().filter(|(_, old)| !old.is_empty());
            candidates()
                .find(|(_, old)| **old == name)
                .map(|(i, _)| (i, true))
                .or_else(|| {
                    candidates()
                        .find(|(_, old)| name.contains(old.as_str()) || old.contains(name.as_str()))
                        .map(|(i, _)| (i, false))
                })
        })
        .collect();

    let mut id_taken = vec![false; prior.len()];
    for exact_pass in [true, false] {
        for (item, found) in items.iter_mut().zip(&matches) {
            let Some((i, exact)) = *found else {
                continue;
            };
            if exact != exact_pass {
                continue;
            }
            item.is_checked = prior[i].is_checked;
            if !id_taken[i] && !prior[i].id.trim().is_empty() {
                item.id = prior[i].id.clone();
                id_taken[i] = true;
            }
        }
    }
    let carried = matches.iter().filter(|m| m.is_some()).count();

    // A carried id may collide with a freshly generated one
    let mut used: HashSet<String> = HashSet::new();
    for item in items.iter_mut() {
        item.id = unique_id(std::mem::take(&mut item.id), &mut used);
    }

    debug!(carried, prior = prior.len(), "Merged prior list state");
    carried
}

/// Order items by category, then priority (high first), then name
pub fn sort_items(items: &mut [GroceryItem]) {
    items.sort_by(|a, b| {
        a.category
            .sort_index()
            .cmp(&b.category.sort_index())
            .then(a.priority.cmp(&b.priority))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

/// Estimated shopping time in minutes
///
/// `8 + 2 x categories + per-item category time + 0.3 x high-priority items`,
/// rounded to the nearest 5 and never below 15.
pub fn estimate_shopping_time(items: &[GroceryItem]) -> u32 {
    let categories: HashSet<Category> = items.iter().map(|item| item.category).collect();
    let item_minutes: f64 = items.iter().map(|item| item.category.item_minutes()).sum();
    let high_priority = items
        .iter()
        .filter(|item| item.priority == Priority::High)
        .count();

    let minutes = BASE_SHOPPING_MINUTES
        + MINUTES_PER_CATEGORY * categories.len() as f64
        + item_minutes
        + MINUTES_PER_HIGH_PRIORITY * high_priority as f64;

    let rounded = ((minutes / 5.0).round() * 5.0) as u32;
    rounded.max(MIN_SHOPPING_MINUTES)
}

/// Sum of item cost estimates, rounded to cents
pub fn total_cost(items: &[GroceryItem]) -> f64 {
    round_cents(items.iter().map(|item| item.estimated_cost).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: Category, priority: Priority) -> GroceryItem {
        GroceryItem {
            id: item_id(name),
            name: name.to_string(),
            quantity_display: "1 piece".to_string(),
            category,
            from_recipes: vec!["Test".to_string()],
            is_checked: false,
            priority,
            estimated_cost: 1.25,
            shelf_life_days: 7,
            store_section: category.store_section().to_string(),
        }
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(4.0, "cup"), "4 cups");
        assert_eq!(format_quantity(0.125, "tsp"), "0.1 tsp");
        assert_eq!(format_quantity(12.0, "piece"), "12 pieces");
        assert_eq!(format_quantity(2.0, "bunch"), "2 bunches");
        assert_eq!(format_quantity(2.0, "loaf"), "2 loaves");
        assert_eq!(format_quantity(2.0, "dozen"), "2 dozen");
        assert_eq!(format_quantity(1.96, "cup"), "2 cups");
        assert_eq!(format_quantity(1.04, "cup"), "1 cup");
        assert_eq!(format_quantity(1.02, "piece"), "1 piece");
        assert_eq!(format_quantity(2.0, "serving"), "2 servings");
    }

    #[test]
    fn test_item_id_slug() {
        assert_eq!(item_id("Olive oil"), "grocery-olive-oil");
        assert_eq!(item_id("  Salt & Pepper!! "), "grocery-salt-pepper");
        assert_eq!(item_id("???"), "grocery-item");
    }

    #[test]
    fn test_merge_prior_carries_checked_state() {
        let mut prior_onion = item("Onion", Category::Produce, Priority::Medium);
        prior_onion.is_checked = true;
        prior_onion.id = "saved-onion".to_string();

        let mut items = vec![item("Onions", Category::Produce, Priority::Medium)];
        let carried = merge_prior(&mut items, &[prior_onion]);

        assert_eq!(carried, 1);
        assert!(items[0].is_checked);
        assert_eq!(items[0].id, "saved-onion");
    }

    #[test]
    fn test_merge_prefers_exact_match() {
        let mut green = item("Green onion", Category::Produce, Priority::Medium);
        green.id = "saved-green".to_string();
        let mut onion = item("Onion", Category::Produce, Priority::Medium);
        onion.id = "saved-onion".to_string();
        onion.is_checked = true;

        let mut items = vec![
            item("Green onion", Category::Produce, Priority::Medium),
            item("Onion", Category::Produce, Priority::Medium),
        ];
        merge_prior(&mut items, &[onion, green]);

        assert_eq!(items[0].id, "saved-green");
        assert!(!items[0].is_checked);
        assert_eq!(items[1].id, "saved-onion");
        assert!(items[1].is_checked);
    }

    #[test]
    fn test_merge_checks_every_matching_item() {
        let mut prior = item("Rice", Category::GrainsPasta, Priority::Low);
        prior.is_checked = true;
        prior.id = "saved-rice".to_string();

        let mut items = vec![
            item("Rice noodles", Category::GrainsPasta, Priority::Low),
            item("Rice", Category::GrainsPasta, Priority::Low),
        ];
        let carried = merge_prior(&mut items, &[prior]);

        assert_eq!(carried, 2);
        assert!(items[0].is_checked);
        assert!(items[1].is_checked);
        // The exact match keeps the saved id even though it comes second
        assert_eq!(items[1].id, "saved-rice");
        assert_eq!(items[0].id, "grocery-rice-noodles");
    }

    #[test]
    fn test_merge_keeps_ids_unique() {
        let mut prior = item("Onion", Category::Produce, Priority::Medium);
        prior.id = item_id("Onion powder");

        let mut items = vec![
            item("Onion", Category::Produce, Priority::Medium),
            item("Onion powder", Category::General, Priority::Low),
        ];
        merge_prior(&mut items, &[prior]);

        assert_eq!(items[0].id, "grocery-onion-powder");
        assert_eq!(items[1].id, "grocery-onion-powder-2");
    }

    #[test]
    fn test_sort_order() {
        let mut items = vec![
            item("Salt", Category::CondimentsOils, Priority::Low),
            item("Tomato", Category::Produce, Priority::Medium),
            item("Basil", Category::Produce, Priority::High),
            item("Chicken", Category::MeatPoultry, Priority::High),
        ];
        sort_items(&mut items);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Basil", "Tomato", "Salt"]);
    }

    #[test]
    fn test_shopping_time_formula() {
        // 8 + 2*1 + 2.0 + 0.3 = 12.3 -> 10 -> floor 15
        let items = vec![item("Chicken", Category::MeatPoultry, Priority::High)];
        assert_eq!(estimate_shopping_time(&items), 15);

        // 8 + 2*2 + 5*2.0 + 5*1.5 + 5*0.3 = 31 -> 30
        let mut items = Vec::new();
        for i in 0..5 {
            items.push(item(&format!("Meat {i}"), Category::MeatPoultry, Priority::High));
            items.push(item(&format!("Veg {i}"), Category::Produce, Priority::Medium));
        }
        assert_eq!(estimate_shopping_time(&items), 30);
        assert_eq!(estimate_shopping_time(&[]), 15);
    }

    #[test]
    fn test_shopping_time_monotonic_floor_and_step() {
        let mut items = Vec::new();
        let mut previous = estimate_shopping_time(&items);
        for i in 0..40 {
            let category = Category::ALL[i % Category::ALL.len()];
            let priority = if i % 3 == 0 { Priority::High } else { Priority::Low };
            items.push(item(&format!("Item {i}"), category, priority));

            let minutes = estimate_shopping_time(&items);
            assert!(minutes >= 15);
            assert_eq!(minutes % 5, 0);
            assert!(minutes >= previous);
            previous = minutes;
        }
    }

    #[test]
    fn test_list_helpers() {
        let mut checked = item("Eggs", Category::DairyEggs, Priority::Medium);
        checked.is_checked = true;
        let list = GroceryList::from_items(vec![
            item("Chicken", Category::MeatPoultry, Priority::High),
            checked,
            item("Milk", Category::DairyEggs, Priority::Medium),
        ]);

        assert_eq!(list.checked_count(), 1);
        assert_eq!(list.estimated_total_cost, 3.75);
        let groups = list.by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Category::DairyEggs].len(), 2);
        assert_eq!(groups.keys().next(), Some(&Category::MeatPoultry));
    }
}
