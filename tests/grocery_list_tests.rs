use just_groceries::catalog::{Catalog, Category, Priority};
use just_groceries::config::EngineConfig;
use just_groceries::engine::GroceryEngine;
use just_groceries::list_builder::{estimate_shopping_time, GroceryItem, GroceryList};
use just_groceries::meal_plan::{MealPlan, RecipeInput};

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str, servings: f64, lines: &[&str]) -> RecipeInput {
        RecipeInput::new(name, servings, lines.iter().map(|l| l.to_string()).collect())
    }

    fn generate(
        catalog: &Catalog,
        recipes: &[RecipeInput],
        prior: Option<&[GroceryItem]>,
    ) -> GroceryList {
        GroceryEngine::new(catalog, EngineConfig::default()).generate_grocery_list(recipes, prior)
    }

    /// Text without a leading number always extracts as one piece
    #[test]
    fn test_no_leading_number_is_one_piece() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        for text in [
            "salt",
            "Fresh basil",
            "chicken breast, cubed",
            "extra virgin olive oil",
            "(optional) chili flakes",
            "garlic to taste",
            "a can of tomatoes",
            "A bag of baby spinach",
            "!!!",
        ] {
            let parsed = engine.extract(text);
            assert_eq!(parsed.quantity, 1.0, "quantity for '{}'", text);
            assert_eq!(parsed.unit, "piece", "unit for '{}'", text);
            assert!(!parsed.cleaned_name.is_empty(), "name for '{}'", text);
        }
    }

    #[test]
    fn test_pinch_of_salt() {
        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());

        let parsed = engine.extract("pinch of salt");
        assert_eq!(parsed.quantity, 0.125);
        assert_eq!(parsed.unit, "tsp");
        assert_eq!(parsed.display_name(), "Salt");

        let matched = engine.match_ingredient(&parsed.cleaned_name).unwrap();
        assert_eq!(matched.ingredient.base_name, "salt");
    }

    #[test]
    fn test_cooked_rice_scaled_by_servings() {
        let catalog = Catalog::builtin();
        let recipes = [recipe("Fried Rice", 2.0, &["2 cups of cooked rice"])];
        let list = generate(&catalog, &recipes, None);

        assert_eq!(list.items.len(), 1);
        let rice = &list.items[0];
        assert_eq!(rice.name, "Rice");
        assert_eq!(rice.quantity_display, "4 cups");
        assert_eq!(rice.category, Category::GrainsPasta);
        assert_eq!(rice.store_section, "Pasta & Grains Aisle");
        assert_eq!(rice.estimated_cost, 2.0);
    }

    #[test]
    fn test_chicken_consolidates_across_recipes() {
        let catalog = Catalog::builtin();
        let list = generate(
            &catalog,
            &[
                recipe("Recipe A", 1.0, &["1 lb chicken breast"]),
                recipe("Recipe B", 1.0, &["2 lb chicken"]),
            ],
            None,
        );

        assert_eq!(list.items.len(), 1);
        let chicken = &list.items[0];
        assert_eq!(chicken.name, "Chicken");
        assert_eq!(chicken.quantity_display, "3 lbs");
        assert_eq!(chicken.priority, Priority::High);
        assert_eq!(chicken.from_recipes, vec!["Recipe A", "Recipe B"]);
        assert_eq!(chicken.shelf_life_days, 2);
    }

    #[test]
    fn test_checked_state_carries_to_plural_name() {
        let catalog = Catalog::builtin();
        let prior = vec![GroceryItem {
            id: "saved-onion-id".to_string(),
            name: "Onion".to_string(),
            quantity_display: "1 piece".to_string(),
            category: Category::Produce,
            from_recipes: vec!["Last Week".to_string()],
            is_checked: true,
            priority: Priority::Medium,
            estimated_cost: 0.89,
            shelf_life_days: 30,
            store_section: "Produce Section".to_string(),
        }];

        // "Onions" is a word the catalog resolves to "Onion"; the unmatched
        // spelling below keeps its own name and still pairs by containment
        let list = generate(
            &catalog,
            &[recipe("Curry", 1.0, &["2 onions, diced", "1 cup kale"])],
            Some(&prior),
        );
        let onion = list.items.iter().find(|i| i.name == "Onion").unwrap();
        assert!(onion.is_checked);
        assert_eq!(onion.id, "saved-onion-id");
        assert_eq!(list.checked_count(), 1);

        let prior_unmatched = vec![GroceryItem {
            name: "Sumac".to_string(),
            id: "saved-sumac".to_string(),
            ..prior[0].clone()
        }];
        let list = generate(
            &catalog,
            &[recipe("Salad", 1.0, &["1 tsp sumacs"])],
            Some(&prior_unmatched),
        );
        assert_eq!(list.items[0].name, "Sumacs");
        assert!(list.items[0].is_checked);
        assert_eq!(list.items[0].id, "saved-sumac");

        // Every new item containing a checked name stays checked
        let list = generate(
            &catalog,
            &[recipe("Salad", 1.0, &["1 tsp sumac", "1 tsp sumac berries"])],
            Some(&prior_unmatched),
        );
        let sumac = list.items.iter().find(|i| i.name == "Sumac").unwrap();
        let berries = list.items.iter().find(|i| i.name == "Sumac berries").unwrap();
        assert!(sumac.is_checked);
        assert!(berries.is_checked);
        assert_eq!(sumac.id, "saved-sumac");
        assert_eq!(berries.id, "grocery-sumac-berries");
    }

    #[test]
    fn test_unmatched_ingredients_degrade_gracefully() {
        let catalog = Catalog::builtin();
        let list = generate(
            &catalog,
            &[recipe(
                "Odd Pantry",
                f64::NAN,
                &[
                    "3 ???",
                    "1 pkg xanthan gum",
                    "2 dragonfruits",
                    "1/0 cup mystery",
                    "½ tsp za'atar",
                ],
            )],
            None,
        );

        assert!(!list.items.is_empty());
        for item in &list.items {
            assert!(!item.name.is_empty());
            assert!(!item.quantity_display.is_empty());
        }

        let xanthan = list.items.iter().find(|i| i.name == "Xanthan gum").unwrap();
        assert_eq!(xanthan.category, Category::General);
        assert_eq!(xanthan.estimated_cost, 3.0);
        assert_eq!(xanthan.shelf_life_days, 7);
        assert_eq!(xanthan.priority, Priority::Low);
    }

    #[test]
    fn test_empty_recipes_and_blank_lines() {
        let catalog = Catalog::builtin();

        let list = generate(&catalog, &[], None);
        assert!(list.is_empty());
        assert_eq!(list.estimated_total_cost, 0.0);
        assert_eq!(list.estimated_shopping_time_minutes, 15);

        let list = generate(&catalog, &[recipe("Blank", 1.0, &["", "   ", "\t"])], None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_shopping_time_grows_with_items() {
        let catalog = Catalog::builtin();
        let lines = [
            "1 lb chicken",
            "2 cups milk",
            "1 onion",
            "1 cup rice",
            "1 tbsp olive oil",
            "1 lb shrimp",
            "3 carrots",
            "1 cup peas",
            "1 lb coffee",
            "1 cup almonds",
            "2 cups chicken broth",
            "1 head broccoli",
        ];

        let mut previous = 0;
        for n in 0..=lines.len() {
            let list = generate(&catalog, &[recipe("Week", 1.0, &lines[..n])], None);
            let minutes = list.estimated_shopping_time_minutes;
            assert!(minutes >= 15);
            assert_eq!(minutes % 5, 0);
            assert!(minutes >= previous, "time dropped at {} items", n);
            assert_eq!(minutes, estimate_shopping_time(&list.items));
            previous = minutes;
        }
    }

    #[test]
    fn test_items_sorted_by_category_then_priority() {
        let catalog = Catalog::builtin();
        let list = generate(
            &catalog,
            &[
                recipe("A", 1.0, &["1 tsp salt", "2 tomatoes", "1 lb salmon", "1 lb ground beef"]),
                recipe("B", 1.0, &["1 tomato", "1 cup milk"]),
            ],
            None,
        );

        let order: Vec<(&str, Category)> = list
            .items
            .iter()
            .map(|i| (i.name.as_str(), i.category))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Ground beef", Category::MeatPoultry),
                ("Salmon", Category::Seafood),
                ("Milk", Category::DairyEggs),
                ("Tomato", Category::Produce),
                ("Salt", Category::CondimentsOils),
            ]
        );
        let tomato = list.items.iter().find(|i| i.name == "Tomato").unwrap();
        assert_eq!(tomato.priority, Priority::High);
        assert_eq!(tomato.quantity_display, "3 pieces");
    }

    #[test]
    fn test_unit_conversion_and_accepted_gap() {
        let catalog = Catalog::builtin();

        let list = generate(
            &catalog,
            &[
                recipe("Roast", 1.0, &["1 head garlic"]),
                recipe("Pasta", 1.0, &["4 cloves garlic, minced"]),
            ],
            None,
        );
        assert_eq!(list.items[0].quantity_display, "1.4 heads");

        // No factor between cups and pounds of chicken, so the numbers are summed as-is
        let list = generate(
            &catalog,
            &[
                recipe("Salad", 1.0, &["1 cup shredded chicken"]),
                recipe("Soup", 1.0, &["1 lb chicken"]),
            ],
            None,
        );
        assert_eq!(list.items[0].quantity_display, "2 cups");
    }

    #[test]
    fn test_generate_for_plan() {
        let plan = MealPlan::from_json_str(
            r#"{
                "week_start": "2026-10-19",
                "days": [
                    {"day": "Tue", "meals": [{"name": "Omelette", "servings": 2, "ingredients": ["3 eggs", "1/4 cup milk"]}]},
                    {"day": "Mon", "meals": [{"name": "Baking", "ingredients": ["1 egg", "2 1/4 cups flour"]}]}
                ]
            }"#,
        )
        .unwrap();

        let catalog = Catalog::builtin();
        let engine = GroceryEngine::new(&catalog, EngineConfig::default());
        let list = engine.generate_for_plan(&plan, None);

        let eggs = list.items.iter().find(|i| i.name == "Eggs").unwrap();
        assert_eq!(eggs.quantity_display, "7 pieces");
        assert_eq!(eggs.from_recipes, vec!["Baking", "Omelette"]);
        assert_eq!(eggs.priority, Priority::High);

        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains("\"category\":\"Dairy & Eggs\""));
        assert!(json.contains("\"is_checked\":false"));
    }
}
