//! # Reference Catalog
//!
//! Canonical ingredients with their aliases, shopping category, standard unit,
//! unit conversion factors, average cost and shelf life, plus the phrase-level
//! consolidation rules applied before catalog lookup.
//!
//! A [`Catalog`] is built once (from the built-in table or a JSON file) and then
//! only borrowed. Nothing in it changes while lists are generated.
//!
//! ```rust
//! use just_groceries::catalog::{Catalog, Category};
//!
//! let catalog = Catalog::builtin();
//! let chicken = catalog.lookup("Chicken").unwrap();
//! assert_eq!(chicken.category, Category::MeatPoultry);
//! assert_eq!(chicken.standard_unit, "lb");
//! ```

use crate::config::CatalogConfig;
use crate::errors::{error_logging, AppError, AppResult};
use crate::observability::{catalog_span, metrics};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Shopping category an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Meat & Poultry")]
    MeatPoultry,
    #[serde(rename = "Seafood")]
    Seafood,
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    #[serde(rename = "Produce")]
    Produce,
    #[serde(rename = "Grains & Pasta")]
    GrainsPasta,
    #[serde(rename = "Condiments & Oils")]
    CondimentsOils,
    #[serde(rename = "Frozen")]
    Frozen,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Snacks")]
    Snacks,
    #[serde(rename = "General")]
    General,
}

impl Category {
    /// Every category, in the order the shopping list is rendered
    pub const ALL: [Category; 10] = [
        Category::MeatPoultry,
        Category::Seafood,
        Category::DairyEggs,
        Category::Produce,
        Category::GrainsPasta,
        Category::CondimentsOils,
        Category::Frozen,
        Category::Beverages,
        Category::Snacks,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MeatPoultry => "Meat & Poultry",
            Category::Seafood => "Seafood",
            Category::DairyEggs => "Dairy & Eggs",
            Category::Produce => "Produce",
            Category::GrainsPasta => "Grains & Pasta",
            Category::CondimentsOils => "Condiments & Oils",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::General => "General",
        }
    }

    /// Priority an entry starts with before any multi-recipe upgrade
    pub fn default_priority(&self) -> Priority {
        match self {
            Category::MeatPoultry | Category::Seafood => Priority::High,
            Category::DairyEggs | Category::Produce => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Minutes spent picking one item of this category
    pub fn item_minutes(&self) -> f64 {
        match self {
            Category::Produce => 1.5,
            Category::MeatPoultry => 2.0,
            Category::Seafood => 2.0,
            Category::DairyEggs => 1.0,
            Category::Frozen => 0.8,
            Category::Beverages => 0.5,
            Category::GrainsPasta => 0.7,
            Category::CondimentsOils => 0.8,
            Category::Snacks => 0.6,
            Category::General => 1.0,
        }
    }

    /// Store section shown next to an item
    pub fn store_section(&self) -> &'static str {
        match self {
            Category::MeatPoultry => "Meat Counter",
            Category::Seafood => "Seafood Counter",
            Category::DairyEggs => "Dairy Case",
            Category::Produce => "Produce Section",
            Category::GrainsPasta => "Pasta & Grains Aisle",
            Category::CondimentsOils => "Condiments & Oils Aisle",
            Category::Frozen => "Frozen Foods",
            Category::Beverages => "Beverage Aisle",
            Category::Snacks => "Snack Aisle",
            Category::General => "Center Aisles",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn sort_index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Category::ALL.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shopping urgency tier. Declared high-first so sorting puts urgent items on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// A canonical ingredient in the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalIngredient {
    /// Canonical key, e.g. "chicken"
    pub base_name: String,
    /// Alternate surface forms, e.g. "chicken breast"
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: Category,
    /// Unit totals are expressed in, e.g. "lb"
    pub standard_unit: String,
    /// How many of `unit` make one `standard_unit` (`{"oz": 16}` for a pound-based item)
    #[serde(default)]
    pub conversion_factors: BTreeMap<String, f64>,
    /// Cost per standard unit, for estimates only
    pub average_cost: f64,
    pub shelf_life_days: u32,
}

impl CanonicalIngredient {
    /// Conversion factor for `unit` relative to the standard unit
    ///
    /// The standard unit itself always has factor 1.
    pub fn factor_for(&self, unit: &str) -> Option<f64> {
        if unit.eq_ignore_ascii_case(&self.standard_unit) {
            return Some(1.0);
        }
        self.conversion_factors.get(unit).copied()
    }

    /// Convert `quantity` from one unit to another through the standard unit
    ///
    /// Returns `None` when either unit has no known factor.
    pub fn convert(&self, quantity: f64, from: &str, to: &str) -> Option<f64> {
        if from.eq_ignore_ascii_case(to) {
            return Some(quantity);
        }
        let from_factor = self.factor_for(from)?;
        let to_factor = self.factor_for(to)?;
        Some(quantity / from_factor * to_factor)
    }

    /// Express `quantity` of `unit` in the standard unit, if a factor is known
    pub fn to_standard(&self, quantity: f64, unit: &str) -> Option<f64> {
        self.convert(quantity, unit, &self.standard_unit)
    }
}

/// Phrase-level folding rule: every variant resolves to `canonical_name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationRule {
    pub canonical_name: String,
    pub variants: Vec<String>,
}

/// One field that differs between two catalogs for the same base name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogDrift {
    pub base_name: String,
    pub field: &'static str,
    /// Value in the authoritative catalog
    pub primary: String,
    /// Value in the catalog being compared
    pub other: String,
}

impl fmt::Display for CatalogDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}: primary={} other={}",
            self.base_name, self.field, self.primary, self.other
        )
    }
}

/// On-disk catalog format
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CatalogFile {
    ingredients: Vec<CanonicalIngredient>,
    #[serde(default)]
    consolidation_rules: Vec<ConsolidationRule>,
}

/// Immutable reference catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<CanonicalIngredient>,
    rules: Vec<ConsolidationRule>,
    /// Lowercased base name -> position in `ingredients`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, lowercasing names and validating the data
    pub fn new(
        ingredients: Vec<CanonicalIngredient>,
        rules: Vec<ConsolidationRule>,
    ) -> AppResult<Self> {
        let ingredients: Vec<CanonicalIngredient> = ingredients
            .into_iter()
            .map(|mut ingredient| {
                ingredient.base_name = ingredient.base_name.trim().to_lowercase();
                ingredient.standard_unit = ingredient.standard_unit.trim().to_lowercase();
                ingredient.aliases = ingredient
                    .aliases
                    .iter()
                    .map(|a| a.trim().to_lowercase())
                    .filter(|a| !a.is_empty())
                    .collect();
                ingredient.conversion_factors = ingredient
                    .conversion_factors
                    .into_iter()
                    .map(|(unit, factor)| (unit.trim().to_lowercase(), factor))
                    .collect();
                ingredient
            })
            .collect();

        let rules: Vec<ConsolidationRule> = rules
            .into_iter()
            .map(|rule| ConsolidationRule {
                canonical_name: rule.canonical_name.trim().to_lowercase(),
                variants: rule
                    .variants
                    .iter()
                    .map(|v| v.trim().to_lowercase())
                    .filter(|v| !v.is_empty())
                    .collect(),
            })
            .collect();

        let mut index = HashMap::with_capacity(ingredients.len());
        for (i, ingredient) in ingredients.iter().enumerate() {
            if index.insert(ingredient.base_name.clone(), i).is_some() {
                return Err(AppError::Catalog(format!(
                    "duplicate base name '{}'",
                    ingredient.base_name
                )));
            }
        }

        let catalog = Self {
            ingredients,
            rules,
            index,
        };
        catalog.validate()?;
        debug!(
            ingredients = catalog.ingredients.len(),
            rules = catalog.rules.len(),
            "Catalog built"
        );
        Ok(catalog)
    }

    /// Check invariants on every record
    pub fn validate(&self) -> AppResult<()> {
        for ingredient in &self.ingredients {
            if ingredient.base_name.is_empty() {
                return Err(AppError::Catalog("base name cannot be empty".to_string()));
            }
            if ingredient.standard_unit.is_empty() {
                return Err(AppError::Catalog(format!(
                    "'{}' has an empty standard unit",
                    ingredient.base_name
                )));
            }
            if !ingredient.average_cost.is_finite() || ingredient.average_cost < 0.0 {
                return Err(AppError::Catalog(format!(
                    "'{}' has an invalid average cost {}",
                    ingredient.base_name, ingredient.average_cost
                )));
            }
            for (unit, factor) in &ingredient.conversion_factors {
                if !factor.is_finite() || *factor <= 0.0 {
                    return Err(AppError::Catalog(format!(
                        "'{}' has a non-positive conversion factor for '{}'",
                        ingredient.base_name, unit
                    )));
                }
            }
        }

        for rule in &self.rules {
            if rule.canonical_name.is_empty() {
                return Err(AppError::Catalog(
                    "consolidation rule canonical name cannot be empty".to_string(),
                ));
            }
            if rule.variants.is_empty() {
                return Err(AppError::Catalog(format!(
                    "consolidation rule '{}' has no variants",
                    rule.canonical_name
                )));
            }
        }

        Ok(())
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.ingredients, file.consolidation_rules)
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::FileSystem(format!("cannot read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            ingredients = catalog.ingredients.len(),
            rules = catalog.rules.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Serialize the catalog back to JSON
    pub fn to_json(&self) -> AppResult<String> {
        let file = CatalogFile {
            ingredients: self.ingredients.clone(),
            consolidation_rules: self.rules.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Case-insensitive lookup by base name
    pub fn lookup(&self, name: &str) -> Option<&CanonicalIngredient> {
        self.index
            .get(name.trim().to_lowercase().as_str())
            .map(|&i| &self.ingredients[i])
    }

    pub fn ingredients(&self) -> &[CanonicalIngredient] {
        &self.ingredients
    }

    pub fn rules(&self) -> &[ConsolidationRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Compare overlapping ingredients against another catalog
    ///
    /// `self` is treated as authoritative. Only base names present in both
    /// catalogs are compared; the result is sorted by base name.
    pub fn drift_from(&self, other: &Catalog) -> Vec<CatalogDrift> {
        let mut drift = Vec::new();

        let mut names: Vec<&String> = self.index.keys().collect();
        names.sort();

        for name in names {
            let (Some(primary), Some(theirs)) = (self.lookup(name), other.lookup(name)) else {
                continue;
            };

            let mut push = |field: &'static str, a: String, b: String| {
                if a != b {
                    drift.push(CatalogDrift {
                        base_name: name.clone(),
                        field,
                        primary: a,
                        other: b,
                    });
                }
            };

            push(
                "category",
                primary.category.to_string(),
                theirs.category.to_string(),
            );
            push(
                "standard_unit",
                primary.standard_unit.clone(),
                theirs.standard_unit.clone(),
            );
            push(
                "average_cost",
                format!("{:.2}", primary.average_cost),
                format!("{:.2}", theirs.average_cost),
            );
            push(
                "shelf_life_days",
                primary.shelf_life_days.to_string(),
                theirs.shelf_life_days.to_string(),
            );
        }

        drift
    }

    /// Base names present in `other` but absent from this catalog, sorted
    pub fn missing_from(&self, other: &Catalog) -> Vec<String> {
        let ours: HashSet<&String> = self.index.keys().collect();
        let mut missing: Vec<String> = other
            .index
            .keys()
            .filter(|name| !ours.contains(name))
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    /// The built-in reference data
    pub fn builtin() -> Self {
        let (ingredients, rules) = builtin_data();
        // The built-in table is covered by tests; a failure here is a defect in the table itself.
        Self::new(ingredients, rules).unwrap_or_else(|e| panic!("built-in catalog is invalid: {e}"))
    }
}

/// Authoritative catalog plus what a legacy catalog disagrees on
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Field-level differences for base names both catalogs know
    pub drift: Vec<CatalogDrift>,
    /// Base names only the legacy catalog knows
    pub legacy_only: Vec<String>,
}

/// Load the configured catalog, falling back to the built-in table
///
/// A configured legacy catalog is never merged in. It is only compared
/// and every divergence is logged.
pub fn load_configured(config: &CatalogConfig) -> AppResult<LoadedCatalog> {
    let source = config
        .catalog_path
        .as_ref()
        .map_or_else(|| "builtin".to_string(), |p| p.display().to_string());
    let span = catalog_span("load_catalog", &source);
    let _guard = span.enter();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path).inspect_err(|e| {
            error_logging::log_catalog_error(e, "load_catalog", Some(&source), None);
            metrics::record_error_metrics(e.kind(), "catalog");
        })?,
        None => Catalog::builtin(),
    };

    let Some(legacy_path) = &config.legacy_catalog_path else {
        return Ok(LoadedCatalog {
            catalog,
            drift: Vec::new(),
            legacy_only: Vec::new(),
        });
    };

    let legacy = Catalog::from_json_file(legacy_path).inspect_err(|e| {
        error_logging::log_catalog_error(
            e,
            "load_legacy_catalog",
            legacy_path.to_str(),
            Some(catalog.len()),
        );
        metrics::record_error_metrics(e.kind(), "legacy_catalog");
    })?;

    let drift = catalog.drift_from(&legacy);
    let legacy_only = catalog.missing_from(&legacy);
    for d in &drift {
        warn!(
            base_name = %d.base_name,
            field = d.field,
            primary = %d.primary,
            legacy = %d.other,
            "Legacy catalog disagrees with the authoritative catalog"
        );
    }
    if !legacy_only.is_empty() {
        warn!(
            count = legacy_only.len(),
            names = ?legacy_only,
            "Legacy catalog has ingredients the authoritative catalog lacks"
        );
    }
    metrics::record_catalog_drift(drift.len(), legacy_only.len());

    Ok(LoadedCatalog {
        catalog,
        drift,
        legacy_only,
    })
}

fn ingredient(
    base_name: &str,
    category: Category,
    standard_unit: &str,
    factors: &[(&str, f64)],
    average_cost: f64,
    shelf_life_days: u32,
    aliases: &[&str],
) -> CanonicalIngredient {
    CanonicalIngredient {
        base_name: base_name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        category,
        standard_unit: standard_unit.to_string(),
        conversion_factors: factors
            .iter()
            .map(|(unit, factor)| (unit.to_string(), *factor))
            .collect(),
        average_cost,
        shelf_life_days,
    }
}

fn rule(canonical_name: &str, variants: &[&str]) -> ConsolidationRule {
    ConsolidationRule {
        canonical_name: canonical_name.to_string(),
        variants: variants.iter().map(|v| v.to_string()).collect(),
    }
}

fn builtin_data() -> (Vec<CanonicalIngredient>, Vec<ConsolidationRule>) {
    use Category::*;

    const POUND: &[(&str, f64)] = &[("oz", 16.0), ("g", 453.6), ("kg", 0.4536)];

    let ingredients = vec![
        // Meat & Poultry
        ingredient(
            "chicken",
            MeatPoultry,
            "lb",
            &[("oz", 16.0), ("g", 453.6), ("kg", 0.4536), ("piece", 2.0)],
            4.99,
            2,
            &["chicken breast", "chicken thigh", "drumstick", "poultry"],
        ),
        ingredient(
            "ground beef",
            MeatPoultry,
            "lb",
            POUND,
            5.49,
            2,
            &["hamburger meat", "minced beef", "beef mince"],
        ),
        ingredient("beef", MeatPoultry, "lb", POUND, 8.99, 3, &["steak", "sirloin", "brisket"]),
        ingredient(
            "pork",
            MeatPoultry,
            "lb",
            POUND,
            4.49,
            3,
            &["pork chop", "pork loin", "tenderloin"],
        ),
        ingredient(
            "bacon",
            MeatPoultry,
            "lb",
            &[("oz", 16.0), ("slice", 16.0), ("g", 453.6)],
            6.99,
            7,
            &["pancetta"],
        ),
        ingredient(
            "turkey",
            MeatPoultry,
            "lb",
            POUND,
            4.29,
            2,
            &["ground turkey", "turkey breast"],
        ),
        ingredient(
            "sausage",
            MeatPoultry,
            "lb",
            &[("oz", 16.0), ("piece", 4.0)],
            5.49,
            3,
            &["chorizo", "kielbasa"],
        ),
        // Seafood
        ingredient(
            "salmon",
            Seafood,
            "lb",
            &[("oz", 16.0), ("g", 453.6), ("piece", 2.0)],
            10.99,
            2,
            &["salmon fillet"],
        ),
        ingredient("shrimp", Seafood, "lb", POUND, 9.99, 2, &["prawn"]),
        ingredient("tuna", Seafood, "can", &[("oz", 5.0)], 1.49, 730, &["tuna steak"]),
        ingredient("white fish", Seafood, "lb", POUND, 8.99, 2, &["cod", "tilapia", "halibut"]),
        // Dairy & Eggs
        ingredient("eggs", DairyEggs, "dozen", &[("piece", 12.0)], 3.49, 21, &["egg"]),
        ingredient(
            "milk",
            DairyEggs,
            "gallon",
            &[("cup", 16.0), ("quart", 4.0), ("pint", 8.0), ("ml", 3785.0), ("l", 3.785)],
            3.99,
            7,
            &["whole milk", "skim milk"],
        ),
        ingredient(
            "butter",
            DairyEggs,
            "lb",
            &[("stick", 4.0), ("tbsp", 32.0), ("cup", 2.0), ("oz", 16.0), ("g", 453.6)],
            4.99,
            30,
            &[],
        ),
        ingredient(
            "cheese",
            DairyEggs,
            "lb",
            &[("oz", 16.0), ("cup", 4.0), ("g", 453.6)],
            6.99,
            21,
            &["cheddar", "mozzarella", "parmesan", "feta", "ricotta"],
        ),
        ingredient(
            "greek yogurt",
            DairyEggs,
            "cup",
            &[("oz", 8.0), ("g", 245.0)],
            1.25,
            14,
            &["yogurt"],
        ),
        ingredient(
            "heavy cream",
            DairyEggs,
            "cup",
            &[("tbsp", 16.0), ("ml", 240.0), ("pint", 0.5)],
            2.00,
            10,
            &["whipping cream"],
        ),
        ingredient("sour cream", DairyEggs, "cup", &[("tbsp", 16.0)], 1.50, 14, &[]),
        // Produce
        ingredient(
            "onion",
            Produce,
            "piece",
            &[("cup", 1.0), ("lb", 0.5)],
            0.89,
            30,
            &["shallot", "scallion"],
        ),
        ingredient("garlic", Produce, "head", &[("clove", 10.0), ("tsp", 10.0)], 0.50, 90, &[]),
        ingredient(
            "tomato",
            Produce,
            "piece",
            &[("lb", 0.5), ("cup", 1.0)],
            0.79,
            7,
            &["cherry tomato"],
        ),
        ingredient(
            "potato",
            Produce,
            "lb",
            &[("piece", 2.0), ("oz", 16.0)],
            0.99,
            30,
            &["yukon gold", "russet"],
        ),
        ingredient("carrot", Produce, "lb", &[("piece", 6.0), ("cup", 2.0)], 1.29, 21, &[]),
        ingredient(
            "bell pepper",
            Produce,
            "piece",
            &[("cup", 1.0)],
            1.29,
            10,
            &["red pepper", "green pepper", "yellow pepper", "capsicum"],
        ),
        ingredient(
            "spinach",
            Produce,
            "bag",
            &[("oz", 6.0), ("cup", 6.0)],
            2.99,
            5,
            &["baby spinach"],
        ),
        ingredient(
            "lettuce",
            Produce,
            "head",
            &[("cup", 6.0)],
            1.99,
            7,
            &["romaine", "iceberg", "mixed greens"],
        ),
        ingredient(
            "broccoli",
            Produce,
            "head",
            &[("cup", 3.0), ("lb", 1.0)],
            1.99,
            7,
            &["broccoli florets"],
        ),
        ingredient(
            "lemon",
            Produce,
            "piece",
            &[("tbsp", 3.0)],
            0.59,
            21,
            &["lemon juice", "lemon zest"],
        ),
        ingredient("lime", Produce, "piece", &[("tbsp", 2.0)], 0.39, 21, &["lime juice"]),
        ingredient("avocado", Produce, "piece", &[], 1.49, 5, &["guacamole"]),
        ingredient("cucumber", Produce, "piece", &[("cup", 2.0)], 0.79, 7, &[]),
        ingredient(
            "mushrooms",
            Produce,
            "lb",
            &[("oz", 16.0), ("cup", 5.0)],
            3.99,
            7,
            &["mushroom", "cremini", "portobello"],
        ),
        ingredient("banana", Produce, "bunch", &[("piece", 6.0)], 1.49, 5, &[]),
        ingredient("apple", Produce, "piece", &[("lb", 2.0)], 0.79, 30, &[]),
        ingredient(
            "ginger",
            Produce,
            "piece",
            &[("tbsp", 4.0), ("tsp", 12.0)],
            0.50,
            21,
            &["ginger root"],
        ),
        ingredient(
            "cilantro",
            Produce,
            "bunch",
            &[("cup", 1.0), ("tbsp", 16.0)],
            0.99,
            7,
            &["coriander"],
        ),
        ingredient("parsley", Produce, "bunch", &[("cup", 1.0), ("tbsp", 16.0)], 0.99, 7, &[]),
        ingredient("basil", Produce, "bunch", &[("cup", 1.0)], 2.49, 5, &[]),
        // Grains & Pasta
        ingredient(
            "rice",
            GrainsPasta,
            "cup",
            &[("lb", 0.44), ("g", 185.0)],
            0.50,
            365,
            &["jasmine", "basmati", "arborio"],
        ),
        ingredient(
            "pasta",
            GrainsPasta,
            "lb",
            &[("oz", 16.0), ("cup", 4.0), ("g", 453.6), ("box", 1.0)],
            1.49,
            365,
            &["spaghetti", "penne", "macaroni", "noodles", "fettuccine", "linguine"],
        ),
        ingredient(
            "bread",
            GrainsPasta,
            "loaf",
            &[("slice", 20.0)],
            2.99,
            7,
            &["sourdough", "baguette", "bun"],
        ),
        ingredient(
            "flour",
            GrainsPasta,
            "cup",
            &[("lb", 0.28), ("g", 125.0), ("tbsp", 16.0)],
            0.15,
            180,
            &[],
        ),
        ingredient("oats", GrainsPasta, "cup", &[("g", 90.0)], 0.30, 365, &["oatmeal"]),
        ingredient("quinoa", GrainsPasta, "cup", &[("g", 170.0)], 1.00, 365, &[]),
        ingredient(
            "tortillas",
            GrainsPasta,
            "package",
            &[("piece", 10.0)],
            2.99,
            14,
            &["tortilla", "wraps"],
        ),
        // Condiments & Oils
        ingredient(
            "olive oil",
            CondimentsOils,
            "cup",
            &[("tbsp", 16.0), ("tsp", 48.0), ("ml", 240.0)],
            2.50,
            365,
            &["evoo"],
        ),
        ingredient(
            "vegetable oil",
            CondimentsOils,
            "cup",
            &[("tbsp", 16.0), ("tsp", 48.0)],
            0.80,
            365,
            &["canola oil", "cooking oil"],
        ),
        ingredient(
            "salt",
            CondimentsOils,
            "tsp",
            &[("tbsp", 1.0 / 3.0), ("cup", 1.0 / 48.0)],
            0.01,
            1825,
            &[],
        ),
        ingredient(
            "black pepper",
            CondimentsOils,
            "tsp",
            &[("tbsp", 1.0 / 3.0)],
            0.05,
            730,
            &["pepper"],
        ),
        ingredient(
            "soy sauce",
            CondimentsOils,
            "tbsp",
            &[("tsp", 3.0), ("cup", 1.0 / 16.0)],
            0.10,
            730,
            &["tamari"],
        ),
        ingredient(
            "honey",
            CondimentsOils,
            "cup",
            &[("tbsp", 16.0), ("tsp", 48.0)],
            4.00,
            730,
            &[],
        ),
        ingredient(
            "sugar",
            CondimentsOils,
            "cup",
            &[("tbsp", 16.0), ("tsp", 48.0), ("g", 200.0), ("lb", 0.44)],
            0.30,
            730,
            &[],
        ),
        ingredient(
            "vinegar",
            CondimentsOils,
            "cup",
            &[("tbsp", 16.0), ("tsp", 48.0)],
            0.50,
            730,
            &["balsamic"],
        ),
        // Frozen
        ingredient("peas", Frozen, "cup", &[("oz", 5.0)], 0.60, 180, &["green peas"]),
        ingredient("ice cream", Frozen, "pint", &[("cup", 2.0)], 4.99, 60, &["gelato"]),
        // Beverages
        ingredient("coffee", Beverages, "lb", &[("oz", 16.0)], 8.99, 180, &["espresso"]),
        ingredient("orange juice", Beverages, "carton", &[("cup", 6.5)], 3.99, 10, &[]),
        // Snacks
        ingredient(
            "almonds",
            Snacks,
            "cup",
            &[("oz", 5.0)],
            2.50,
            180,
            &["walnuts", "pecans", "cashews", "nuts"],
        ),
        ingredient("chocolate chips", Snacks, "cup", &[("oz", 6.0)], 2.00, 365, &[]),
        ingredient("crackers", Snacks, "box", &[], 3.49, 90, &[]),
        // General
        ingredient(
            "chicken broth",
            General,
            "cup",
            &[("ml", 240.0), ("can", 1.0 / 1.75)],
            0.75,
            365,
            &["chicken stock", "broth", "stock"],
        ),
        ingredient(
            "beans",
            General,
            "can",
            &[("cup", 1.5)],
            1.09,
            730,
            &["black beans", "kidney beans", "chickpeas", "cannellini"],
        ),
    ];

    let rules = vec![
        rule(
            "greek yogurt",
            &[
                "plain greek yogurt",
                "non-fat greek yogurt",
                "nonfat greek yogurt",
                "vanilla greek yogurt",
            ],
        ),
        rule("salt", &["salt", "sea salt", "kosher salt", "table salt"]),
        rule(
            "black pepper",
            &["black pepper", "ground black pepper", "cracked pepper", "peppercorns"],
        ),
        rule("olive oil", &["extra virgin olive oil", "light olive oil"]),
        rule(
            "chicken broth",
            &["chicken stock", "low-sodium chicken broth", "chicken bouillon", "bone broth"],
        ),
        rule("ground beef", &["lean ground beef", "ground chuck"]),
        rule(
            "cheese",
            &["cheddar cheese", "mozzarella cheese", "parmesan cheese", "grated parmesan"],
        ),
        rule("onion", &["yellow onion", "white onion", "red onion", "sweet onion"]),
        rule(
            "rice",
            &["long grain rice", "jasmine rice", "basmati rice", "brown rice", "white rice"],
        ),
        rule("eggs", &["egg", "egg whites", "egg yolks"]),
    ];

    (ingredients, rules)
}
