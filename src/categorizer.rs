//! Keyword fallback for ingredients the catalog does not know.

use crate::catalog::Category;

/// Ordered keyword table; the first category with a substring hit wins
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::MeatPoultry,
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "steak", "veal",
            "duck", "prosciutto", "salami", "pepperoni", "chorizo", "meatball", "venison",
        ],
    ),
    (
        Category::Seafood,
        &[
            "fish", "salmon", "tuna", "shrimp", "prawn", "cod", "tilapia", "crab", "lobster",
            "scallop", "mussel", "clam", "oyster", "anchov", "sardine", "squid", "halibut",
        ],
    ),
    (
        Category::Produce,
        &[
            "lettuce", "tomato", "onion", "garlic", "pepper", "carrot", "celery", "potato",
            "spinach", "kale", "cabbage", "cucumber", "zucchini", "squash", "mushroom",
            "broccoli", "cauliflower", "eggplant", "asparagus", "apple", "banana", "berry",
            "berries", "lemon", "lime", "orange", "mango", "avocado", "grape", "peach", "pear",
            "herb", "basil", "cilantro", "parsley", "mint", "thyme", "rosemary", "ginger",
            "leek", "radish", "beet", "arugula", "fruit", "vegetable",
        ],
    ),
    (
        Category::DairyEggs,
        &[
            "milk", "cheese", "yogurt", "butter", "cream", "egg", "cheddar", "mozzarella",
            "parmesan", "ricotta", "feta", "brie", "ghee", "kefir",
        ],
    ),
    (
        Category::GrainsPasta,
        &[
            "rice", "pasta", "bread", "flour", "oat", "quinoa", "noodle", "spaghetti",
            "macaroni", "tortilla", "couscous", "barley", "cereal", "bagel", "cracker",
            "breadcrumb", "polenta", "grain",
        ],
    ),
    (
        Category::CondimentsOils,
        &[
            "oil", "vinegar", "sauce", "ketchup", "mustard", "mayo", "salt", "sugar", "honey",
            "syrup", "spice", "seasoning", "paprika", "cumin", "cinnamon", "oregano",
            "dressing", "salsa", "paste", "extract", "relish", "jam",
        ],
    ),
    (
        Category::Frozen,
        &["frozen", "ice cream", "sorbet", "popsicle"],
    ),
    (
        Category::Beverages,
        &[
            "juice", "coffee", "tea", "soda", "water", "wine", "beer", "kombucha", "lemonade",
            "drink",
        ],
    ),
    (
        Category::Snacks,
        &[
            "chip", "pretzel", "popcorn", "nut", "almond", "cashew", "peanut", "cookie",
            "candy", "chocolate", "granola", "trail mix", "jerky",
        ],
    ),
];

/// Categorize an ingredient name by keyword, defaulting to [`Category::General`]
///
/// # Examples
///
/// ```rust
/// use just_groceries::catalog::Category;
/// use just_groceries::categorizer::categorize;
///
/// assert_eq!(categorize("Lamb shoulder"), Category::MeatPoultry);
/// assert_eq!(categorize("sriracha sauce"), Category::CondimentsOils);
/// assert_eq!(categorize("xanthan gum"), Category::General);
/// ```
pub fn categorize(name: &str) -> Category {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return Category::General;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_categories() {
        assert_eq!(categorize("duck legs"), Category::MeatPoultry);
        assert_eq!(categorize("lump crab meat"), Category::Seafood);
        assert_eq!(categorize("kale"), Category::Produce);
        assert_eq!(categorize("Goat Cheese"), Category::DairyEggs);
        assert_eq!(categorize("couscous"), Category::GrainsPasta);
        assert_eq!(categorize("fish sauce"), Category::Seafood);
        assert_eq!(categorize("tahini paste"), Category::CondimentsOils);
        assert_eq!(categorize("frozen corn"), Category::Frozen);
        assert_eq!(categorize("sparkling water"), Category::Beverages);
        assert_eq!(categorize("pretzels"), Category::Snacks);
    }

    #[test]
    fn test_first_category_wins() {
        assert_eq!(categorize("beef stock paste"), Category::MeatPoultry);
        assert_eq!(categorize("pepper jack"), Category::Produce);
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(categorize("xanthan gum"), Category::General);
        assert_eq!(categorize(""), Category::General);
        assert_eq!(categorize("   "), Category::General);
    }
}
