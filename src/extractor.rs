//! # Quantity/Unit Extractor
//!
//! Pulls a leading quantity and unit out of a raw ingredient line and leaves a
//! cleaned ingredient name behind.
//!
//! ## Supported formats
//!
//! - Fractions and mixed numbers: "1/2 cup sugar", "2 1/4 cups flour", "1½ cups milk"
//! - Decimals and integers with a unit: "1.5 tsp salt", "500g butter"
//! - Ranges (the upper bound is kept for shopping): "2-3 cloves garlic", "1 to 2 cups rice"
//! - Counts without a unit: "3 large eggs" (unit becomes "piece")
//! - Pinches and dashes: "pinch of salt" (0.125 tsp)
//!
//! Anything else, "a can of tomatoes" included, keeps quantity 1 and unit "piece".
//!
//! The patterns are an ordered list of `(regex, handler)` pairs. The first
//! pattern whose regex matches *and* whose handler accepts the captures wins,
//! so new phrasings are added by appending a pair.

use crate::normalizer::normalize;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// Unit used when no unit could be recognized
pub const DEFAULT_UNIT: &str = "piece";

/// Teaspoons per pinch or dash
pub const PINCH_TSP: f64 = 0.125;

/// Unicode vulgar fractions accepted as quantities
pub(crate) const VULGAR_FRACTIONS: &str = "½⅓⅔¼¾⅛⅜⅝⅞";

/// Result of parsing one raw ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub quantity: f64,
    /// Canonical unit token ("cup", "tbsp", "lb", "piece", ...)
    pub unit: String,
    /// Normalized ingredient name, possibly folded by a consolidation rule
    pub cleaned_name: String,
}

impl ParsedLine {
    /// Cleaned name with the first letter capitalized
    pub fn display_name(&self) -> String {
        crate::normalizer::capitalize(&self.cleaned_name)
    }
}

lazy_static! {
    /// Surface spelling -> canonical unit token
    static ref UNIT_SYNONYMS: HashMap<&'static str, &'static str> = {
        let table: &[(&str, &[&str])] = &[
            ("cup", &["cup", "cups", "c"]),
            ("tbsp", &["tbsp", "tbsps", "tbs", "tbl", "tablespoon", "tablespoons"]),
            ("tsp", &["tsp", "tsps", "teaspoon", "teaspoons"]),
            ("lb", &["lb", "lbs", "pound", "pounds"]),
            ("oz", &["oz", "ozs", "ounce", "ounces"]),
            ("g", &["g", "gr", "gram", "grams", "gramme", "grammes"]),
            ("kg", &["kg", "kgs", "kilo", "kilos", "kilogram", "kilograms"]),
            ("ml", &["ml", "milliliter", "milliliters", "millilitre", "millilitres"]),
            ("l", &["l", "liter", "liters", "litre", "litres"]),
            ("pint", &["pint", "pints", "pt"]),
            ("quart", &["quart", "quarts", "qt"]),
            ("gallon", &["gallon", "gallons", "gal"]),
            ("clove", &["clove", "cloves"]),
            ("head", &["head", "heads"]),
            ("can", &["can", "cans", "tin", "tins"]),
            ("jar", &["jar", "jars"]),
            ("bag", &["bag", "bags"]),
            ("box", &["box", "boxes"]),
            ("bunch", &["bunch", "bunches"]),
            ("package", &["package", "packages", "pkg", "pack", "packet", "packets"]),
            ("bottle", &["bottle", "bottles"]),
            ("carton", &["carton", "cartons"]),
            ("stick", &["stick", "sticks"]),
            ("slice", &["slice", "slices"]),
            ("sprig", &["sprig", "sprigs"]),
            ("loaf", &["loaf", "loaves"]),
            ("piece", &["piece", "pieces", "pc", "pcs"]),
            ("dozen", &["dozen", "doz"]),
            ("serving", &["serving", "servings"]),
            ("pinch", &["pinch", "pinches"]),
            ("dash", &["dash", "dashes"]),
        ];
        let mut map = HashMap::new();
        for (canonical, spellings) in table {
            for spelling in *spellings {
                map.insert(*spelling, *canonical);
            }
        }
        map
    };

    /// Alternation of every unit spelling, longest first, for embedding in other patterns
    pub(crate) static ref UNIT_ALTERNATION: String = {
        let mut spellings: Vec<&str> = UNIT_SYNONYMS.keys().copied().collect();
        spellings.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        spellings
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|")
    };

    static ref RANGE_SPLIT: Regex = Regex::new(r"^(?P<low>.+?)\s*(?:-|–|\bto\b)\s*(?P<high>.+)$")
        .expect("Invalid range regex pattern");

    static ref EXTRACTION_PATTERNS: Vec<(Regex, Handler)> = build_patterns();
}

/// Regex fragment matching a fraction, mixed number or vulgar fraction
pub(crate) fn fraction_fragment() -> String {
    format!(
        r"\d+\s+\d+/\d+|\d+/\d+|\d+\s*[{v}]|[{v}]",
        v = VULGAR_FRACTIONS
    )
}

/// Regex fragment matching a decimal or integer, optionally as a range
pub(crate) fn decimal_fragment() -> &'static str {
    r"\d+(?:\.\d+)?(?:\s*(?:-|–|to)\s*\d+(?:\.\d+)?)?"
}

/// Quantity, canonical unit, remaining text
type Extracted = (f64, String, String);
type Handler = fn(&Captures) -> Option<Extracted>;

fn build_patterns() -> Vec<(Regex, Handler)> {
    let fraction = fraction_fragment();
    let decimal = decimal_fragment();

    let patterns: Vec<(String, Handler)> = vec![
        (
            format!(r"(?i)^(?P<qty>{fraction})\s*(?P<unit>[a-z]+)\.?\s+(?P<rest>.+)$"),
            fraction_with_word as Handler,
        ),
        (
            format!(r"(?i)^(?P<qty>{decimal})\s*(?P<unit>[a-z]+)\.?\s+(?P<rest>.+)$"),
            number_with_unit as Handler,
        ),
        (
            format!(r"(?i)^(?P<qty>{decimal})\s+(?P<rest>.+)$"),
            bare_count as Handler,
        ),
        (
            r"(?i)^(?:an?\s+)?(?:pinch|dash)(?:es)?\s+(?:of\s+)?(?P<rest>.+)$".to_string(),
            pinch_or_dash as Handler,
        ),
    ];

    patterns
        .into_iter()
        .map(|(pattern, handler)| {
            let regex = Regex::new(&pattern).expect("Extraction pattern should be valid");
            (regex, handler)
        })
        .collect()
}

/// Fractions always produce a quantity; an unknown unit word goes back into the name
fn fraction_with_word(caps: &Captures) -> Option<Extracted> {
    let quantity = parse_quantity(&caps["qty"])?;
    let word = &caps["unit"];
    let rest = &caps["rest"];
    match canonical_unit(word) {
        Some(unit) => Some(apply_unit(quantity, unit, rest)),
        None => Some((quantity, DEFAULT_UNIT.to_string(), format!("{word} {rest}"))),
    }
}

/// Numbers followed by a recognized unit word
fn number_with_unit(caps: &Captures) -> Option<Extracted> {
    let quantity = parse_quantity(&caps["qty"])?;
    let unit = canonical_unit(&caps["unit"])?;
    Some(apply_unit(quantity, unit, &caps["rest"]))
}

/// Numbers with no recognized unit count pieces
fn bare_count(caps: &Captures) -> Option<Extracted> {
    let quantity = parse_quantity(&caps["qty"])?;
    Some((quantity, DEFAULT_UNIT.to_string(), caps["rest"].to_string()))
}

fn pinch_or_dash(caps: &Captures) -> Option<Extracted> {
    Some((PINCH_TSP, "tsp".to_string(), caps["rest"].to_string()))
}

/// Pinches and dashes are recorded in teaspoons so they sum with other spoon measures
fn apply_unit(quantity: f64, unit: &str, rest: &str) -> Extracted {
    match unit {
        "pinch" | "dash" => (quantity * PINCH_TSP, "tsp".to_string(), rest.to_string()),
        _ => (quantity, unit.to_string(), rest.to_string()),
    }
}

/// Map a unit spelling to its canonical token
///
/// # Examples
///
/// ```rust
/// use just_groceries::extractor::canonical_unit;
///
/// assert_eq!(canonical_unit("Tablespoons"), Some("tbsp"));
/// assert_eq!(canonical_unit("cups"), Some("cup"));
/// assert_eq!(canonical_unit("tbsp."), Some("tbsp"));
/// assert_eq!(canonical_unit("large"), None);
/// ```
pub fn canonical_unit(word: &str) -> Option<&'static str> {
    let lower = word.trim().trim_end_matches('.').to_lowercase();
    UNIT_SYNONYMS.get(lower.as_str()).copied()
}

fn vulgar_value(c: char) -> Option<f64> {
    match c {
        '½' => Some(0.5),
        '⅓' => Some(1.0 / 3.0),
        '⅔' => Some(2.0 / 3.0),
        '¼' => Some(0.25),
        '¾' => Some(0.75),
        '⅛' => Some(0.125),
        '⅜' => Some(0.375),
        '⅝' => Some(0.625),
        '⅞' => Some(0.875),
        _ => None,
    }
}

fn parse_term(term: &str) -> Option<f64> {
    if let Some(last) = term.chars().last() {
        if let Some(fraction) = vulgar_value(last) {
            let whole = &term[..term.len() - last.len_utf8()];
            let whole = if whole.is_empty() { 0.0 } else { whole.parse::<f64>().ok()? };
            return Some(whole + fraction);
        }
    }

    if let Some((numerator, denominator)) = term.split_once('/') {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    term.parse::<f64>().ok()
}

/// Parse a numeric quantity expression
///
/// Mixed numbers are summed term by term; ranges keep their upper bound.
///
/// # Examples
///
/// ```rust
/// use just_groceries::extractor::parse_quantity;
///
/// assert_eq!(parse_quantity("2 1/4"), Some(2.25));
/// assert_eq!(parse_quantity("1/2"), Some(0.5));
/// assert_eq!(parse_quantity("1½"), Some(1.5));
/// assert_eq!(parse_quantity("2-3"), Some(3.0));
/// assert_eq!(parse_quantity("1/0"), None);
/// ```
pub fn parse_quantity(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = RANGE_SPLIT.captures(text) {
        let low = parse_quantity(&caps["low"]);
        let high = parse_quantity(&caps["high"]);
        if let (Some(low), Some(high)) = (low, high) {
            return Some(low.max(high));
        }
    }

    // "1 ½" and "1½" both sum to 1.5
    let mut total = 0.0;
    for term in text.split_whitespace() {
        total += parse_term(term)?;
    }

    if total.is_finite() && total >= 0.0 {
        Some(total)
    } else {
        None
    }
}

/// Extract quantity, unit and cleaned name from a raw ingredient line
///
/// The cleaned name here is only normalized; consolidation rules are applied
/// afterwards by the matcher (see [`crate::engine::GroceryEngine::extract`]).
///
/// # Examples
///
/// ```rust
/// use just_groceries::extractor::extract_quantity;
///
/// let parsed = extract_quantity("2 1/4 cups all-purpose flour");
/// assert_eq!(parsed.quantity, 2.25);
/// assert_eq!(parsed.unit, "cup");
/// assert_eq!(parsed.cleaned_name, "all-purpose flour");
/// ```
pub fn extract_quantity(raw: &str) -> ParsedLine {
    let trimmed = raw.trim();

    for (regex, handler) in EXTRACTION_PATTERNS.iter() {
        let Some(caps) = regex.captures(trimmed) else {
            continue;
        };
        if let Some((quantity, unit, rest)) = handler(&caps) {
            let cleaned_name = normalize(&rest);
            trace!(
                raw = %trimmed,
                pattern = %regex.as_str(),
                quantity,
                unit = %unit,
                cleaned_name = %cleaned_name,
                "Extracted quantity"
            );
            return ParsedLine {
                quantity,
                unit,
                cleaned_name,
            };
        }
    }

    trace!(raw = %trimmed, "No quantity pattern matched, using defaults");
    ParsedLine {
        quantity: 1.0,
        unit: DEFAULT_UNIT.to_string(),
        cleaned_name: normalize(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_number_with_unit() {
        let parsed = extract_quantity("2 1/4 cups flour");
        assert_eq!(parsed.quantity, 2.25);
        assert_eq!(parsed.unit, "cup");
        assert_eq!(parsed.cleaned_name, "flour");
    }

    #[test]
    fn test_decimal_with_unit() {
        let parsed = extract_quantity("1.5 tsp salt");
        assert_eq!(parsed.quantity, 1.5);
        assert_eq!(parsed.unit, "tsp");
        assert_eq!(parsed.cleaned_name, "salt");
    }

    #[test]
    fn test_attached_unit() {
        let parsed = extract_quantity("500g butter");
        assert_eq!(parsed.quantity, 500.0);
        assert_eq!(parsed.unit, "g");
        assert_eq!(parsed.cleaned_name, "butter");
    }

    #[test]
    fn test_count_without_unit() {
        let parsed = extract_quantity("3 large eggs");
        assert_eq!(parsed.quantity, 3.0);
        assert_eq!(parsed.unit, "piece");
        assert_eq!(parsed.cleaned_name, "eggs");
    }

    #[test]
    fn test_fraction_with_unknown_word_keeps_word_in_name() {
        let parsed = extract_quantity("1/2 red onion");
        assert_eq!(parsed.quantity, 0.5);
        assert_eq!(parsed.unit, "piece");
        assert_eq!(parsed.cleaned_name, "red onion");
    }

    #[test]
    fn test_pinch_and_dash() {
        let parsed = extract_quantity("pinch of salt");
        assert_eq!(parsed.quantity, 0.125);
        assert_eq!(parsed.unit, "tsp");
        assert_eq!(parsed.cleaned_name, "salt");

        let parsed = extract_quantity("a dash of hot sauce");
        assert_eq!(parsed.quantity, 0.125);
        assert_eq!(parsed.cleaned_name, "hot sauce");

        let parsed = extract_quantity("2 pinches nutmeg");
        assert_eq!(parsed.quantity, 0.25);
        assert_eq!(parsed.unit, "tsp");
    }

    #[test]
    fn test_article_led_unit_counts_as_one_piece() {
        let parsed = extract_quantity("a can of diced tomatoes");
        assert_eq!(parsed.quantity, 1.0);
        assert_eq!(parsed.unit, "piece");
        assert_eq!(parsed.cleaned_name, "tomatoes");

        let parsed = extract_quantity("A bag of spinach");
        assert_eq!(parsed.unit, "piece");
        assert_eq!(parsed.cleaned_name, "spinach");
    }

    #[test]
    fn test_range_keeps_upper_bound() {
        let parsed = extract_quantity("2-3 cloves garlic, minced");
        assert_eq!(parsed.quantity, 3.0);
        assert_eq!(parsed.unit, "clove");
        assert_eq!(parsed.cleaned_name, "garlic");
    }

    #[test]
    fn test_vulgar_fraction() {
        let parsed = extract_quantity("½ cup milk");
        assert_eq!(parsed.quantity, 0.5);
        assert_eq!(parsed.unit, "cup");
    }

    #[test]
    fn test_no_leading_number_defaults() {
        for text in ["salt to taste", "fresh basil leaves", "Chicken breast", "???"] {
            let parsed = extract_quantity(text);
            assert_eq!(parsed.quantity, 1.0, "quantity for '{}'", text);
            assert_eq!(parsed.unit, "piece", "unit for '{}'", text);
            assert!(!parsed.cleaned_name.is_empty());
        }
    }

    #[test]
    fn test_unit_synonyms() {
        assert_eq!(canonical_unit("tablespoons"), Some("tbsp"));
        assert_eq!(canonical_unit("Pounds"), Some("lb"));
        assert_eq!(canonical_unit("cloves"), Some("clove"));
        assert_eq!(canonical_unit("tomato"), None);
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("3/0"), None);
    }
}
