//! # Text Normalizer
//!
//! Reduces a raw ingredient phrase to a bare ingredient name by stripping
//! asides, quantities, qualifiers, preparation words, sizes and packaging.
//!
//! ```rust
//! use just_groceries::normalizer::normalize;
//!
//! assert_eq!(normalize("2 cups of cooked rice"), "rice");
//! assert_eq!(normalize("1 (15 oz) can black beans, rinsed and drained"), "black beans");
//! assert_eq!(normalize("3 large organic eggs"), "eggs");
//! ```

use crate::extractor::{decimal_fragment, fraction_fragment, UNIT_ALTERNATION};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::trace;

lazy_static! {
    static ref PARENTHETICAL: Regex =
        Regex::new(r"\([^)]*\)?|\[[^\]]*\]?").expect("Invalid parenthetical regex pattern");

    static ref LEADING_QUANTITY: Regex = Regex::new(&format!(
        r"(?i)^(?:{fraction}|{decimal})(?:\s*(?:{units})\.?)?(?:\s+|$)",
        fraction = fraction_fragment(),
        decimal = decimal_fragment(),
        units = *UNIT_ALTERNATION,
    ))
    .expect("Invalid leading quantity regex pattern");

    static ref QUALIFIERS: HashSet<&'static str> = [
        "fresh", "freshly", "organic", "reduced-fat", "low-fat", "lowfat", "fat-free",
        "nonfat", "non-fat", "extra-virgin", "virgin", "whole", "2%", "1%", "skim",
        "unsalted", "salted", "boneless", "skinless", "lean", "extra-lean", "plain", "raw",
        "ripe", "dried", "canned", "low-sodium", "reduced-sodium", "unsweetened", "sweetened",
        "optional", "good-quality", "store-bought", "homemade", "room-temperature",
    ]
    .into_iter()
    .collect();

    static ref PREPARATION: HashSet<&'static str> = [
        "chopped", "diced", "minced", "sliced", "grated", "shredded", "crumbled", "rinsed",
        "drained", "peeled", "cubed", "crushed", "cooked", "melted", "softened", "beaten",
        "halved", "quartered", "julienned", "trimmed", "thawed", "toasted", "roasted",
        "divided", "packed", "sifted", "mashed", "finely", "roughly", "thinly", "coarsely",
        "seeded", "cored", "zested", "juiced", "deveined", "pitted",
    ]
    .into_iter()
    .collect();

    static ref SIZES: HashSet<&'static str> = [
        "large", "medium", "small", "jumbo", "baby", "extra-large", "big", "mini", "thick",
        "thin",
    ]
    .into_iter()
    .collect();

    static ref PACKAGING: HashSet<&'static str> = [
        "can", "cans", "jar", "jars", "bag", "bags", "box", "boxes", "clove", "cloves",
        "head", "heads", "pinch", "pinches", "dash", "dashes", "package", "packages", "pkg",
        "bunch", "bunches", "bottle", "bottles", "container", "containers", "stick", "sticks",
        "sprig", "sprigs", "carton", "cartons", "packet", "packets",
    ]
    .into_iter()
    .collect();
}

/// Multi-word noise removed before tokenizing
const FILLER_PHRASES: &[&str] = &[
    "extra virgin",
    "to taste",
    "for garnish",
    "for serving",
    "as needed",
    "if desired",
    "at room temperature",
];

/// Words dropped from either end of the result
const CONNECTORS: &[&str] = &["a", "an", "the", "of", "and", "or", "some"];

fn is_noise(word: &str) -> bool {
    QUALIFIERS.contains(word)
        || PREPARATION.contains(word)
        || SIZES.contains(word)
        || PACKAGING.contains(word)
}

/// Token with surrounding punctuation removed ("chopped," -> "chopped")
fn token_core(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric() && c != '%' && c != '-' && c != '\'')
}

/// One normalization pass; applying passes until nothing changes gives the final name
fn normalize_pass(text: &str) -> String {
    let mut name = text.trim().to_lowercase();

    name = PARENTHETICAL.replace_all(&name, " ").into_owned();

    if let Some(comma) = name.find(',') {
        name.truncate(comma);
    }

    name = LEADING_QUANTITY.replace(name.trim_start(), "").into_owned();

    for phrase in FILLER_PHRASES {
        if name.contains(phrase) {
            name = name.replace(phrase, " ");
        }
    }

    let mut words: Vec<&str> = name
        .split_whitespace()
        .map(token_core)
        .filter(|word| !word.is_empty() && !is_noise(word))
        .collect();

    while words.first().is_some_and(|w| CONNECTORS.contains(w)) {
        words.remove(0);
    }
    while words.last().is_some_and(|w| CONNECTORS.contains(w)) {
        words.pop();
    }

    words.join(" ")
}

/// Normalize a raw ingredient phrase to a bare ingredient name
///
/// The output is lowercase and never empty for non-empty input. When every
/// token is noise, the original trimmed text is returned unchanged.
/// Normalizing an already normalized name returns it as is.
pub fn normalize(raw: &str) -> String {
    let original = raw.trim();
    if original.is_empty() {
        return String::new();
    }

    // After the first pass the text is lowercase and single-spaced, so every
    // further pass either removes text or changes nothing
    let mut current = original.to_string();
    loop {
        let next = normalize_pass(&current);
        if next.is_empty() {
            trace!(raw = %original, "Everything stripped, keeping original text");
            return original.to_string();
        }
        if next == current {
            break;
        }
        current = next;
    }

    trace!(raw = %original, normalized = %current, "Normalized ingredient text");
    current
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
