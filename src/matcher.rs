//! # Matcher
//!
//! Resolves a cleaned ingredient name to a canonical catalog ingredient.
//!
//! Attempts run in a fixed order and the first success wins:
//!
//! 1. Consolidation rules (variant contained in the name, or similar enough)
//! 2. Catalog base name contained in the name
//! 3. Catalog alias contained in the name
//! 4. Fuzzy similarity against base names
//!
//! Containment is word-aware: "eggplant" does not contain "egg", while
//! "onions" contains "onion".

use crate::catalog::{CanonicalIngredient, Catalog, ConsolidationRule};
use crate::config::EngineConfig;
use tracing::trace;

/// Which matching stage produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Rule,
    Key,
    Alias,
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Rule => "rule",
            MatchKind::Key => "key",
            MatchKind::Alias => "alias",
            MatchKind::Fuzzy => "fuzzy",
        }
    }
}

/// A successful catalog match
#[derive(Debug, Clone, Copy)]
pub struct IngredientMatch<'a> {
    pub ingredient: &'a CanonicalIngredient,
    pub kind: MatchKind,
}

/// Borrowing matcher over an immutable catalog
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
    rule_threshold: f64,
    fuzzy_threshold: f64,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a Catalog, config: &EngineConfig) -> Self {
        Self::with_thresholds(
            catalog,
            config.rule_similarity_threshold,
            config.fuzzy_similarity_threshold,
        )
    }

    pub fn with_thresholds(
        catalog: &'a Catalog,
        rule_threshold: f64,
        fuzzy_threshold: f64,
    ) -> Self {
        Self {
            catalog,
            rule_threshold,
            fuzzy_threshold,
        }
    }

    /// Find the consolidation rule that folds `name`, if any
    ///
    /// An exact variant wins, then the longest contained variant, then the
    /// most similar variant above the rule threshold.
    pub fn find_rule(&self, name: &str) -> Option<&'a ConsolidationRule> {
        let lowered = name.trim().to_lowercase();
        let name = lowered.as_str();
        if name.is_empty() {
            return None;
        }
        let rules = self.catalog.rules();

        if let Some(rule) = rules.iter().find(|r| r.variants.iter().any(|v| *v == name)) {
            return Some(rule);
        }

        let contained = rules
            .iter()
            .flat_map(|r| r.variants.iter().map(move |v| (r, v)))
            .filter(|(_, variant)| contains_phrase(name, variant))
            .fold(None::<(&ConsolidationRule, usize)>, |best, (rule, variant)| match best {
                Some((_, len)) if len >= variant.len() => best,
                _ => Some((rule, variant.len())),
            });
        if let Some((rule, _)) = contained {
            return Some(rule);
        }

        rules
            .iter()
            .flat_map(|r| r.variants.iter().map(move |v| (r, similarity(name, v))))
            .filter(|(_, score)| *score >= self.rule_threshold)
            .fold(None::<(&ConsolidationRule, f64)>, |best, (rule, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((rule, score)),
            })
            .map(|(rule, _)| rule)
    }

    /// Fold `name` through the consolidation rules
    ///
    /// Returns the rule's canonical name, or the lowercased input when no rule applies.
    pub fn resolve_name(&self, name: &str) -> String {
        match self.find_rule(name) {
            Some(rule) => rule.canonical_name.clone(),
            None => name.trim().to_lowercase(),
        }
    }

    /// Match a cleaned name against the catalog
    pub fn find(&self, cleaned_name: &str) -> Option<IngredientMatch<'a>> {
        let mut name = cleaned_name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }

        if let Some(rule) = self.find_rule(&name) {
            if let Some(ingredient) = self.catalog.lookup(&rule.canonical_name) {
                return Some(self.matched(cleaned_name, ingredient, MatchKind::Rule));
            }
            // A rule pointing outside the catalog still renames the phrase
            name = rule.canonical_name.clone();
        }

        if let Some(ingredient) = self.longest_contained(&name, |i| std::iter::once(&i.base_name)) {
            return Some(self.matched(cleaned_name, ingredient, MatchKind::Key));
        }

        if let Some(ingredient) = self.longest_contained(&name, |i| i.aliases.iter()) {
            return Some(self.matched(cleaned_name, ingredient, MatchKind::Alias));
        }

        let fuzzy = self
            .catalog
            .ingredients()
            .iter()
            .map(|i| (i, similarity(&name, &i.base_name)))
            .filter(|(_, score)| *score >= self.fuzzy_threshold)
            .fold(None::<(&CanonicalIngredient, f64)>, |best, (ingredient, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((ingredient, score)),
            });
        if let Some((ingredient, _)) = fuzzy {
            return Some(self.matched(cleaned_name, ingredient, MatchKind::Fuzzy));
        }

        trace!(cleaned_name = %cleaned_name, "No catalog match");
        None
    }

    /// Catalog ingredient whose longest candidate phrase occurs in `name`
    fn longest_contained<F, I>(&self, name: &str, phrases: F) -> Option<&'a CanonicalIngredient>
    where
        F: Fn(&'a CanonicalIngredient) -> I,
        I: Iterator<Item = &'a String>,
    {
        let mut best: Option<(&'a CanonicalIngredient, usize)> = None;
        for ingredient in self.catalog.ingredients() {
            for phrase in phrases(ingredient) {
                if !contains_phrase(name, phrase) {
                    continue;
                }
                if best.map_or(true, |(_, len)| phrase.len() > len) {
                    best = Some((ingredient, phrase.len()));
                }
            }
        }
        best.map(|(ingredient, _)| ingredient)
    }

    fn matched(
        &self,
        cleaned_name: &str,
        ingredient: &'a CanonicalIngredient,
        kind: MatchKind,
    ) -> IngredientMatch<'a> {
        trace!(
            cleaned_name = %cleaned_name,
            base_name = %ingredient.base_name,
            kind = kind.as_str(),
            "Matched ingredient"
        );
        IngredientMatch { ingredient, kind }
    }
}

/// Whether `needle` occurs in `haystack` as whole words, allowing a plural suffix
///
/// Both arguments are expected in lowercase.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let is_word_char = |c: char| c.is_alphanumeric();
    let mut search_from = 0;

    while let Some(offset) = haystack[search_from..].find(needle) {
        let start = search_from + offset;
        let end = start + needle.len();

        let starts_word = haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let tail = &haystack[end..];
        let ends_word = ["", "s", "es"].iter().any(|suffix| {
            tail.strip_prefix(suffix)
                .is_some_and(|after| after.chars().next().map_or(true, |c| !is_word_char(c)))
        });

        if starts_word && ends_word {
            return true;
        }

        // Advance past the first character of this occurrence
        search_from = start + haystack[start..].chars().next().map_or(1, |c| c.len_utf8());
    }

    false
}

/// Edit distance between two strings, counted in characters
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let len1 = a_chars.len();
    let len2 = b_chars.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    #[allow(clippy::needless_range_loop)]
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[len1][len2]
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    (max_len - levenshtein(a, b)) as f64 / max_len as f64
}
