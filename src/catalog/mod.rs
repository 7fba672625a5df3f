// ABOUTME: Universal ingredient catalog with O(1) lookups and translation fallback chain
// ABOUTME: Load-once immutable reference data; no failure mode beyond "not found"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Ingredient Catalog
//!
//! Static map of universal ingredients: id, macros, translations, and
//! availability. Loaded once at process start from the compiled-in seed data
//! and never mutated, so it is safe under unbounded concurrent reads.
//!
//! Name resolution follows a deterministic fallback chain:
//! exact locale → same base-language prefix → default locale → raw id.

/// Compiled-in universal ingredient seed data
pub mod data;
/// Per-country ingredient registry with substitution maps
pub mod registry;
/// Compiled-in country-specific seed data
pub mod registry_data;

pub use registry::CountryIngredientRegistry;

use crate::constants::locale::DEFAULT_LOCALE;
use crate::models::{Ingredient, Translation};
use std::collections::HashMap;

/// Load-once map of universal ingredients
#[derive(Debug, Clone)]
pub struct IngredientCatalog {
    ingredients: HashMap<String, Ingredient>,
}

impl IngredientCatalog {
    /// Build the catalog from the compiled-in seed data
    #[must_use]
    pub fn seed() -> Self {
        Self::from_ingredients(data::universal_ingredients())
    }

    /// Build a catalog from an explicit ingredient list (tests, future loaders)
    #[must_use]
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Self {
        let ingredients = ingredients
            .into_iter()
            .map(|i| (i.id.clone(), i))
            .collect();
        Self { ingredients }
    }

    /// Look up an ingredient by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    /// Whether the id names a universal ingredient
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ingredients.contains_key(id)
    }

    /// Universal ingredients available in the given country
    #[must_use]
    pub fn available_in(&self, country: &str) -> Vec<&Ingredient> {
        let mut list: Vec<_> = self
            .ingredients
            .values()
            .filter(|i| i.available_in_country(country))
            .collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        list
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Translated display name with the full fallback chain; unknown ids
    /// resolve to the raw id
    #[must_use]
    pub fn translated_name(&self, id: &str, locale: &str) -> String {
        self.get(id)
            .and_then(|i| resolve_translation(&i.translations, locale))
            .map_or_else(|| id.to_owned(), |t| t.name.clone())
    }

    /// Translated description with the same fallback chain; `None` when the
    /// resolved translation carries no description
    #[must_use]
    pub fn translated_description(&self, id: &str, locale: &str) -> Option<String> {
        self.get(id)
            .and_then(|i| resolve_translation(&i.translations, locale))
            .and_then(|t| t.description.clone())
    }
}

/// Resolve a translation map against a locale
///
/// Tiers, in order: exact locale, any entry sharing the locale's base
/// language (smallest key wins so the choice is deterministic), the default
/// locale. Returns `None` only when all three tiers miss.
#[must_use]
pub fn resolve_translation<'a>(
    translations: &'a HashMap<String, Translation>,
    locale: &str,
) -> Option<&'a Translation> {
    if let Some(exact) = translations.get(locale) {
        return Some(exact);
    }

    let base = base_language(locale);
    if !base.is_empty() {
        let mut same_base: Vec<&String> = translations
            .keys()
            .filter(|key| base_language(key) == base)
            .collect();
        same_base.sort();
        if let Some(key) = same_base.first() {
            return translations.get(*key);
        }
    }

    translations.get(DEFAULT_LOCALE)
}

/// Base language of a locale code ("pt-BR" → "pt")
#[must_use]
pub fn base_language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations(entries: &[(&str, &str)]) -> HashMap<String, Translation> {
        entries
            .iter()
            .map(|(locale, name)| ((*locale).to_owned(), Translation::name_only(*name)))
            .collect()
    }

    #[test]
    fn test_fallback_exact_beats_base() {
        let map = translations(&[("pt-BR", "Arroz"), ("pt-PT", "Arroz (PT)"), ("en-US", "Rice")]);
        assert_eq!(resolve_translation(&map, "pt-PT").map(|t| &t.name), Some(&"Arroz (PT)".to_owned()));
    }

    #[test]
    fn test_fallback_base_language() {
        let map = translations(&[("pt-BR", "Feijão"), ("en-US", "Beans")]);
        assert_eq!(resolve_translation(&map, "pt-PT").map(|t| &t.name), Some(&"Feijão".to_owned()));
    }

    #[test]
    fn test_fallback_default_locale() {
        let map = translations(&[("en-US", "Beans"), ("pt-BR", "Feijão")]);
        assert_eq!(resolve_translation(&map, "ja-JP").map(|t| &t.name), Some(&"Beans".to_owned()));
    }

    #[test]
    fn test_unknown_id_resolves_to_raw_id() {
        let catalog = IngredientCatalog::seed();
        assert_eq!(catalog.translated_name("no_such_thing", "en-US"), "no_such_thing");
    }
}
