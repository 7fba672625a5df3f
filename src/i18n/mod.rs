// ABOUTME: Locale resolver - country/locale mapping, ingredient name resolution, UI strings
// ABOUTME: Constructed from an explicit locale, an explicit country, or the fixed default pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Locale/i18n Resolver
//!
//! Text and name resolution for presentation collaborators. The resolver
//! wraps the catalog's translation fallback chain, extends it to
//! country-specific records, serves the fixed UI string table, and localizes
//! whole ingredient lists by delegating per item to the substitution engine.

/// Locale auto-detection strategy chain
pub mod detection;
/// Fixed UI string table
pub mod strings;

use crate::catalog::{resolve_translation, CountryIngredientRegistry, IngredientCatalog};
use crate::constants::locale::{DEFAULT_COUNTRY, DEFAULT_LOCALE};
use crate::substitution::SubstitutionEngine;

/// Static bidirectional country ↔ locale table
///
/// Unknown input on either side falls back to the fixed default pair.
pub const COUNTRY_LOCALES: &[(&str, &str)] = &[
    ("US", "en-US"),
    ("GB", "en-GB"),
    ("BR", "pt-BR"),
    ("PT", "pt-PT"),
    ("ES", "es-ES"),
    ("MX", "es-MX"),
    ("FR", "fr-FR"),
    ("DE", "de-DE"),
    ("IT", "it-IT"),
    ("JP", "ja-JP"),
];

/// Locale for a country code, defaulting to the fixed pair
#[must_use]
pub fn locale_for_country(country: &str) -> &'static str {
    COUNTRY_LOCALES
        .iter()
        .find(|(code, _)| *code == country)
        .map_or(DEFAULT_LOCALE, |(_, locale)| *locale)
}

/// Country for a locale code, defaulting to the fixed pair
#[must_use]
pub fn country_for_locale(locale: &str) -> &'static str {
    COUNTRY_LOCALES
        .iter()
        .find(|(_, code)| *code == locale)
        .map_or(DEFAULT_COUNTRY, |(country, _)| *country)
}

/// Whether the locale appears in the supported table
#[must_use]
pub fn is_supported_locale(locale: &str) -> bool {
    COUNTRY_LOCALES.iter().any(|(_, code)| *code == locale)
}

/// Locale-aware resolver over the shared reference data
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver<'a> {
    catalog: &'a IngredientCatalog,
    registry: &'a CountryIngredientRegistry,
    locale: &'static str,
    country: &'static str,
}

impl<'a> LocaleResolver<'a> {
    /// Resolver for an explicit locale; unknown locales become the default pair
    #[must_use]
    pub fn from_locale(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
        locale: &str,
    ) -> Self {
        let locale = if is_supported_locale(locale) {
            // Reborrow the static table entry rather than keeping the input alive
            locale_for_country(country_for_locale(locale))
        } else {
            DEFAULT_LOCALE
        };
        Self {
            catalog,
            registry,
            locale,
            country: country_for_locale(locale),
        }
    }

    /// Resolver for an explicit country; unknown countries become the default pair
    #[must_use]
    pub fn for_country(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
        country: &str,
    ) -> Self {
        let locale = locale_for_country(country);
        Self {
            catalog,
            registry,
            locale,
            country: country_for_locale(locale),
        }
    }

    /// Resolver for the fixed default pair
    #[must_use]
    pub fn with_defaults(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
    ) -> Self {
        Self {
            catalog,
            registry,
            locale: DEFAULT_LOCALE,
            country: DEFAULT_COUNTRY,
        }
    }

    /// Effective locale
    #[must_use]
    pub const fn locale(&self) -> &str {
        self.locale
    }

    /// Effective country
    #[must_use]
    pub const fn country(&self) -> &str {
        self.country
    }

    /// Localized ingredient name via the catalog fallback chain, extended to
    /// country-specific records; unknown ids resolve to the raw id
    #[must_use]
    pub fn ingredient_name(&self, id: &str) -> String {
        if self.catalog.contains(id) {
            return self.catalog.translated_name(id, self.locale);
        }
        self.registry
            .find_anywhere(id)
            .and_then(|record| resolve_translation(&record.ingredient.translations, self.locale))
            .map_or_else(|| id.to_owned(), |t| t.name.clone())
    }

    /// Localized ingredient description, if the resolved translation has one
    #[must_use]
    pub fn ingredient_description(&self, id: &str) -> Option<String> {
        if self.catalog.contains(id) {
            return self.catalog.translated_description(id, self.locale);
        }
        self.registry
            .find_anywhere(id)
            .and_then(|record| resolve_translation(&record.ingredient.translations, self.locale))
            .and_then(|t| t.description.clone())
    }

    /// Localized UI string; falls back to the key itself
    #[must_use]
    pub fn ui_text(&self, key: &str) -> String {
        strings::lookup(key, self.locale)
    }

    /// Localize an ingredient list for a target country
    ///
    /// Delegates per item to the substitution engine from this resolver's
    /// country; when `target_country` equals the current country the list
    /// comes back unchanged.
    #[must_use]
    pub fn translate_ingredient_list(
        &self,
        ids: &[impl AsRef<str>],
        target_country: &str,
    ) -> Vec<String> {
        let engine = SubstitutionEngine::new(self.catalog, self.registry);
        engine
            .substitute_meal_ingredients(ids, self.country, target_country)
            .substituted_ids
    }
}
