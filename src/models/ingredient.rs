// ABOUTME: Ingredient data model with macros, translations, availability, and allergen modes
// ABOUTME: Covers universal catalog entries and country-specific records with substitution maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Macro-nutrients per default portion
///
/// All values are non-negative; the catalog seed data is validated by
/// construction rather than at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    /// Energy (kcal)
    pub kcal: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
}

impl MacroNutrients {
    /// Construct a macro quintuple, clamping negatives to zero
    #[must_use]
    pub fn new(kcal: f64, protein_g: f64, carbs_g: f64, fat_g: f64, fiber_g: f64) -> Self {
        Self {
            kcal: kcal.max(0.0),
            protein_g: protein_g.max(0.0),
            carbs_g: carbs_g.max(0.0),
            fat_g: fat_g.max(0.0),
            fiber_g: fiber_g.max(0.0),
        }
    }

    /// Zero macros, used when an id cannot be resolved in any catalog
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            kcal: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
        }
    }
}

/// Coarse ingredient classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Grains and cereals
    Grain,
    /// Meat, fish, and other protein sources
    Protein,
    /// Milk-based products
    Dairy,
    /// Vegetables
    Vegetable,
    /// Fruits
    Fruit,
    /// Legumes and pulses
    Legume,
    /// Oils and fats
    Fat,
    /// Drinks
    Beverage,
    /// Sauces, spreads, and seasonings
    Condiment,
    /// Breads and baked goods
    Bakery,
}

/// Localized display text for an ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Display name in the translation's locale
    pub name: String,
    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Translation {
    /// Name-only translation
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Translation with a description
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }
}

/// How an ingredient declares its allergens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum AllergenMode {
    /// Fixed allergen list authored with the catalog entry
    Static {
        /// Intolerance-category keys (e.g. "dairy", "gluten")
        allergens: Vec<String>,
    },
    /// Allergens resolved at runtime against the external safety source
    Dynamic {
        /// Minimum allergen set merged into every dynamic resolution
        static_floor: Vec<String>,
    },
}

impl AllergenMode {
    /// Static allergens, or the dynamic floor that never depends on the
    /// external source
    #[must_use]
    pub fn static_allergens(&self) -> &[String] {
        match self {
            Self::Static { allergens } => allergens,
            Self::Dynamic { static_floor } => static_floor,
        }
    }

    /// Whether resolution requires the external safety source
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }
}

/// Protein classification derived once at catalog load time
///
/// The cultural engine matches these tags instead of re-scanning ingredient
/// ids on every validation; unknown ids fall back to a keyword scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinTags {
    /// Red meat and other heavy proteins (beef, pork, lamb)
    pub is_heavy_protein: bool,
    /// Poultry (chicken, turkey)
    pub is_poultry: bool,
    /// Counts toward the lunch/dinner protein requirement
    pub is_protein_source: bool,
}

/// Universal ingredient record
///
/// Immutable reference data describing an ingredient assumed available in
/// every supported country (or, when `available_in` is non-empty, the listed
/// ones). Loaded once; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient identifier (snake_case)
    pub id: String,
    /// Coarse classification
    pub category: IngredientCategory,
    /// Macro-nutrients per default portion
    pub macros: MacroNutrients,
    /// Default portion size in grams
    pub portion_grams: f64,
    /// Countries where the ingredient is available; empty means everywhere
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_in: Vec<String>,
    /// Marks an ingredient tied to a regional food culture
    #[serde(default)]
    pub regional: bool,
    /// Allergen declaration
    pub allergens: AllergenMode,
    /// Locale code → display text; always carries at least the fallback locale
    pub translations: HashMap<String, Translation>,
    /// Derived protein classification (computed at load, not authored)
    #[serde(default)]
    pub protein_tags: ProteinTags,
}

impl Ingredient {
    /// Exact-locale translation lookup; fallback chains live in the catalog
    #[must_use]
    pub fn translation(&self, locale: &str) -> Option<&Translation> {
        self.translations.get(locale)
    }

    /// Whether this ingredient is available in the given country
    #[must_use]
    pub fn available_in_country(&self, country: &str) -> bool {
        self.available_in.is_empty() || self.available_in.iter().any(|c| c == country)
    }
}

/// Country-specific ingredient record
///
/// Same shape as [`Ingredient`] but scoped to one country, plus an explicit
/// substitution map. A dangling substitute id (not found in any catalog) is a
/// tolerated data defect: lookups degrade to pass-through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountrySpecificIngredient {
    /// The underlying ingredient record
    pub ingredient: Ingredient,
    /// Country this record is scoped to
    pub country: String,
    /// Target country code → substitute ingredient id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub substitutions: HashMap<String, String>,
}

impl CountrySpecificIngredient {
    /// Explicit substitute id for a target country, if one is mapped
    #[must_use]
    pub fn substitute_for(&self, target_country: &str) -> Option<&str> {
        self.substitutions.get(target_country).map(String::as_str)
    }
}
