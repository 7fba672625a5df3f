// ABOUTME: Static cultural rule tables - forbidden pairs, density policies, protein keywords
// ABOUTME: Authored externally, compiled in as a snapshot; the engine never mutates these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! Cultural rule tables
//!
//! These tables are authored and maintained in the rule administration layer;
//! this module carries the loaded snapshot the engine evaluates against.
//! Keyword lists include Portuguese and Spanish variants because recipe ids in
//! the historic catalog were authored in the dishes' home languages.

use crate::models::{MealDensity, MealType, ProteinTags};

/// Ingredient pairs that never appear together in any supported food culture
pub const GLOBAL_FORBIDDEN_PAIRS: &[(&str, &str)] = &[
    ("fish", "milk"),
    ("melancia", "leite"),
    ("sardine", "yogurt"),
];

/// Per-country forbidden pairs layered on top of the global list
pub const COUNTRY_FORBIDDEN_PAIRS: &[(&str, &[(&str, &str)])] = &[
    (
        "BR",
        &[
            ("macarrao", "salada"),
            ("feijoada", "queijo"),
            ("churrasco", "sopa"),
        ],
    ),
    ("JP", &[("miso", "cheese"), ("natto", "milk")]),
    ("IT", &[("pasta", "ketchup"), ("pizza", "pineapple")]),
];

/// Red-meat and other heavy-protein keywords (with locale variants)
pub const HEAVY_PROTEIN_KEYWORDS: &[&str] = &[
    "beef", "pork", "lamb", "steak", "bife", "porco", "cordeiro", "picanha", "costela", "cerdo",
    "cordero",
];

/// Poultry keywords, additionally disallowed in the late-evening snack
pub const POULTRY_KEYWORDS: &[&str] = &["chicken", "turkey", "frango", "peru", "pollo", "pavo"];

/// Keywords that satisfy the lunch/dinner protein requirement
pub const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "egg", "tofu", "turkey", "salmon", "tuna", "shrimp",
    "lentil", "frango", "carne", "peixe", "ovo", "salmao", "atum", "camarao", "lentilha", "pollo",
    "pescado", "huevo",
];

/// Density subsets allowed per meal type
///
/// A density outside the subset is a warning, not a violation: the meal is
/// unusual for its slot but not culturally wrong.
#[must_use]
pub const fn allowed_densities(meal_type: MealType) -> &'static [MealDensity] {
    match meal_type {
        MealType::Breakfast | MealType::Snack => &[MealDensity::Light, MealDensity::Moderate],
        MealType::Lunch | MealType::Dinner => &[MealDensity::Moderate, MealDensity::Heavy],
        MealType::Supper => &[MealDensity::Light],
        MealType::Other => &[MealDensity::Light, MealDensity::Moderate, MealDensity::Heavy],
    }
}

/// Forbidden pairs for a country: its own list plus the global one
#[must_use]
pub fn forbidden_pairs(country: &str) -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<_> = COUNTRY_FORBIDDEN_PAIRS
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, pairs)| pairs.to_vec())
        .unwrap_or_default();
    pairs.extend_from_slice(GLOBAL_FORBIDDEN_PAIRS);
    pairs
}

/// Whether any keyword is a case-insensitive substring of the id
#[must_use]
pub fn matches_any_keyword(id: &str, keywords: &[&str]) -> bool {
    let lowered = id.to_lowercase();
    keywords.iter().any(|kw| lowered.contains(kw))
}

/// Derive protein tags for an ingredient id at catalog load time
///
/// Known ingredients are matched on these precomputed tags instead of
/// re-scanning keywords per validation; ids outside the catalogs fall back to
/// the same keyword scan at evaluation time, so both paths agree.
#[must_use]
pub fn derive_protein_tags(id: &str) -> ProteinTags {
    let is_heavy_protein = matches_any_keyword(id, HEAVY_PROTEIN_KEYWORDS);
    let is_poultry = matches_any_keyword(id, POULTRY_KEYWORDS);
    let is_protein_source =
        is_heavy_protein || is_poultry || matches_any_keyword(id, PROTEIN_KEYWORDS);
    ProteinTags {
        is_heavy_protein,
        is_poultry,
        is_protein_source,
    }
}
