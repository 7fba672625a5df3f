// ABOUTME: Cultural validation engine - forbidden combinations, density, and protein policies
// ABOUTME: Stateless rule evaluation over ingredient id lists; reports results, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Cultural Validation Engine
//!
//! Rule checks over a finished ingredient set: forbidden combinations for the
//! target country, meal-density fit, and per-meal-type protein policy.
//! Combination and protein failures invalidate a meal; at the meal level a
//! density mismatch is only a warning. The caller decides whether to block,
//! regenerate, or warn.

/// Static rule tables (forbidden pairs, density subsets, protein keywords)
pub mod rules;

use crate::catalog::{CountryIngredientRegistry, IngredientCatalog};
use crate::models::{MealDensity, MealType, ProteinTags};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of a cultural rule evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CulturalValidation {
    /// False iff at least one violation was recorded
    pub is_valid: bool,
    /// Rule violations that invalidate the meal
    pub violations: Vec<String>,
    /// Advisory findings that do not invalidate the meal
    pub warnings: Vec<String>,
}

impl CulturalValidation {
    /// A passing result with no findings
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn violation(&mut self, message: String) {
        self.violations.push(message);
        self.is_valid = false;
    }

    /// Fold another result into this one; validity is the conjunction
    pub fn merge(&mut self, other: Self) {
        self.is_valid = self.is_valid && other.is_valid;
        self.violations.extend(other.violations);
        self.warnings.extend(other.warnings);
    }
}

/// Stateless engine over the load-once rule tables
#[derive(Debug, Clone, Copy)]
pub struct CulturalValidationEngine<'a> {
    catalog: &'a IngredientCatalog,
    registry: &'a CountryIngredientRegistry,
}

impl<'a> CulturalValidationEngine<'a> {
    /// Create an engine borrowing the shared reference data
    #[must_use]
    pub const fn new(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
    ) -> Self {
        Self { catalog, registry }
    }

    /// Flag forbidden ingredient combinations for a country
    ///
    /// A violation is recorded when both members of any configured pair
    /// (country-specific plus global) appear as case-insensitive substrings
    /// of ids in the set. Pairs are unordered and a single match suffices.
    #[must_use]
    pub fn validate_cultural_combinations(
        &self,
        ids: &[impl AsRef<str>],
        country: &str,
    ) -> CulturalValidation {
        let lowered: Vec<String> = ids.iter().map(|id| id.as_ref().to_lowercase()).collect();
        let contains = |member: &str| lowered.iter().any(|id| id.contains(member));

        let mut validation = CulturalValidation::valid();
        for (a, b) in rules::forbidden_pairs(country) {
            if contains(a) && contains(b) {
                debug!(country, pair_a = a, pair_b = b, "forbidden combination matched");
                validation.violation(format!(
                    "combination of '{a}' and '{b}' is not acceptable in {country}"
                ));
            }
        }
        validation
    }

    /// Check meal density against the meal type's allowed subset
    ///
    /// Standalone, a mismatch is a violation. The meal-level aggregate
    /// demotes density findings to warnings, since an unusual density does
    /// not make a meal culturally wrong.
    #[must_use]
    pub fn validate_meal_density(
        &self,
        meal_type: MealType,
        density: MealDensity,
    ) -> CulturalValidation {
        let mut validation = CulturalValidation::valid();
        if !rules::allowed_densities(meal_type).contains(&density) {
            validation.violation(format!(
                "{density:?} density is not allowed for {meal_type:?}"
            ));
        }
        validation
    }

    /// Enforce the per-meal-type protein policy
    ///
    /// Breakfast and the late-evening snack must contain no heavy protein;
    /// the late-evening snack additionally disallows poultry; lunch and
    /// dinner must contain at least one protein source.
    #[must_use]
    pub fn validate_protein_for_meal_type(
        &self,
        meal_type: MealType,
        ids: &[impl AsRef<str>],
    ) -> CulturalValidation {
        let mut validation = CulturalValidation::valid();
        let tags: Vec<(String, ProteinTags)> = ids
            .iter()
            .map(|id| (id.as_ref().to_owned(), self.protein_tags(id.as_ref())))
            .collect();

        if meal_type.disallows_heavy_protein() {
            for (id, tag) in &tags {
                if tag.is_heavy_protein {
                    validation.violation(format!(
                        "'{id}' is a heavy protein, not served at {meal_type:?}"
                    ));
                }
            }
        }

        if meal_type == MealType::Supper {
            for (id, tag) in &tags {
                if tag.is_poultry {
                    validation
                        .violation(format!("'{id}' is poultry, not served at the late-evening snack"));
                }
            }
        }

        if meal_type.requires_protein() && !tags.iter().any(|(_, tag)| tag.is_protein_source) {
            validation.violation(format!("{meal_type:?} requires at least one protein source"));
        }

        validation
    }

    /// Aggregate validation of a finished meal
    ///
    /// Combination and protein failures invalidate; the density check only
    /// contributes warnings.
    #[must_use]
    pub fn validate_meal_culturally(
        &self,
        meal_type: MealType,
        ids: &[impl AsRef<str>],
        density: MealDensity,
        country: &str,
    ) -> CulturalValidation {
        let mut validation = self.validate_cultural_combinations(ids, country);
        validation.merge(self.validate_protein_for_meal_type(meal_type, ids));

        // Density findings are demoted to warnings at the meal level
        let density_result = self.validate_meal_density(meal_type, density);
        validation.warnings.extend(density_result.violations);
        validation.warnings.extend(density_result.warnings);

        validation
    }

    /// Tags for an id: precomputed for catalog-known ingredients, keyword
    /// scan for ids outside the catalogs (both paths agree by construction)
    fn protein_tags(&self, id: &str) -> ProteinTags {
        if let Some(ingredient) = self.catalog.get(id) {
            return ingredient.protein_tags;
        }
        if let Some(record) = self.registry.find_anywhere(id) {
            return record.ingredient.protein_tags;
        }
        rules::derive_protein_tags(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (IngredientCatalog, CountryIngredientRegistry) {
        (IngredientCatalog::seed(), CountryIngredientRegistry::seed())
    }

    #[test]
    fn test_pair_members_match_as_substrings() {
        let (catalog, registry) = fixtures();
        let engine = CulturalValidationEngine::new(&catalog, &registry);

        // "macarrao_integral" still matches the pair member "macarrao"
        let result = engine
            .validate_cultural_combinations(&["macarrao_integral", "salada_verde"], "BR");
        assert!(!result.is_valid);
    }

    #[test]
    fn test_density_mismatch_demoted_in_aggregate() {
        let (catalog, registry) = fixtures();
        let engine = CulturalValidationEngine::new(&catalog, &registry);

        // Standalone check flags it
        let standalone = engine.validate_meal_density(MealType::Supper, MealDensity::Heavy);
        assert!(!standalone.is_valid);

        // At the meal level it is only a warning
        let meal = engine.validate_meal_culturally(
            MealType::Supper,
            &["tomato"],
            MealDensity::Heavy,
            "US",
        );
        assert!(meal.is_valid);
        assert_eq!(meal.warnings.len(), 1);
    }

    #[test]
    fn test_supper_disallows_poultry() {
        let (catalog, registry) = fixtures();
        let engine = CulturalValidationEngine::new(&catalog, &registry);

        let result =
            engine.validate_protein_for_meal_type(MealType::Supper, &["chicken_breast"]);
        assert!(!result.is_valid);

        // Poultry is fine at breakfast; only heavy proteins are out
        let breakfast =
            engine.validate_protein_for_meal_type(MealType::Breakfast, &["chicken_breast"]);
        assert!(breakfast.is_valid);
    }
}
