// ABOUTME: Substitution engine resolving ingredients across country borders
// ABOUTME: First-match rule chain, meal-level application, and advisory macro comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Substitution Engine
//!
//! Resolves one ingredient, or a whole ingredient list, from one country's
//! context to another's. Substitution never fails: every outcome is a
//! [`SubstitutionResult`] carrying the reason, and an ingredient with no
//! viable substitute simply passes through unchanged.

use crate::catalog::{CountryIngredientRegistry, IngredientCatalog};
use crate::constants::validation::MACRO_TOLERANCE;
use crate::models::{
    MacroComparison, MacroDelta, MacroNutrients, MealSubstitution, SubstitutionReason,
    SubstitutionResult,
};
use tracing::{debug, warn};

/// Stateless engine over the load-once catalog and registry
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionEngine<'a> {
    catalog: &'a IngredientCatalog,
    registry: &'a CountryIngredientRegistry,
}

impl<'a> SubstitutionEngine<'a> {
    /// Create an engine borrowing the shared reference data
    #[must_use]
    pub const fn new(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
    ) -> Self {
        Self { catalog, registry }
    }

    /// Resolve a single ingredient from `from_country` to `to_country`
    ///
    /// Rules are evaluated in order, stopping at the first match:
    /// universal → unknown passthrough → already available → mapped
    /// substitute → no substitute found. A mapped substitute whose id
    /// resolves nowhere (dangling reference in the authored tables) degrades
    /// to pass-through.
    #[must_use]
    pub fn substitute(&self, id: &str, from_country: &str, to_country: &str) -> SubstitutionResult {
        if self.catalog.contains(id) {
            return SubstitutionResult::unchanged(id, SubstitutionReason::Universal);
        }

        if !self.registry.is_registered(from_country, id) {
            debug!(
                ingredient = id,
                country = from_country,
                "ingredient not registered for source country, passing through"
            );
            return SubstitutionResult::unchanged(id, SubstitutionReason::UnknownPassthrough);
        }

        if self.registry.is_registered(to_country, id) {
            return SubstitutionResult::unchanged(id, SubstitutionReason::AlreadyAvailable);
        }

        if let Some(substitute) = self.registry.substitute_for(from_country, id, to_country) {
            if self.resolves_anywhere(substitute) {
                debug!(
                    original = id,
                    substitute,
                    from = from_country,
                    to = to_country,
                    "applied mapped substitute"
                );
                return SubstitutionResult::substituted(id, substitute);
            }
            warn!(
                original = id,
                substitute,
                to = to_country,
                "substitution map references unknown ingredient, passing through"
            );
        }

        SubstitutionResult::unchanged(id, SubstitutionReason::NoSubstituteFound)
    }

    /// Convenience lookup that returns only the id to use in the target country
    #[must_use]
    pub fn substitute_id(&self, id: &str, from_country: &str, to_country: &str) -> String {
        self.substitute(id, from_country, to_country).resolved_id
    }

    /// Resolve a whole meal's ingredient list, item by item
    ///
    /// Items are independent and order-preserving; the aggregate counts the
    /// substitutions that actually happened.
    #[must_use]
    pub fn substitute_meal_ingredients(
        &self,
        ids: &[impl AsRef<str>],
        from_country: &str,
        to_country: &str,
    ) -> MealSubstitution {
        let results: Vec<SubstitutionResult> = ids
            .iter()
            .map(|id| self.substitute(id.as_ref(), from_country, to_country))
            .collect();
        let substituted_ids = results.iter().map(|r| r.resolved_id.clone()).collect();
        let substitution_count = results.iter().filter(|r| r.was_substituted).count();
        MealSubstitution {
            substituted_ids,
            results,
            substitution_count,
        }
    }

    /// Advisory macro comparison with the default tolerance (±15%)
    #[must_use]
    pub fn validate_macros_after_substitution(
        &self,
        original_ids: &[impl AsRef<str>],
        substituted_ids: &[impl AsRef<str>],
    ) -> MacroComparison {
        self.validate_macros_with_tolerance(original_ids, substituted_ids, MACRO_TOLERANCE)
    }

    /// Advisory macro comparison with an explicit tolerance
    ///
    /// Each of the four macros is summed independently across both lists; ids
    /// unresolvable in any catalog contribute zero (a known soft edge). Valid
    /// iff every macro's relative delta is within tolerance. Never blocks a
    /// substitution.
    #[must_use]
    pub fn validate_macros_with_tolerance(
        &self,
        original_ids: &[impl AsRef<str>],
        substituted_ids: &[impl AsRef<str>],
        tolerance: f64,
    ) -> MacroComparison {
        let original = self.sum_macros(original_ids);
        let substituted = self.sum_macros(substituted_ids);

        let kcal = MacroDelta::new(original.kcal, substituted.kcal);
        let protein_g = MacroDelta::new(original.protein_g, substituted.protein_g);
        let carbs_g = MacroDelta::new(original.carbs_g, substituted.carbs_g);
        let fat_g = MacroDelta::new(original.fat_g, substituted.fat_g);

        let is_valid = [kcal, protein_g, carbs_g, fat_g]
            .iter()
            .all(|d| d.relative_delta <= tolerance);

        MacroComparison {
            is_valid,
            tolerance,
            kcal,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Macros for an id, searching catalog then registry; zero when unresolvable
    fn resolve_macros(&self, id: &str) -> MacroNutrients {
        if let Some(ingredient) = self.catalog.get(id) {
            return ingredient.macros;
        }
        if let Some(record) = self.registry.find_anywhere(id) {
            return record.ingredient.macros;
        }
        MacroNutrients::zero()
    }

    fn sum_macros(&self, ids: &[impl AsRef<str>]) -> MacroNutrients {
        ids.iter().fold(MacroNutrients::zero(), |acc, id| {
            let m = self.resolve_macros(id.as_ref());
            MacroNutrients {
                kcal: acc.kcal + m.kcal,
                protein_g: acc.protein_g + m.protein_g,
                carbs_g: acc.carbs_g + m.carbs_g,
                fat_g: acc.fat_g + m.fat_g,
                fiber_g: acc.fiber_g + m.fiber_g,
            }
        })
    }

    fn resolves_anywhere(&self, id: &str) -> bool {
        self.catalog.contains(id) || self.registry.find_anywhere(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubstitutionReason;

    fn engines() -> (IngredientCatalog, CountryIngredientRegistry) {
        (IngredientCatalog::seed(), CountryIngredientRegistry::seed())
    }

    #[test]
    fn test_dangling_substitute_passes_through() {
        let (catalog, registry) = engines();
        let engine = SubstitutionEngine::new(&catalog, &registry);

        // requeijao's ES mapping points at an id that resolves nowhere
        let result = engine.substitute("requeijao", "BR", "ES");
        assert!(!result.was_substituted);
        assert_eq!(result.reason, SubstitutionReason::NoSubstituteFound);
        assert_eq!(result.resolved_id, "requeijao");
    }

    #[test]
    fn test_same_country_is_identity() {
        let (catalog, registry) = engines();
        let engine = SubstitutionEngine::new(&catalog, &registry);

        let result = engine.substitute("requeijao", "BR", "BR");
        assert!(!result.was_substituted);
        assert_eq!(result.reason, SubstitutionReason::AlreadyAvailable);
    }
}
