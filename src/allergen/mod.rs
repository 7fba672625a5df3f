// ABOUTME: Allergen enrichment service bridging ingredient records to the external safety source
// ABOUTME: Static allergens pass through; dynamic ones resolve via the cached tag table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Allergen Enrichment Service
//!
//! Resolves an ingredient's allergen set and checks it against a user's
//! declared intolerances. Statically declared allergens are returned
//! directly; dynamically declared ones are looked up by localized display
//! name in the process-wide tag cache ([`cache::AllergenCache`]), which
//! reloads in full from the external safety source when stale.
//!
//! The external source can be unreachable; that path fails open (empty tag
//! set). Each ingredient's static floor is merged in regardless, and callers
//! with hard safety requirements must enforce that floor independently.

/// TTL cache over the safety source's tag table
pub mod cache;

pub use cache::{AllergenCache, Clock, ManualClock, SystemClock};

use crate::catalog::{CountryIngredientRegistry, IngredientCatalog};
use crate::errors::AppResult;
use crate::models::Ingredient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// External allergen/safety knowledge source
///
/// The full tag table (lowercased display string → intolerance-category keys)
/// is fetched in one call; per-name lookups happen against the cache.
#[async_trait::async_trait]
pub trait AllergenSource: Send + Sync {
    /// Fetch the complete display-string → intolerance-keys table
    async fn fetch_tag_table(&self) -> AppResult<HashMap<String, Vec<String>>>;
}

/// Fixed in-memory source, for tests and offline deployments
#[derive(Debug, Clone, Default)]
pub struct StaticAllergenSource {
    table: HashMap<String, Vec<String>>,
}

impl StaticAllergenSource {
    /// Source serving a fixed table
    #[must_use]
    pub fn new(table: HashMap<String, Vec<String>>) -> Self {
        Self { table }
    }
}

#[async_trait::async_trait]
impl AllergenSource for StaticAllergenSource {
    async fn fetch_tag_table(&self) -> AppResult<HashMap<String, Vec<String>>> {
        Ok(self.table.clone())
    }
}

/// Outcome of checking an ingredient against a user's intolerances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntoleranceValidation {
    /// False iff at least one declared intolerance matched
    pub is_valid: bool,
    /// The resolved allergen set the check ran against
    pub allergens: Vec<String>,
    /// Exactly the declared intolerances that triggered the block
    pub blocked_by: Vec<String>,
}

/// Service resolving allergen tags for catalog and registry ingredients
pub struct AllergenEnrichmentService<'a> {
    catalog: &'a IngredientCatalog,
    registry: &'a CountryIngredientRegistry,
    source: Arc<dyn AllergenSource>,
    cache: Arc<AllergenCache>,
}

impl<'a> AllergenEnrichmentService<'a> {
    /// Service over the shared reference data, source, and cache
    #[must_use]
    pub fn new(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
        source: Arc<dyn AllergenSource>,
        cache: Arc<AllergenCache>,
    ) -> Self {
        Self {
            catalog,
            registry,
            source,
            cache,
        }
    }

    /// Resolve the current allergen set for an ingredient id
    ///
    /// Static mode returns the declared list as-is. Dynamic mode resolves
    /// tags for each localized display name through the cache and merges the
    /// static floor. Unknown ids resolve to an empty set.
    pub async fn resolve_allergens(&self, id: &str) -> Vec<String> {
        let Some(ingredient) = self.find_ingredient(id) else {
            return Vec::new();
        };

        let mut allergens: Vec<String> = ingredient
            .allergens
            .static_allergens()
            .iter()
            .map(|a| a.to_lowercase())
            .collect();

        if ingredient.allergens.is_dynamic() {
            for translation in ingredient.translations.values() {
                let tags = self
                    .cache
                    .tags_for(&translation.name, self.source.as_ref())
                    .await;
                allergens.extend(tags.into_iter().map(|t| t.to_lowercase()));
            }
        }

        allergens.sort();
        allergens.dedup();
        allergens
    }

    /// Check an ingredient against a user's declared intolerances
    ///
    /// Invalid iff the resolved allergen set intersects the declared set;
    /// `blocked_by` names exactly the intolerances that matched.
    pub async fn validate_ingredient_for_intolerances(
        &self,
        id: &str,
        user_intolerances: &[impl AsRef<str>],
    ) -> IntoleranceValidation {
        let allergens = self.resolve_allergens(id).await;
        let blocked_by: Vec<String> = user_intolerances
            .iter()
            .map(|i| i.as_ref().to_lowercase())
            .filter(|i| allergens.contains(i))
            .collect();

        IntoleranceValidation {
            is_valid: blocked_by.is_empty(),
            allergens,
            blocked_by,
        }
    }

    fn find_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.catalog
            .get(id)
            .or_else(|| self.registry.find_anywhere(id).map(|r| &r.ingredient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::cache::ALLERGEN_TTL_SECS;
    use std::time::Duration;

    fn service_with<'a>(
        catalog: &'a IngredientCatalog,
        registry: &'a CountryIngredientRegistry,
        table: HashMap<String, Vec<String>>,
    ) -> AllergenEnrichmentService<'a> {
        let source = Arc::new(StaticAllergenSource::new(table));
        let cache = Arc::new(AllergenCache::new(
            Duration::from_secs(ALLERGEN_TTL_SECS),
            Arc::new(SystemClock),
        ));
        AllergenEnrichmentService::new(catalog, registry, source, cache)
    }

    #[tokio::test]
    async fn test_static_mode_skips_the_source() {
        let catalog = IngredientCatalog::seed();
        let registry = CountryIngredientRegistry::seed();
        let service = service_with(&catalog, &registry, HashMap::new());

        let allergens = service.resolve_allergens("milk").await;
        assert_eq!(allergens, ["dairy".to_owned(), "lactose".to_owned()]);
    }

    #[tokio::test]
    async fn test_unknown_id_resolves_empty() {
        let catalog = IngredientCatalog::seed();
        let registry = CountryIngredientRegistry::seed();
        let service = service_with(&catalog, &registry, HashMap::new());

        assert!(service.resolve_allergens("mystery_item").await.is_empty());
        let validation = service
            .validate_ingredient_for_intolerances("mystery_item", &["peanuts"])
            .await;
        assert!(validation.is_valid);
    }
}
