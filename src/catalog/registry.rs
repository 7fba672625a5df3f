// ABOUTME: Per-country ingredient registry with explicit cross-country substitution maps
// ABOUTME: Pure map lookups over load-once data; dangling substitute ids are tolerated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Country Ingredient Registry
//!
//! Country-scoped ingredient records layered on top of the universal catalog.
//! Each record may carry an explicit substitution map (target country →
//! substitute id) authored in the rule administration layer. Substitute ids
//! that resolve nowhere are a tolerated data defect; the substitution engine
//! degrades those to pass-through.

use super::registry_data;
use crate::models::CountrySpecificIngredient;
use std::collections::HashMap;

/// Load-once registry of country-specific ingredients
#[derive(Debug, Clone)]
pub struct CountryIngredientRegistry {
    by_country: HashMap<String, HashMap<String, CountrySpecificIngredient>>,
}

impl CountryIngredientRegistry {
    /// Build the registry from the compiled-in seed data
    #[must_use]
    pub fn seed() -> Self {
        Self::from_records(registry_data::country_ingredients())
    }

    /// Build a registry from an explicit record list (tests, future loaders)
    #[must_use]
    pub fn from_records(records: Vec<CountrySpecificIngredient>) -> Self {
        let mut by_country: HashMap<String, HashMap<String, CountrySpecificIngredient>> =
            HashMap::new();
        for record in records {
            by_country
                .entry(record.country.clone())
                .or_default()
                .insert(record.ingredient.id.clone(), record);
        }
        Self { by_country }
    }

    /// Look up a record scoped to one country
    #[must_use]
    pub fn get(&self, country: &str, id: &str) -> Option<&CountrySpecificIngredient> {
        self.by_country.get(country).and_then(|m| m.get(id))
    }

    /// Whether the id is registered for the country
    #[must_use]
    pub fn is_registered(&self, country: &str, id: &str) -> bool {
        self.get(country, id).is_some()
    }

    /// All records for a country, sorted by id
    #[must_use]
    pub fn ingredients_for(&self, country: &str) -> Vec<&CountrySpecificIngredient> {
        let mut list: Vec<_> = self
            .by_country
            .get(country)
            .map(|m| m.values().collect())
            .unwrap_or_default();
        list.sort_by(|a: &&CountrySpecificIngredient, b| a.ingredient.id.cmp(&b.ingredient.id));
        list
    }

    /// Explicit substitute id for crossing from `country` to `target_country`
    #[must_use]
    pub fn substitute_for(&self, country: &str, id: &str, target_country: &str) -> Option<&str> {
        self.get(country, id)
            .and_then(|r| r.substitute_for(target_country))
    }

    /// Find a record in any country; countries are scanned in sorted order so
    /// the result is deterministic when an id is registered more than once
    #[must_use]
    pub fn find_anywhere(&self, id: &str) -> Option<&CountrySpecificIngredient> {
        let mut countries: Vec<&String> = self.by_country.keys().collect();
        countries.sort();
        countries
            .into_iter()
            .find_map(|country| self.by_country.get(country).and_then(|m| m.get(id)))
    }

    /// Countries with at least one registered ingredient, sorted
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = self.by_country.keys().map(String::as_str).collect();
        countries.sort_unstable();
        countries
    }
}
