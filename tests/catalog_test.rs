// ABOUTME: Integration tests for the ingredient catalog and country registry
// ABOUTME: Lookup semantics, availability filtering, and substitution-map access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning
#![allow(clippy::unwrap_used)]

mod common;

use common::seed_data;
use tavola_localization::models::IngredientCategory;

#[test]
fn catalog_lookup_is_total() {
    let (catalog, _registry) = seed_data();

    let coffee = catalog.get("black_coffee").unwrap();
    assert_eq!(coffee.category, IngredientCategory::Beverage);
    assert!(catalog.get("unobtainium").is_none());
    assert!(!catalog.is_empty());
}

#[test]
fn availability_filtering_respects_country_sets() {
    let (catalog, _registry) = seed_data();

    // plantain is restricted; black_coffee is everywhere
    let in_japan = catalog.available_in("JP");
    assert!(in_japan.iter().any(|i| i.id == "black_coffee"));
    assert!(!in_japan.iter().any(|i| i.id == "plantain"));

    let in_brazil = catalog.available_in("BR");
    assert!(in_brazil.iter().any(|i| i.id == "plantain"));
}

#[test]
fn registry_scopes_records_per_country() {
    let (_catalog, registry) = seed_data();

    assert!(registry.is_registered("BR", "requeijao"));
    assert!(!registry.is_registered("JP", "requeijao"));

    let brazilian = registry.ingredients_for("BR");
    assert!(brazilian.iter().all(|r| r.country == "BR"));
    assert!(registry.ingredients_for("ZZ").is_empty());
}

#[test]
fn registry_exposes_substitution_maps() {
    let (_catalog, registry) = seed_data();

    assert_eq!(
        registry.substitute_for("BR", "feijao", "US"),
        Some("black_beans")
    );
    assert_eq!(registry.substitute_for("BR", "pao_de_queijo", "US"), None);

    let record = registry.get("JP", "miso_paste").unwrap();
    assert_eq!(record.substitute_for("US"), Some("soy_sauce"));
}

#[test]
fn protein_tags_are_precomputed_for_registry_records() {
    let (_catalog, registry) = seed_data();

    // "pasta_de_amendoim" is no protein source; the tags say so up front
    let record = registry.get("BR", "pasta_de_amendoim").unwrap();
    assert!(!record.ingredient.protein_tags.is_heavy_protein);
    assert!(!record.ingredient.protein_tags.is_poultry);
}
