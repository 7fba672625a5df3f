// ABOUTME: Integration tests for the cross-country substitution engine
// ABOUTME: Rule order, meal-level application, and the advisory macro comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning
#![allow(clippy::unwrap_used)]

mod common;

use common::seed_data;
use tavola_localization::models::SubstitutionReason;
use tavola_localization::substitution::SubstitutionEngine;

#[test]
fn universal_ingredients_are_never_substituted() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    for (from, to) in [("BR", "US"), ("US", "JP"), ("JP", "BR"), ("ZZ", "XX")] {
        let result = engine.substitute("black_coffee", from, to);
        assert!(!result.was_substituted, "{from}->{to}");
        assert_eq!(result.reason, SubstitutionReason::Universal);
        assert_eq!(result.resolved_id, "black_coffee");
    }
}

#[test]
fn unregistered_ingredient_passes_through() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    let result = engine.substitute("mystery_stew", "BR", "US");
    assert!(!result.was_substituted);
    assert_eq!(result.reason, SubstitutionReason::UnknownPassthrough);
    assert_eq!(result.resolved_id, "mystery_stew");
}

#[test]
fn ingredient_already_available_in_target_is_kept() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    // cream_cheese maps to requeijao for BR, but a US->US move needs nothing
    let result = engine.substitute("cream_cheese", "US", "US");
    assert!(!result.was_substituted);
    assert_eq!(result.reason, SubstitutionReason::AlreadyAvailable);
}

#[test]
fn mapped_substitute_is_applied() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    let result = engine.substitute("requeijao", "BR", "US");
    assert!(result.was_substituted);
    assert_eq!(result.reason, SubstitutionReason::MappedSubstitute);
    assert_eq!(result.resolved_id, "cream_cheese");

    // And back the other way
    let result = engine.substitute("cream_cheese", "US", "BR");
    assert_eq!(result.resolved_id, "requeijao");

    assert_eq!(engine.substitute_id("requeijao", "BR", "US"), "cream_cheese");
}

#[test]
fn unmapped_target_country_reports_no_substitute() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    // farofa only maps to the US
    let result = engine.substitute("farofa", "BR", "JP");
    assert!(!result.was_substituted);
    assert_eq!(result.reason, SubstitutionReason::NoSubstituteFound);
    assert_eq!(result.resolved_id, "farofa");
}

#[test]
fn meal_substitution_counts_only_real_substitutions() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    let meal = engine.substitute_meal_ingredients(
        &["requeijao", "farofa", "black_coffee"],
        "BR",
        "US",
    );

    assert_eq!(meal.substitution_count, 2);
    assert_eq!(
        meal.substituted_ids,
        ["cream_cheese", "breadcrumbs", "black_coffee"]
    );
    assert_eq!(meal.results.len(), 3);
    assert!(!meal.results[2].was_substituted);
}

#[test]
fn meal_substitution_preserves_order_and_duplicates() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    let meal =
        engine.substitute_meal_ingredients(&["farofa", "farofa", "arroz"], "BR", "US");
    assert_eq!(
        meal.substituted_ids,
        ["breadcrumbs", "breadcrumbs", "white_rice"]
    );
    assert_eq!(meal.substitution_count, 3);
}

#[test]
fn macro_comparison_passes_for_close_substitutes() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    // pasta_de_amendoim and peanut_butter are seeded with identical macros
    let comparison = engine
        .validate_macros_after_substitution(&["pasta_de_amendoim"], &["peanut_butter"]);
    assert!(comparison.is_valid);
    assert_eq!(comparison.kcal.relative_delta, 0.0);
}

#[test]
fn macro_comparison_flags_divergent_substitutes() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    // Swapping rice for cream cheese shifts every macro well past 15%
    let comparison =
        engine.validate_macros_after_substitution(&["white_rice"], &["cream_cheese"]);
    assert!(!comparison.is_valid);
    assert!(comparison.fat_g.relative_delta > 0.15);
}

#[test]
fn unresolvable_ids_contribute_zero_to_macro_sums() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    let comparison =
        engine.validate_macros_after_substitution(&["no_such_id"], &["also_missing"]);
    // Both sides sum to zero, so the comparison is trivially in tolerance
    assert!(comparison.is_valid);
    assert_eq!(comparison.kcal.original, 0.0);
    assert_eq!(comparison.kcal.substituted, 0.0);
}

#[test]
fn macro_comparison_respects_custom_tolerance() {
    let (catalog, registry) = seed_data();
    let engine = SubstitutionEngine::new(&catalog, &registry);

    // requeijao (257 kcal) vs cream_cheese (342 kcal): ~33% kcal delta
    let strict =
        engine.validate_macros_with_tolerance(&["requeijao"], &["cream_cheese"], 0.15);
    assert!(!strict.is_valid);

    let lenient =
        engine.validate_macros_with_tolerance(&["requeijao"], &["cream_cheese"], 0.60);
    assert!(lenient.is_valid);
}
