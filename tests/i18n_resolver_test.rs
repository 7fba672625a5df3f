// ABOUTME: Integration tests for the locale resolver and detection chain
// ABOUTME: Fallback determinism, list translation identity, UI strings, and tiered detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning
#![allow(clippy::unwrap_used)]

mod common;

use common::seed_data;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tavola_localization::external::StaticGeoipProvider;
use tavola_localization::i18n::detection::{LocaleDetector, RequestContext};
use tavola_localization::i18n::LocaleResolver;

#[test]
fn translated_name_fallback_is_deterministic() {
    let (catalog, _registry) = seed_data();

    // exact locale
    assert_eq!(catalog.translated_name("white_rice", "pt-BR"), "Arroz branco");
    // base-language prefix: pt-PT has no entry, pt-BR does
    assert_eq!(catalog.translated_name("white_rice", "pt-PT"), "Arroz branco");
    // default locale: no fr entries at all
    assert_eq!(catalog.translated_name("white_rice", "fr-FR"), "White rice");
    // raw id: unknown ingredient
    assert_eq!(catalog.translated_name("dragonfruit_jam", "pt-BR"), "dragonfruit_jam");
}

#[test]
fn resolver_reads_country_specific_records() {
    let (catalog, registry) = seed_data();
    let resolver = LocaleResolver::for_country(&catalog, &registry, "BR");

    assert_eq!(resolver.ingredient_name("farofa"), "Farofa");
    assert_eq!(resolver.ingredient_name("white_rice"), "Arroz branco");

    let english = LocaleResolver::for_country(&catalog, &registry, "US");
    assert_eq!(english.ingredient_name("farofa"), "Toasted cassava flour");
}

#[test]
fn list_translation_to_current_country_is_identity() {
    let (catalog, registry) = seed_data();
    let resolver = LocaleResolver::for_country(&catalog, &registry, "BR");

    let ids = ["requeijao", "farofa", "black_coffee"];
    let translated = resolver.translate_ingredient_list(&ids, "BR");
    assert_eq!(translated, ids);
}

#[test]
fn list_translation_substitutes_across_borders() {
    let (catalog, registry) = seed_data();
    let resolver = LocaleResolver::for_country(&catalog, &registry, "BR");

    let translated =
        resolver.translate_ingredient_list(&["requeijao", "farofa", "black_coffee"], "US");
    assert_eq!(translated, ["cream_cheese", "breadcrumbs", "black_coffee"]);
}

#[test]
fn ui_strings_fall_back_to_key() {
    let (catalog, registry) = seed_data();
    let resolver = LocaleResolver::for_country(&catalog, &registry, "BR");

    assert_eq!(resolver.ui_text("meal.supper"), "Ceia");
    assert_eq!(resolver.ui_text("meal.elevenses"), "meal.elevenses");
}

#[tokio::test]
async fn detection_prefers_geolocation() {
    common::init_test_logging();
    let ip: IpAddr = "203.0.113.10".parse().unwrap();
    let provider = StaticGeoipProvider::new(HashMap::from([(ip, "BR".to_owned())]));
    let detector = LocaleDetector::new(Arc::new(provider));

    let ctx = RequestContext {
        ip: Some(ip),
        accept_language: Some("de-DE".to_owned()),
    };
    assert_eq!(detector.detect(&ctx).await, "pt-BR");
}

#[tokio::test]
async fn detection_falls_through_to_language_preferences() {
    common::init_test_logging();
    // Provider knows nothing about this address
    let provider = StaticGeoipProvider::default();
    let detector = LocaleDetector::new(Arc::new(provider));

    let ctx = RequestContext {
        ip: Some("198.51.100.7".parse().unwrap()),
        accept_language: Some("ja-JP,en;q=0.6".to_owned()),
    };
    assert_eq!(detector.detect(&ctx).await, "ja-JP");
}

#[tokio::test]
async fn detection_defaults_when_every_tier_misses() {
    common::init_test_logging();
    let detector = LocaleDetector::without_geoip();

    let ctx = RequestContext {
        ip: None,
        accept_language: Some("xx-YY;q=0.9".to_owned()),
    };
    assert_eq!(detector.detect(&ctx).await, "en-US");
}
