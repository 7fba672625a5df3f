// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Quiet tracing setup and catalog/registry fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning
#![allow(dead_code, clippy::unwrap_used)]

//! Shared test setup for `tavola_localization` integration tests

use std::sync::Once;
use tavola_localization::catalog::{CountryIngredientRegistry, IngredientCatalog};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Seeded reference data shared by most tests
pub fn seed_data() -> (IngredientCatalog, CountryIngredientRegistry) {
    init_test_logging();
    (IngredientCatalog::seed(), CountryIngredientRegistry::seed())
}
