// ABOUTME: Library entry point for the Tavola ingredient localization engine
// ABOUTME: Cross-country substitution, cultural validation, i18n resolution, allergen enrichment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

#![deny(unsafe_code)]

//! # Tavola Localization
//!
//! The localization core of the Tavola meal-planning platform. A recipe
//! authored in one country must render and make sense in another: ingredient
//! names are resolved per locale, region-unavailable ingredients are swapped
//! for nutritionally comparable local alternatives, and finished ingredient
//! sets are checked for cultural and nutritional fit.
//!
//! ## Components
//!
//! - **catalog**: load-once universal ingredient catalog and the per-country
//!   registry with explicit substitution maps
//! - **substitution**: cross-border ingredient resolution with reasoned,
//!   never-failing outcomes, plus an advisory macro comparison
//! - **cultural**: forbidden-combination, density, and protein-policy checks
//! - **i18n**: locale/country mapping, name and UI-string resolution, and
//!   the locale auto-detection chain
//! - **allergen**: dynamic allergen enrichment through a TTL cache over the
//!   external safety source
//! - **external**: HTTP clients implementing the provider traits
//!
//! ## Design posture
//!
//! Best-effort localization over hard failure: this core sits on a
//! presentation/quality path. Unknown ids pass through, missing substitutes
//! are reported rather than raised, and external-source faults fail open.
//!
//! ## Quick start
//!
//! ```rust
//! use tavola_localization::catalog::{CountryIngredientRegistry, IngredientCatalog};
//! use tavola_localization::substitution::SubstitutionEngine;
//!
//! let catalog = IngredientCatalog::seed();
//! let registry = CountryIngredientRegistry::seed();
//! let engine = SubstitutionEngine::new(&catalog, &registry);
//!
//! let result = engine.substitute("requeijao", "BR", "US");
//! assert_eq!(result.resolved_id, "cream_cheese");
//! assert!(result.was_substituted);
//! ```

/// Dynamic allergen enrichment with a TTL-cached safety source
pub mod allergen;
/// Universal ingredient catalog and per-country registry
pub mod catalog;
/// Engine configuration with environment overrides
pub mod config;
/// Application constants organized by domain
pub mod constants;
/// Cultural validation engine and its rule tables
pub mod cultural;
/// Unified error handling
pub mod errors;
/// Concrete HTTP clients for external collaborators
pub mod external;
/// Locale resolution, UI strings, and detection
pub mod i18n;
/// Core data models
pub mod models;
/// Cross-country substitution engine
pub mod substitution;
