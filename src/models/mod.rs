// ABOUTME: Core data models for the localization engine
// ABOUTME: Ingredient records, meal classification, and substitution result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Data Models
//!
//! Immutable reference types shared by the catalog, registry, and engines.
//! Everything here is plain data: loaded once at process start, never mutated.

/// Ingredient records, macro-nutrients, translations, and allergen declarations
pub mod ingredient;
/// Meal type and density classification
pub mod meal;
/// Substitution outcome types
pub mod substitution;

pub use ingredient::{
    AllergenMode, CountrySpecificIngredient, Ingredient, IngredientCategory, MacroNutrients,
    ProteinTags, Translation,
};
pub use meal::{MealDensity, MealType};
pub use substitution::{
    MacroComparison, MacroDelta, MealSubstitution, SubstitutionReason, SubstitutionResult,
};
