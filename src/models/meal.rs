// ABOUTME: Meal type and density classification used by the cultural validation engine
// ABOUTME: Lossy string parsing accepts both English names and catalog meal codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

use serde::{Deserialize, Serialize};

/// Type of meal
///
/// Parsing accepts the Portuguese meal codes the recipe catalog was authored
/// with (`cafe_manha`, `almoco`, `jantar`, `lanche`, `ceia`) alongside the
/// English names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// First meal of the day
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Late-evening snack ("ceia")
    Supper,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string, defaulting to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" | "cafe_manha" | "cafe_da_manha" => Self::Breakfast,
            "lunch" | "almoco" => Self::Lunch,
            "dinner" | "jantar" => Self::Dinner,
            "snack" | "lanche" => Self::Snack,
            "supper" | "ceia" => Self::Supper,
            _ => Self::Other,
        }
    }

    /// Whether this meal type carries a protein requirement (lunch and dinner)
    #[must_use]
    pub const fn requires_protein(&self) -> bool {
        matches!(self, Self::Lunch | Self::Dinner)
    }

    /// Whether heavy proteins are disallowed (breakfast and late-evening snack)
    #[must_use]
    pub const fn disallows_heavy_protein(&self) -> bool {
        matches!(self, Self::Breakfast | Self::Supper)
    }
}

/// Coarse meal-heaviness classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealDensity {
    /// Light meal
    Light,
    /// Moderate meal
    Moderate,
    /// Heavy meal
    Heavy,
}

impl MealDensity {
    /// Parse density from string, defaulting to `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" | "leve" => Self::Light,
            "heavy" | "pesada" => Self::Heavy,
            _ => Self::Moderate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_accepts_catalog_codes() {
        assert_eq!(MealType::from_str_lossy("cafe_manha"), MealType::Breakfast);
        assert_eq!(MealType::from_str_lossy("almoco"), MealType::Lunch);
        assert_eq!(MealType::from_str_lossy("CEIA"), MealType::Supper);
        assert_eq!(MealType::from_str_lossy("brunch"), MealType::Other);
    }

    #[test]
    fn test_protein_policies_per_meal_type() {
        assert!(MealType::Lunch.requires_protein());
        assert!(MealType::Dinner.requires_protein());
        assert!(!MealType::Breakfast.requires_protein());
        assert!(MealType::Breakfast.disallows_heavy_protein());
        assert!(MealType::Supper.disallows_heavy_protein());
        assert!(!MealType::Dinner.disallows_heavy_protein());
    }
}
