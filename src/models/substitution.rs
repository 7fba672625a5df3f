// ABOUTME: Transient result types produced by the substitution engine
// ABOUTME: Per-ingredient outcomes, meal-level aggregates, and macro comparison reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

use serde::{Deserialize, Serialize};

/// Why a substitution call produced its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionReason {
    /// Universal ingredient; available everywhere, nothing to do
    Universal,
    /// Id is not registered for the source country; passed through unchanged
    UnknownPassthrough,
    /// Already registered in the target country; no substitution needed
    AlreadyAvailable,
    /// An explicit substitution-map entry was applied
    MappedSubstitute,
    /// No mapping exists for the target country; original retained
    NoSubstituteFound,
}

impl SubstitutionReason {
    /// Human-readable reason text
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Universal => "universal ingredient, no substitution needed",
            Self::UnknownPassthrough => "unknown ingredient, passed through",
            Self::AlreadyAvailable => "already available in target country",
            Self::MappedSubstitute => "mapped substitute applied",
            Self::NoSubstituteFound => "no substitute found, original retained",
        }
    }
}

/// Outcome of resolving a single ingredient across a country border
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionResult {
    /// Ingredient id as submitted
    pub original_id: String,
    /// Id to use in the target country (equal to `original_id` unless substituted)
    pub resolved_id: String,
    /// Whether an actual substitution took place
    pub was_substituted: bool,
    /// Why this outcome was chosen
    pub reason: SubstitutionReason,
}

impl SubstitutionResult {
    /// Unchanged outcome with the given reason
    pub fn unchanged(id: impl Into<String>, reason: SubstitutionReason) -> Self {
        let id = id.into();
        Self {
            resolved_id: id.clone(),
            original_id: id,
            was_substituted: false,
            reason,
        }
    }

    /// Substituted outcome
    pub fn substituted(original: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            original_id: original.into(),
            resolved_id: resolved.into(),
            was_substituted: true,
            reason: SubstitutionReason::MappedSubstitute,
        }
    }
}

/// Result of localizing a whole ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSubstitution {
    /// Transformed id list, order-preserving
    pub substituted_ids: Vec<String>,
    /// Per-item outcomes, parallel to the input list
    pub results: Vec<SubstitutionResult>,
    /// Count of items that were actually substituted
    pub substitution_count: usize,
}

/// Before/after totals for one macro
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroDelta {
    /// Sum over the original ingredient list
    pub original: f64,
    /// Sum over the substituted ingredient list
    pub substituted: f64,
    /// Relative delta (`|sub - orig| / orig`); 1.0 when the baseline is zero
    /// but the substituted total is not
    pub relative_delta: f64,
}

impl MacroDelta {
    /// Compare two macro totals
    #[must_use]
    pub fn new(original: f64, substituted: f64) -> Self {
        let relative_delta = if original.abs() < f64::EPSILON {
            if substituted.abs() < f64::EPSILON {
                0.0
            } else {
                1.0
            }
        } else {
            (substituted - original).abs() / original
        };
        Self {
            original,
            substituted,
            relative_delta,
        }
    }
}

/// Advisory macro comparison after substitution
///
/// Never blocks a substitution; callers decide what to do with an
/// out-of-tolerance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroComparison {
    /// Whether every macro's relative delta is within tolerance
    pub is_valid: bool,
    /// Tolerance the comparison was run with
    pub tolerance: f64,
    /// Energy delta
    pub kcal: MacroDelta,
    /// Protein delta
    pub protein_g: MacroDelta,
    /// Carbohydrate delta
    pub carbs_g: MacroDelta,
    /// Fat delta
    pub fat_g: MacroDelta,
}
