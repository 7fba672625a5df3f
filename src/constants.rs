// ABOUTME: Application constants organized by domain in nested modules
// ABOUTME: Locale defaults, cache freshness windows, validation tolerances, external timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! Constants module
//!
//! Constants are grouped into logical domains rather than a single flat list.
//! Environment overrides live in [`env_config`]; everything else is fixed
//! reference data baked in at compile time.

/// Locale and country defaults
pub mod locale {
    /// Fallback locale used when every resolution tier misses
    pub const DEFAULT_LOCALE: &str = "en-US";

    /// Fallback country paired with [`DEFAULT_LOCALE`]
    pub const DEFAULT_COUNTRY: &str = "US";
}

/// Allergen cache tuning
pub mod cache {
    /// Freshness window for the process-wide allergen tag cache
    pub const ALLERGEN_TTL_SECS: u64 = 120;
}

/// Validation thresholds
pub mod validation {
    /// Default relative tolerance for post-substitution macro comparison
    pub const MACRO_TOLERANCE: f64 = 0.15;
}

/// External service timeouts
pub mod timeouts {
    /// Bound on the external safety-source call before failing open
    pub const SAFETY_SOURCE_SECS: u64 = 5;

    /// Bound on the geolocation lookup before falling through to the
    /// next detection tier
    pub const GEOLOCATION_SECS: u64 = 2;
}

/// Environment-based configuration overrides
pub mod env_config {
    use std::env;

    /// Allergen cache TTL from environment or default
    #[must_use]
    pub fn allergen_ttl_secs() -> u64 {
        env::var("TAVOLA_ALLERGEN_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(super::cache::ALLERGEN_TTL_SECS)
    }

    /// Macro tolerance from environment or default
    #[must_use]
    pub fn macro_tolerance() -> f64 {
        env::var("TAVOLA_MACRO_TOLERANCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(super::validation::MACRO_TOLERANCE)
    }

    /// Default locale from environment or the built-in fallback
    #[must_use]
    pub fn default_locale() -> String {
        env::var("TAVOLA_DEFAULT_LOCALE").unwrap_or_else(|_| super::locale::DEFAULT_LOCALE.into())
    }
}
