// ABOUTME: Engine configuration assembled from defaults and environment overrides
// ABOUTME: Tunables for the allergen cache, macro tolerance, and locale defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! Engine configuration
//!
//! Everything here has a sensible default; deployments override through
//! `TAVOLA_*` environment variables. The external client configs live next
//! to their clients in [`crate::external`].

use crate::constants::{cache, env_config, locale, validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// Freshness window for the allergen tag cache, in seconds
    pub allergen_ttl_secs: u64,
    /// Relative tolerance for post-substitution macro comparison
    pub macro_tolerance: f64,
    /// Locale used when every resolution tier misses
    pub default_locale: String,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            allergen_ttl_secs: cache::ALLERGEN_TTL_SECS,
            macro_tolerance: validation::MACRO_TOLERANCE,
            default_locale: locale::DEFAULT_LOCALE.to_owned(),
        }
    }
}

impl LocalizationConfig {
    /// Configuration with environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            allergen_ttl_secs: env_config::allergen_ttl_secs(),
            macro_tolerance: env_config::macro_tolerance(),
            default_locale: env_config::default_locale(),
        }
    }

    /// Allergen TTL as a [`Duration`]
    #[must_use]
    pub const fn allergen_ttl(&self) -> Duration {
        Duration::from_secs(self.allergen_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = LocalizationConfig::default();
        assert_eq!(config.allergen_ttl(), Duration::from_secs(120));
        assert_eq!(config.macro_tolerance, 0.15);
        assert_eq!(config.default_locale, "en-US");
    }
}
