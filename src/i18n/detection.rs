// ABOUTME: Locale auto-detection - ordered strategy chain over geolocation and language preferences
// ABOUTME: Every tier fails through silently; detection always produces a locale, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! # Locale detection
//!
//! Priority order: geolocation of the caller's network address, then the
//! client's quality-weighted language-preference list, then the fixed
//! default. Each tier is a strategy tried in sequence; a missing input,
//! provider error, or timeout falls through to the next tier.

use super::{is_supported_locale, locale_for_country, COUNTRY_LOCALES};
use crate::catalog::base_language;
use crate::constants::locale::DEFAULT_LOCALE;
use crate::constants::timeouts::GEOLOCATION_SECS;
use crate::errors::AppResult;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// External IP-to-country lookup
#[async_trait::async_trait]
pub trait GeoipProvider: Send + Sync {
    /// Country code for an address, `None` when the provider cannot place it
    async fn country_for_ip(&self, ip: IpAddr) -> AppResult<Option<String>>;
}

/// Optional caller-supplied inputs for detection
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Caller network address, when known
    pub ip: Option<IpAddr>,
    /// `Accept-Language`-style preference header, when supplied
    pub accept_language: Option<String>,
}

/// Parse a quality-weighted language-preference header
///
/// Returns `(locale, q)` pairs sorted by descending quality; malformed
/// entries are skipped rather than reported.
#[must_use]
pub fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
    let mut prefs: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let q = pieces
                .find_map(|p| p.trim().strip_prefix("q=").map(str::trim))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            if q <= 0.0 {
                return None;
            }
            Some((tag.to_owned(), q))
        })
        .collect();
    prefs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    prefs
}

/// Match a preference list against the supported locales
///
/// Exact locale match first across the whole list, then a base-language
/// match, both in preference order.
#[must_use]
pub fn negotiate_locale(preferences: &[(String, f32)]) -> Option<&'static str> {
    for (tag, _) in preferences {
        if is_supported_locale(tag) {
            return COUNTRY_LOCALES
                .iter()
                .find(|(_, code)| *code == tag)
                .map(|(_, code)| *code);
        }
    }
    for (tag, _) in preferences {
        let base = base_language(tag);
        if let Some((_, code)) = COUNTRY_LOCALES
            .iter()
            .find(|(_, code)| base_language(code) == base)
        {
            return Some(*code);
        }
    }
    None
}

/// Ordered locale-detection chain
///
/// Strategies run in a fixed sequence; detection always yields a locale.
pub struct LocaleDetector {
    geoip: Option<Arc<dyn GeoipProvider>>,
    geoip_timeout: Duration,
}

impl LocaleDetector {
    /// Detector with a geolocation tier
    #[must_use]
    pub fn new(geoip: Arc<dyn GeoipProvider>) -> Self {
        Self {
            geoip: Some(geoip),
            geoip_timeout: Duration::from_secs(GEOLOCATION_SECS),
        }
    }

    /// Detector without geolocation (preference list and default tiers only)
    #[must_use]
    pub const fn without_geoip() -> Self {
        Self {
            geoip: None,
            geoip_timeout: Duration::from_secs(GEOLOCATION_SECS),
        }
    }

    /// Override the geolocation timeout
    #[must_use]
    pub const fn with_geoip_timeout(mut self, timeout: Duration) -> Self {
        self.geoip_timeout = timeout;
        self
    }

    /// Detect the caller's locale; never fails
    pub async fn detect(&self, ctx: &RequestContext) -> &'static str {
        if let Some(locale) = self.try_geolocation(ctx).await {
            return locale;
        }
        if let Some(locale) = Self::try_language_preferences(ctx) {
            return locale;
        }
        DEFAULT_LOCALE
    }

    async fn try_geolocation(&self, ctx: &RequestContext) -> Option<&'static str> {
        let provider = self.geoip.as_ref()?;
        let ip = ctx.ip?;

        match tokio::time::timeout(self.geoip_timeout, provider.country_for_ip(ip)).await {
            Ok(Ok(Some(country))) => Some(locale_for_country(&country)),
            Ok(Ok(None)) => None,
            Ok(Err(e)) => {
                debug!(error = %e, "geolocation lookup failed, falling through");
                None
            }
            Err(_) => {
                debug!("geolocation lookup timed out, falling through");
                None
            }
        }
    }

    fn try_language_preferences(ctx: &RequestContext) -> Option<&'static str> {
        let header = ctx.accept_language.as_deref()?;
        negotiate_locale(&parse_accept_language(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accept_language_sorts_by_quality() {
        let prefs = parse_accept_language("en;q=0.5, pt-BR, es;q=0.8");
        let tags: Vec<&str> = prefs.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, ["pt-BR", "es", "en"]);
    }

    #[test]
    fn test_parse_skips_wildcards_and_zero_quality() {
        let prefs = parse_accept_language("*, fr;q=0, de;q=0.3");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].0, "de");
    }

    #[test]
    fn test_negotiate_exact_beats_base() {
        let prefs = parse_accept_language("pt, en-US;q=0.5");
        // "pt" only base-matches; the exact "en-US" does not outrank it
        // because exact matching scans the full list first
        assert_eq!(negotiate_locale(&prefs), Some("en-US"));

        let exact = parse_accept_language("pt-BR, en-US;q=0.5");
        assert_eq!(negotiate_locale(&exact), Some("pt-BR"));
    }

    #[tokio::test]
    async fn test_detection_defaults_with_empty_context() {
        let detector = LocaleDetector::without_geoip();
        let locale = detector.detect(&RequestContext::default()).await;
        assert_eq!(locale, DEFAULT_LOCALE);
    }
}
