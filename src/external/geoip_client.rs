// ABOUTME: IP geolocation client resolving a caller address to a country code
// ABOUTME: ip-api style JSON endpoint plus a static in-memory provider for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

use crate::constants::timeouts::GEOLOCATION_SECS;
use crate::errors::{AppError, AppResult};
use crate::i18n::detection::GeoipProvider;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::Duration;
use url::Url;

/// Geolocation client configuration
#[derive(Debug, Clone)]
pub struct GeoipClientConfig {
    /// Base URL of the geolocation service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeoipClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://ip-api.com".to_owned(),
            timeout_secs: GEOLOCATION_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    status: String,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

/// HTTP geolocation client against an ip-api style endpoint
pub struct IpApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl IpApiClient {
    /// Create a client; fails only on an unparseable base URL
    pub fn new(config: GeoipClientConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::config(format!("invalid geolocation URL '{}'", config.base_url))
                .with_source(e)
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal("failed to build HTTP client").with_source(e))?;
        Ok(Self { base_url, http })
    }
}

#[async_trait::async_trait]
impl GeoipProvider for IpApiClient {
    async fn country_for_ip(&self, ip: IpAddr) -> AppResult<Option<String>> {
        let url = self
            .base_url
            .join(&format!("json/{ip}?fields=status,countryCode"))
            .map_err(|e| AppError::internal("failed to build geolocation URL").with_source(e))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::external_service("geolocation", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "geolocation",
                format!("HTTP {}", response.status()),
            ));
        }

        let body: GeoResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service("geolocation", e.to_string()))?;

        if body.status != "success" {
            // Private ranges and unroutable addresses come back as "fail";
            // that is a miss, not a fault
            return Ok(None);
        }
        Ok(body.country_code)
    }
}

/// Fixed in-memory provider, for tests and offline deployments
#[derive(Debug, Clone, Default)]
pub struct StaticGeoipProvider {
    countries: HashMap<IpAddr, String>,
}

impl StaticGeoipProvider {
    /// Provider serving a fixed address → country table
    #[must_use]
    pub fn new(countries: HashMap<IpAddr, String>) -> Self {
        Self { countries }
    }
}

#[async_trait::async_trait]
impl GeoipProvider for StaticGeoipProvider {
    async fn country_for_ip(&self, ip: IpAddr) -> AppResult<Option<String>> {
        Ok(self.countries.get(&ip).cloned())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_geo_response_parses_failure_shape() {
        let json = r#"{"status":"fail"}"#;
        let parsed: GeoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "fail");
        assert!(parsed.country_code.is_none());
    }

    #[tokio::test]
    async fn test_static_provider_misses_cleanly() {
        let provider = StaticGeoipProvider::default();
        let ip: IpAddr = "203.0.113.10".parse().unwrap();
        assert_eq!(provider.country_for_ip(ip).await.unwrap(), None);
    }
}
