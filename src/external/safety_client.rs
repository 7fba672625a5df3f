// ABOUTME: HTTP client for the external allergen/safety knowledge source
// ABOUTME: Fetches the full display-string to intolerance-keys tag table with a bounded timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

//! Safety source client
//!
//! Fetches the complete allergen tag table the [`crate::allergen`] cache is
//! loaded from. The cache owns retry/freshness policy; this client does one
//! bounded request and reports faults as [`AppError`] for the cache to fail
//! open on.

use crate::allergen::AllergenSource;
use crate::constants::timeouts::SAFETY_SOURCE_SECS;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Safety source client configuration
#[derive(Debug, Clone)]
pub struct SafetyClientConfig {
    /// Base URL of the safety service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SafetyClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://safety.tavola.app/api".to_owned(),
            timeout_secs: SAFETY_SOURCE_SECS,
        }
    }
}

/// One tag-table entry as served by the safety service
#[derive(Debug, Deserialize)]
struct TagEntry {
    term: String,
    intolerances: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TagTableResponse {
    entries: Vec<TagEntry>,
}

/// Faults specific to the safety source
#[derive(Debug, thiserror::Error)]
pub enum SafetyClientError {
    /// Request could not be sent or the connection failed
    #[error("safety source request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("safety source returned HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected shape
    #[error("safety source response malformed: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// HTTP client for the Tavola safety service
pub struct SafetyClient {
    config: SafetyClientConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl SafetyClient {
    /// Create a client; fails only on an unparseable base URL
    pub fn new(config: SafetyClientConfig) -> AppResult<Self> {
        let endpoint = Url::parse(&config.base_url)
            .and_then(|base| base.join("v1/allergen-tags"))
            .map_err(|e| {
                AppError::config(format!("invalid safety source URL '{}'", config.base_url))
                    .with_source(e)
            })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal("failed to build HTTP client").with_source(e))?;
        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    async fn fetch(&self) -> Result<HashMap<String, Vec<String>>, SafetyClientError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(SafetyClientError::Request)?;

        if !response.status().is_success() {
            return Err(SafetyClientError::Status(response.status().as_u16()));
        }

        let body: TagTableResponse = response
            .json()
            .await
            .map_err(SafetyClientError::Malformed)?;

        Ok(body
            .entries
            .into_iter()
            .map(|e| (e.term, e.intolerances))
            .collect())
    }
}

#[async_trait::async_trait]
impl AllergenSource for SafetyClient {
    async fn fetch_tag_table(&self) -> AppResult<HashMap<String, Vec<String>>> {
        self.fetch().await.map_err(|e| {
            AppError::external_service("safety source", self.config.base_url.clone())
                .with_source(e)
        })
    }
}
