// ABOUTME: Process-wide allergen tag cache with injected clock and single-flight reload
// ABOUTME: Expiry triggers one full reload from the safety source; failures fail open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tavola Meal Planning

use crate::allergen::AllergenSource;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Time source for freshness checks, injected so tests control expiry
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic expiry in tests
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<Instant>,
}

impl ManualClock {
    /// Clock frozen at the current instant
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: std::sync::Mutex::new(Instant::now()),
        }
    }

    /// Advance the clock
    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.lock().map_or_else(|e| *e.into_inner(), |now| *now)
    }
}

/// Cached tag table plus the instant it was loaded
#[derive(Debug, Default)]
struct CacheState {
    tags: HashMap<String, Vec<String>>,
    loaded_at: Option<Instant>,
}

/// Allergen tag cache with a fixed freshness window
///
/// One instance is shared process-wide. A stale or never-loaded cache is
/// reloaded in full before a lookup proceeds; concurrent expiry-triggered
/// reloads collapse into one through the single-flight guard, and a failed
/// reload fails open (empty table) so lookups degrade to each ingredient's
/// static floor.
pub struct AllergenCache {
    state: RwLock<CacheState>,
    reload: Mutex<()>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl AllergenCache {
    /// Cache with the given freshness window and clock
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            reload: Mutex::new(()),
            ttl,
            clock,
        }
    }

    /// Current tags for a display name, reloading first when stale
    ///
    /// Lookup is case-insensitive on the display name. Unknown names and
    /// reload failures both yield an empty set.
    pub async fn tags_for(&self, name: &str, source: &dyn AllergenSource) -> Vec<String> {
        self.ensure_fresh(source).await;
        let state = self.state.read().await;
        state
            .tags
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Force a reload regardless of freshness
    pub async fn refresh(&self, source: &dyn AllergenSource) {
        let _flight = self.reload.lock().await;
        self.reload_locked(source).await;
    }

    /// Whether the cached table is within its freshness window
    pub async fn is_fresh(&self) -> bool {
        let state = self.state.read().await;
        state
            .loaded_at
            .is_some_and(|at| self.clock.now().duration_since(at) < self.ttl)
    }

    async fn ensure_fresh(&self, source: &dyn AllergenSource) {
        if self.is_fresh().await {
            return;
        }

        let _flight = self.reload.lock().await;
        // Another caller may have reloaded while we waited for the guard
        if self.is_fresh().await {
            return;
        }
        self.reload_locked(source).await;
    }

    /// Reload the full table; caller must hold the single-flight guard
    async fn reload_locked(&self, source: &dyn AllergenSource) {
        let table = match source.fetch_tag_table().await {
            Ok(table) => {
                debug!(entries = table.len(), "allergen tag table reloaded");
                table
            }
            Err(e) => {
                // Fail open: empty table, but stamp the load so the source
                // is not hammered on every lookup until the window passes
                warn!(error = %e, "allergen source unreachable, failing open");
                HashMap::new()
            }
        };

        let mut state = self.state.write().await;
        state.tags = table
            .into_iter()
            .map(|(name, tags)| (name.to_lowercase(), tags))
            .collect();
        state.loaded_at = Some(self.clock.now());
    }
}
