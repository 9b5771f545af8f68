//! Bounded memoizing wrapper around a lookup backend.
//!
//! Batch validation hits the same `(province, place)` pairs and place
//! codes over and over, so both query shapes keep a small memo map.
//! Misses are cached too: "not found" is a final answer. Errors are
//! never cached.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::{normalize_key, LookupError, PlaceCode, PlaceLookup};

/// Sizing for the two memo maps.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum entries per memo map. Once a map is full, new results are
    /// served but no longer memoized; existing entries keep serving hits.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_entries: 4096 }
    }
}

/// A [`PlaceLookup`] that memoizes results of an inner backend.
pub struct CachedLookup<L> {
    inner: L,
    config: CacheConfig,
    resolved: Mutex<HashMap<(String, String), Option<PlaceCode>>>,
    existence: Mutex<HashMap<String, bool>>,
}

impl<L: PlaceLookup> CachedLookup<L> {
    /// Wraps a backend with the default cache sizing.
    pub fn new(inner: L) -> Self {
        Self::with_config(inner, CacheConfig::default())
    }

    /// Wraps a backend with explicit cache sizing.
    pub fn with_config(inner: L, config: CacheConfig) -> Self {
        Self {
            inner,
            config,
            resolved: Mutex::new(HashMap::new()),
            existence: Mutex::new(HashMap::new()),
        }
    }

    /// Number of memoized `(province, place)` resolutions.
    pub fn resolved_entries(&self) -> usize {
        self.resolved.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Number of memoized existence checks.
    pub fn existence_entries(&self) -> usize {
        self.existence.lock().map(|m| m.len()).unwrap_or(0)
    }
}

#[async_trait]
impl<L: PlaceLookup> PlaceLookup for CachedLookup<L> {
    async fn resolve(
        &self,
        province: &str,
        place: &str,
    ) -> Result<Option<PlaceCode>, LookupError> {
        let key = (normalize_key(province), normalize_key(place));

        if let Ok(cache) = self.resolved.lock() {
            if let Some(hit) = cache.get(&key) {
                debug!(province = %key.0, place = %key.1, "Place resolution cache hit");
                return Ok(hit.clone());
            }
        }

        let result = self.inner.resolve(&key.0, &key.1).await?;

        if let Ok(mut cache) = self.resolved.lock() {
            if cache.len() < self.config.max_entries {
                cache.insert(key, result.clone());
            }
        }

        Ok(result)
    }

    async fn exists(&self, code: &PlaceCode) -> Result<bool, LookupError> {
        let key = code.as_str().to_string();

        if let Ok(cache) = self.existence.lock() {
            if let Some(hit) = cache.get(&key) {
                debug!(code = %key, "Place existence cache hit");
                return Ok(*hit);
            }
        }

        let result = self.inner.exists(code).await?;

        if let Ok(mut cache) = self.existence.lock() {
            if cache.len() < self.config.max_entries {
                cache.insert(key, result);
            }
        }

        Ok(result)
    }
}
