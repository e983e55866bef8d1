//! Moka in-memory cache implementation
//!
//! High-performance, thread-safe in-memory cache with TTL support. Holds
//! synthesized audio keyed by language and text, so repeated requests for
//! the same sentence never hit the synthesis backend twice within the TTL.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use application::{
    error::ApplicationError,
    ports::{CachePort, CacheStats},
};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, instrument};

/// Default number of cached entries before eviction
const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default time-to-live for cached audio and reports
const DEFAULT_TTL_SECS: u64 = 300;

/// Configuration for the Moka cache
#[derive(Debug, Clone, Copy)]
pub struct MokaCacheConfig {
    /// Maximum number of entries held at once
    pub max_entries: u64,
    /// TTL applied to every entry
    pub ttl: Duration,
}

impl Default for MokaCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

/// Moka-based in-memory cache
///
/// Uses Moka's async cache for concurrent access. Entries expire after the
/// cache-level TTL; the least recently used entries are evicted once the
/// entry bound is reached.
pub struct MokaCache {
    cache: Cache<String, Vec<u8>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for MokaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl MokaCache {
    /// Create a new Moka cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MokaCacheConfig::default())
    }

    /// Create a new Moka cache with custom configuration
    #[must_use]
    pub fn with_config(config: MokaCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();

        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CachePort for MokaCache {
    #[instrument(skip(self), level = "debug")]
    #[allow(clippy::option_if_let_else)]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        if let Some(bytes) = self.cache.get(key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache hit");
            Ok(Some(bytes))
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache miss");
            Ok(None)
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        self.cache.insert(key.to_string(), value).await;
        debug!(key = %key, "Cache set");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
        self.cache.invalidate(key).await;
        debug!(key = %key, "Cache invalidated");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
        Ok(self.cache.contains_key(key))
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get_roundtrip() {
        let cache = MokaCache::new();

        cache
            .set_bytes("tts::bn::hello", b"audio-bytes".to_vec())
            .await
            .unwrap();

        let value = cache.get_bytes("tts::bn::hello").await.unwrap();
        assert_eq!(value, Some(b"audio-bytes".to_vec()));
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let cache = MokaCache::new();
        let value = cache.get_bytes("no-such-key").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let cache = MokaCache::new();

        cache.set_bytes("key", b"value".to_vec()).await.unwrap();
        cache.invalidate("key").await.unwrap();
        cache.cache.run_pending_tasks().await;

        let value = cache.get_bytes("key").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn exists_reflects_insertion() {
        let cache = MokaCache::new();

        assert!(!cache.exists("key").await.unwrap());
        cache.set_bytes("key", b"value".to_vec()).await.unwrap();
        cache.cache.run_pending_tasks().await;
        assert!(cache.exists("key").await.unwrap());
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = MokaCache::with_config(MokaCacheConfig {
            max_entries: 100,
            ttl: Duration::from_millis(50),
        });

        cache.set_bytes("short", b"lived".to_vec()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        cache.cache.run_pending_tasks().await;

        let value = cache.get_bytes("short").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn overwrite_replaces_value() {
        let cache = MokaCache::new();

        cache.set_bytes("key", b"first".to_vec()).await.unwrap();
        cache.set_bytes("key", b"second".to_vec()).await.unwrap();

        let value = cache.get_bytes("key").await.unwrap();
        assert_eq!(value, Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn stats_track_hits_and_misses() {
        let cache = MokaCache::new();

        cache.set_bytes("key", b"value".to_vec()).await.unwrap();
        let _hit = cache.get_bytes("key").await.unwrap();
        let _miss = cache.get_bytes("other").await.unwrap();

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn debug_impl_does_not_dump_values() {
        let cache = MokaCache::new();
        let debug = format!("{cache:?}");
        assert!(debug.contains("MokaCache"));
        assert!(debug.contains("hits"));
    }

    #[test]
    fn default_config_values() {
        let config = MokaCacheConfig::default();
        assert_eq!(config.max_entries, 10_000);
        assert_eq!(config.ttl.as_secs(), 300);
    }
}
