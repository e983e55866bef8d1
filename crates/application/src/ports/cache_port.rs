//! Cache port definition
//!
//! Defines the interface for caching generated audio and report text.
//! Implementations decide the time-to-live and eviction policy; callers
//! only see the key/value surface.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Cache port for storing and retrieving cached payloads
///
/// Implementations should be thread-safe and support async operations.
/// Values are stored as raw bytes, so the same cache holds both audio
/// artifacts and composed report text.
#[async_trait]
pub trait CachePort: Send + Sync + std::fmt::Debug {
    /// Get a cached value by key
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Set a cached value
    ///
    /// If the key already exists, its value is replaced and its
    /// time-to-live starts over.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError>;

    /// Invalidate (delete) a single cache entry
    async fn invalidate(&self, key: &str) -> Result<(), ApplicationError>;

    /// Check if a key exists in the cache
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError>;

    /// Get cache statistics (hits, misses, size)
    fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries
    pub entries: u64,
}

impl CacheStats {
    /// Calculate the hit rate as a fraction (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            // Precision loss is acceptable for statistics display
            self.hits as f64 / total as f64
        }
    }
}
