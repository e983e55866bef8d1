//! Cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the in-memory audio and report cache
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL for cached entries in seconds (default: 5 minutes)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of entries held in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_ttl_secs() -> u64 {
    5 * 60 // 5 minutes
}

const fn default_max_entries() -> u64 {
    10_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Get the TTL as a Duration
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl_secs, 5 * 60);
        assert_eq!(config.max_entries, 10_000);
    }

    #[test]
    fn ttl_converts_to_duration() {
        let config = CacheConfig {
            ttl_secs: 42,
            ..CacheConfig::default()
        };
        assert_eq!(config.ttl().as_secs(), 42);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: CacheConfig = serde_json::from_str(r#"{"ttl_secs":60}"#).unwrap();
        assert_eq!(config.ttl_secs, 60);
        assert_eq!(config.max_entries, 10_000);
    }
}
