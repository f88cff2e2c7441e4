//! Cache configuration.

use std::time::Duration;

/// Construction-time configuration for a cache instance.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum number of entries. `None` means unbounded.
    pub max_size: Option<usize>,
    /// TTL applied to `set` calls that don't specify one. `None` means
    /// entries never expire unless given an explicit TTL.
    pub default_ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: Some(1024),
            default_ttl: None,
        }
    }
}

impl CacheConfig {
    /// Create a config with the given capacity and no default TTL.
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            default_ttl: None,
        }
    }

    /// Set the default TTL.
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Build a config from the primitive integers a binding boundary
    /// would pass: a non-positive `max_size` means unbounded, a
    /// non-positive `default_ttl_secs` means no default TTL.
    pub fn from_raw(max_size: i64, default_ttl_secs: i64) -> Self {
        Self {
            max_size: usize::try_from(max_size).ok().filter(|&n| n > 0),
            default_ttl: u64::try_from(default_ttl_secs)
                .ok()
                .filter(|&s| s > 0)
                .map(Duration::from_secs),
        }
    }
}
