//! The public operations facade.

use std::sync::Arc;

use tagcache_core::{CacheConfig, CacheMetrics, CacheReport, NoopMetrics, SetOptions};
use tagcache_store::MemoryStore;

/// A thread-safe, in-process cache combining bounded-capacity LRU
/// eviction, per-entry TTL expiration, and tag-based bulk invalidation.
///
/// `Cache` is a cheap handle: cloning it shares the same underlying
/// store, the way the teacher's manager shares a backend across clones.
pub struct Cache<M: CacheMetrics = NoopMetrics> {
    store: Arc<MemoryStore<M>>,
}

impl Cache<NoopMetrics> {
    /// Create a cache with the default configuration (capacity 1024, no
    /// default TTL).
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache bounded to `capacity` entries, no default TTL.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(CacheConfig::with_capacity(capacity))
    }

    /// Create a cache with explicit configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            store: Arc::new(MemoryStore::new(config)),
        }
    }
}

impl Default for Cache<NoopMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: CacheMetrics> Cache<M> {
    /// Create a cache with explicit configuration and an observability
    /// adapter (see [`tagcache_core::CacheMetrics`]).
    pub fn with_metrics(config: CacheConfig, metrics: M) -> Self {
        Self {
            store: Arc::new(MemoryStore::with_metrics(config, metrics)),
        }
    }

    /// Insert or overwrite `key`. Returns `false` without changing the
    /// cache if `key` is empty or `options` carries an empty-string tag;
    /// otherwise always returns `true`.
    pub fn set(&self, key: &str, value: Vec<u8>, options: impl Into<SetOptions>) -> bool {
        self.store.set(key, value, options.into())
    }

    /// Look up `key`. Returns `None` if absent or expired.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key)
    }

    /// Remove `key`. Returns `false` if it was absent or already
    /// expired.
    pub fn delete(&self, key: &str) -> bool {
        self.store.delete(key)
    }

    /// Snapshot of all live keys.
    pub fn keys(&self) -> Vec<String> {
        self.store.keys()
    }

    /// Remove every live entry tagged with `tag`. Returns the count
    /// removed.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        self.store.invalidate_tag(tag)
    }

    /// Remove every entry and reset all statistics.
    pub fn flush(&self) {
        self.store.flush()
    }

    /// Current number of live entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the cache currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// A point-in-time statistics snapshot.
    pub fn stats(&self) -> CacheReport {
        self.store.stats()
    }

    /// The statistics snapshot serialized as JSON.
    #[cfg(feature = "json")]
    pub fn stats_json(&self) -> String {
        serde_json::to_string(&self.stats()).unwrap_or_default()
    }
}

impl<M: CacheMetrics> Clone for Cache<M> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
