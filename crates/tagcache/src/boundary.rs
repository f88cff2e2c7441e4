//! A thin marshalling layer modeling what a language-binding surface
//! (FFI, WASM, or similar) would sit behind: every method here takes and
//! returns only primitive types, so a real boundary only needs to know
//! how to pass strings, bytes and integers across.
//!
//! This module does not implement an actual `extern "C"` ABI — that
//! remains out of scope — it only demonstrates the marshalling shape a
//! binding would use on top of [`crate::Cache`].

use crate::{Cache, CacheConfig, CacheOpts, NoopMetrics};

/// A handle over [`Cache`] restricted to primitive-typed methods.
pub struct CacheHandle {
    cache: Cache<NoopMetrics>,
}

impl CacheHandle {
    /// Construct a handle. `max_size <= 0` means unbounded;
    /// `default_ttl_secs <= 0` means entries never expire unless given
    /// an explicit TTL.
    pub fn new(max_size: i64, default_ttl_secs: i64) -> Self {
        Self {
            cache: Cache::with_config(CacheConfig::from_raw(max_size, default_ttl_secs)),
        }
    }

    /// Insert or overwrite `key`. `ttl_secs == 0` means no explicit TTL
    /// (the configured default TTL, if any, still applies). A negative
    /// `ttl_secs`, an empty key, or an empty tag string is rejected:
    /// this returns `false` and leaves the cache unchanged.
    pub fn set(&self, key: &str, value: Vec<u8>, ttl_secs: i64, tags: Vec<String>) -> bool {
        if ttl_secs < 0 {
            return false;
        }
        let mut opts = CacheOpts::new().tags(tags);
        if ttl_secs > 0 {
            opts = opts.ttl_secs(ttl_secs as u64);
        }
        self.cache.set(key, value, opts)
    }

    /// Look up `key`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.cache.get(key)
    }

    /// Remove `key`.
    pub fn delete(&self, key: &str) -> bool {
        self.cache.delete(key)
    }

    /// Snapshot of all live keys.
    pub fn keys(&self) -> Vec<String> {
        self.cache.keys()
    }

    /// Remove every live entry tagged with `tag`; returns the count.
    pub fn invalidate_tag(&self, tag: &str) -> u64 {
        self.cache.invalidate_tag(tag) as u64
    }

    /// Remove every entry and reset statistics.
    pub fn flush(&self) {
        self.cache.flush()
    }

    /// The statistics report as a JSON string.
    #[cfg(feature = "json")]
    pub fn stats_json(&self) -> String {
        self.cache.stats_json()
    }
}
