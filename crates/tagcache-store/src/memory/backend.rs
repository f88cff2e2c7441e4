//! The in-memory engine: primary store, recency order, tag index and
//! statistics, all behind one coordinating lock.

use std::collections::HashMap;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use tagcache_core::{CacheConfig, CacheMetrics, CacheReport, Entry, EvictionReason, NoopMetrics, SetOptions, Stats};

/// Configuration accepted by [`MemoryStore::new`].
///
/// Kept distinct from [`CacheConfig`] only in name, to match the
/// teacher's `*Config` naming for backend constructors; the fields are
/// the same.
pub type MemoryConfig = CacheConfig;

struct Inner {
    store: LruCache<String, Entry>,
    tag_index: HashMap<String, HashSet<String>>,
    stats: Stats,
}

/// A bounded-capacity, TTL-aware, tag-indexed in-memory cache engine.
///
/// All four logical structures (primary store, recency order, tag
/// index, statistics) live behind a single [`parking_lot::Mutex`], so
/// every public operation is atomic with respect to every other.
pub struct MemoryStore<M: CacheMetrics = NoopMetrics> {
    inner: Mutex<Inner>,
    max_size: Option<usize>,
    default_ttl: Option<Duration>,
    metrics: M,
}

impl MemoryStore<NoopMetrics> {
    /// Create a store with the given configuration and no observability.
    pub fn new(config: MemoryConfig) -> Self {
        Self::with_metrics(config, NoopMetrics)
    }

    /// Create an unbounded store with no default TTL.
    pub fn unbounded() -> Self {
        Self::new(MemoryConfig {
            max_size: None,
            default_ttl: None,
        })
    }

    /// Create a store bounded to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(MemoryConfig::with_capacity(capacity))
    }
}

impl<M: CacheMetrics> MemoryStore<M> {
    /// Create a store with the given configuration and metrics adapter.
    pub fn with_metrics(config: MemoryConfig, metrics: M) -> Self {
        // The inner LruCache is always built unbounded: `max_size` is
        // enforced entirely by `evict_over_capacity`'s `pop_lru` loop,
        // which also keeps `tag_index` and `stats.evictions` in sync.
        // If `LruCache` itself were given a finite capacity, `put` would
        // auto-evict the cold entry internally on overflow, bypassing
        // that bookkeeping and leaking the victim's tags.
        let unbounded_cap = NonZeroUsize::new(usize::MAX).unwrap();

        Self {
            inner: Mutex::new(Inner {
                store: LruCache::new(unbounded_cap),
                tag_index: HashMap::new(),
                stats: Stats::default(),
            }),
            max_size: config.max_size,
            default_ttl: config.default_ttl,
            metrics,
        }
    }

    /// Insert or overwrite `key`.
    ///
    /// Rejects malformed input without mutating any state: an empty
    /// key, or a tag string that is empty. Otherwise always succeeds.
    ///
    /// Overwriting an existing key replaces its value, TTL and tags in
    /// place and promotes it to most-recently-used; it never triggers
    /// an eviction of another key.
    pub fn set(&self, key: &str, value: Vec<u8>, options: SetOptions) -> bool {
        if key.is_empty() || options.tags.iter().any(|tag| tag.is_empty()) {
            return false;
        }

        let now = Instant::now();
        let ttl = options.ttl.or(self.default_ttl);
        let expires_at = ttl.map(|d| now + d);

        let mut guard = self.inner.lock();

        if let Some(old) = guard.store.peek(key).cloned() {
            remove_tags(&mut guard.tag_index, key, &old.tags);
        }

        for tag in &options.tags {
            guard
                .tag_index
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }

        let entry = Entry {
            value,
            expires_at,
            tags: options.tags,
        };
        guard.store.put(key.to_string(), entry);
        guard.stats.sets += 1;

        self.evict_over_capacity(&mut guard);

        let size = guard.store.len();
        drop(guard);

        self.metrics.record_set(key);
        self.metrics.record_size(size, self.max_size);
        true
    }

    /// Look up `key`, promoting it to most-recently-used on a hit.
    ///
    /// An entry found to be expired is removed as a side effect and
    /// counts as both a miss and an expiration, never a hit.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let now = Instant::now();
        let mut guard = self.inner.lock();

        match guard.store.peek(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.remove_locked(&mut guard, key);
                guard.stats.misses += 1;
                guard.stats.expirations += 1;
                drop(guard);
                self.metrics.record_expiration(key);
                self.metrics.record_miss(key);
                None
            }
            Some(_) => {
                let value = guard.store.get(key).map(|e| e.value.clone());
                guard.stats.hits += 1;
                drop(guard);
                self.metrics.record_hit(key);
                value
            }
            None => {
                guard.stats.misses += 1;
                drop(guard);
                self.metrics.record_miss(key);
                None
            }
        }
    }

    /// Remove `key` if present and unexpired.
    ///
    /// A key that is present but already expired is treated as absent:
    /// it is swept as an expiration, not counted as a delete, and this
    /// returns `false`.
    pub fn delete(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut guard = self.inner.lock();

        match guard.store.peek(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.remove_locked(&mut guard, key);
                guard.stats.expirations += 1;
                drop(guard);
                self.metrics.record_expiration(key);
                false
            }
            Some(_) => {
                self.remove_locked(&mut guard, key);
                guard.stats.deletes += 1;
                drop(guard);
                self.metrics.record_delete(key);
                true
            }
            None => false,
        }
    }

    /// Snapshot of all live (unexpired) keys, in no particular order.
    ///
    /// Expired entries encountered during the scan are swept and
    /// counted as expirations, exactly as a targeted `get` would.
    pub fn keys(&self) -> Vec<String> {
        let now = Instant::now();
        let mut guard = self.inner.lock();

        let expired: Vec<String> = guard
            .store
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(k, _)| k.clone())
            .collect();

        for key in &expired {
            self.remove_locked(&mut guard, key);
            guard.stats.expirations += 1;
        }

        let live: Vec<String> = guard.store.iter().map(|(k, _)| k.clone()).collect();
        drop(guard);

        for key in &expired {
            self.metrics.record_expiration(key);
        }
        live
    }

    /// Remove every live entry tagged with `tag`. Returns the number
    /// removed. Entries already expired are not counted here — they are
    /// the lazy sweep's responsibility, not the tag index's.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let now = Instant::now();
        let mut guard = self.inner.lock();

        let keys: Vec<String> = guard
            .tag_index
            .get(tag)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default();

        let mut removed = Vec::new();
        for key in &keys {
            let live = matches!(guard.store.peek(key.as_str()), Some(e) if !e.is_expired_at(now));
            if live {
                self.remove_locked(&mut guard, key);
                guard.stats.deletes += 1;
                removed.push(key.clone());
            }
        }
        guard.tag_index.remove(tag);
        let count = removed.len();
        drop(guard);

        for key in &removed {
            self.metrics.record_eviction(key, EvictionReason::Invalidated);
        }
        count
    }

    /// Remove every entry and reset all counters to zero.
    pub fn flush(&self) {
        let mut guard = self.inner.lock();
        guard.store.clear();
        guard.tag_index.clear();
        guard.stats = Stats::default();
    }

    /// Current number of live entries. Does not sweep expired entries.
    pub fn len(&self) -> usize {
        self.inner.lock().store.len()
    }

    /// Whether the store currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A point-in-time snapshot of the engine's statistics.
    pub fn stats(&self) -> CacheReport {
        let guard = self.inner.lock();
        let size = guard.store.len();
        CacheReport::new(guard.stats, size, self.max_size)
    }

    fn remove_locked(&self, guard: &mut Inner, key: &str) {
        if let Some(entry) = guard.store.pop(key) {
            remove_tags(&mut guard.tag_index, key, &entry.tags);
        }
    }

    fn evict_over_capacity(&self, guard: &mut Inner) {
        let Some(max_size) = self.max_size else {
            return;
        };
        let mut evicted = Vec::new();
        while guard.store.len() > max_size {
            let Some((key, entry)) = guard.store.pop_lru() else {
                break;
            };
            remove_tags(&mut guard.tag_index, &key, &entry.tags);
            guard.stats.evictions += 1;
            evicted.push(key);
        }
        for key in evicted {
            self.metrics.record_eviction(&key, EvictionReason::Capacity);
        }
    }
}

fn remove_tags(tag_index: &mut HashMap<String, HashSet<String>>, key: &str, tags: &HashSet<String>) {
    for tag in tags {
        if let Some(keys) = tag_index.get_mut(tag) {
            keys.remove(key);
            if keys.is_empty() {
                tag_index.remove(tag);
            }
        }
    }
}
