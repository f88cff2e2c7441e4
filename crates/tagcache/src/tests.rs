//! Integration tests for the `Cache` facade.

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_basic_get_set() {
        let cache = Cache::new();
        cache.set("key", b"value".to_vec(), CacheOpts::new());
        assert_eq!(cache.get("key"), Some(b"value".to_vec()));
    }

    #[test]
    fn test_cache_miss() {
        let cache = Cache::new();
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new();
        cache.set("key", b"value".to_vec(), CacheOpts::new());
        assert!(cache.delete("key"));
        assert_eq!(cache.get("key"), None);
        assert!(!cache.delete("key"));
    }

    #[test]
    fn test_bounded_capacity_evicts_lru() {
        let cache = Cache::with_capacity(2);
        cache.set("a", b"1".to_vec(), CacheOpts::new());
        cache.set("b", b"2".to_vec(), CacheOpts::new());
        cache.set("c", b"3".to_vec(), CacheOpts::new());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = Cache::new();
        cache.set("key", b"value".to_vec(), CacheOpts::new().ttl(Duration::from_millis(10)));
        assert_eq!(cache.get("key"), Some(b"value".to_vec()));

        thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.get("key"), None);
        assert_eq!(cache.stats().expirations, 1);
    }

    #[test]
    fn test_tag_invalidation_removes_only_tagged_entries() {
        let cache = Cache::new();
        cache.set("user:1", b"a".to_vec(), CacheOpts::new().tag("users"));
        cache.set("user:2", b"b".to_vec(), CacheOpts::new().tag("users"));
        cache.set("config", b"c".to_vec(), CacheOpts::new().tag("config"));

        let removed = cache.invalidate_tag("users");
        assert_eq!(removed, 2);
        assert_eq!(cache.get("user:1"), None);
        assert_eq!(cache.get("user:2"), None);
        assert!(cache.get("config").is_some());

        // invalidating an unknown tag is a no-op
        assert_eq!(cache.invalidate_tag("users"), 0);
    }

    #[test]
    fn test_flush_resets_size_and_stats() {
        let cache = Cache::new();
        cache.set("a", b"1".to_vec(), CacheOpts::new());
        cache.get("a");
        cache.get("missing");

        cache.flush();

        assert_eq!(cache.len(), 0);
        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.sets, 0);
    }

    #[test]
    fn test_stats_hit_rate() {
        let cache = Cache::new();
        cache.set("key1", b"1".to_vec(), CacheOpts::new());
        cache.set("key2", b"2".to_vec(), CacheOpts::new());

        cache.get("key1"); // hit
        cache.get("key3"); // miss

        let stats = cache.stats();
        assert_eq!(stats.sets, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate - 0.5).abs() < f64::EPSILON);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_stats_json_roundtrips_through_serde() {
        let cache = Cache::new();
        cache.set("key", b"value".to_vec(), CacheOpts::new());
        let json = cache.stats_json();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["sets"], 1);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_stats_json_max_size_is_null_when_unbounded() {
        let cache = Cache::with_config(CacheConfig {
            max_size: None,
            default_ttl: None,
        });
        cache.set("key", b"value".to_vec(), CacheOpts::new());

        let parsed: serde_json::Value = serde_json::from_str(&cache.stats_json()).unwrap();
        assert!(parsed["max_size"].is_null());
    }

    #[test]
    fn test_set_rejects_empty_key_and_empty_tag() {
        let cache = Cache::new();
        assert!(!cache.set("", b"v".to_vec(), CacheOpts::new()));
        assert!(!cache.set("key", b"v".to_vec(), CacheOpts::new().tag("")));
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().sets, 0);
    }

    #[test]
    fn test_overwrite_preserves_other_entries() {
        let cache = Cache::with_capacity(2);
        cache.set("a", b"1".to_vec(), CacheOpts::new());
        cache.set("b", b"2".to_vec(), CacheOpts::new());
        cache.set("a", b"1-new".to_vec(), CacheOpts::new());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(b"1-new".to_vec()));
        assert_eq!(cache.get("b"), Some(b"2".to_vec()));
    }

    #[test]
    fn test_clone_shares_the_same_store() {
        let cache1 = Cache::new();
        cache1.set("key", b"value".to_vec(), CacheOpts::new());

        let cache2 = cache1.clone();
        assert_eq!(cache2.get("key"), Some(b"value".to_vec()));

        cache2.delete("key");
        assert_eq!(cache1.get("key"), None);
    }

    #[test]
    fn test_concurrent_access_stays_consistent() {
        let cache = Cache::with_capacity(64);
        let mut handles = Vec::new();

        for t in 0..8 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("t{t}-{i}");
                    cache.set(&key, vec![t as u8], CacheOpts::new().tag("hammer"));
                    cache.get(&key);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 64);
        let stats = cache.stats();
        assert_eq!(stats.sets, 8 * 200);
    }

    #[test]
    fn test_keys_excludes_expired_entries() {
        let cache = Cache::new();
        cache.set("short", b"1".to_vec(), CacheOpts::new().ttl(Duration::from_millis(5)));
        cache.set("long", b"2".to_vec(), CacheOpts::new());

        thread::sleep(Duration::from_millis(15));

        let keys = cache.keys();
        assert_eq!(keys, vec!["long".to_string()]);
    }

    #[test]
    fn test_shared_across_arc() {
        let cache = Arc::new(Cache::new());
        cache.set("k", b"v".to_vec(), CacheOpts::new());
        let cache2 = Arc::clone(&cache);
        assert_eq!(cache2.get("k"), Some(b"v".to_vec()));
    }
}
