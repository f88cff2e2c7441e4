//! Basic set/get/delete and statistics.

use std::time::Duration;
use tagcache::prelude::*;

fn main() {
    println!("=== tagcache basic usage ===\n");

    let cache = Cache::with_capacity(1024);

    cache.set(
        "user:123",
        b"{\"name\":\"Alice\"}".to_vec(),
        CacheOpts::new().ttl_secs(300).tag("users"),
    );

    match cache.get("user:123") {
        Some(value) => println!("hit: {}", String::from_utf8_lossy(&value)),
        None => println!("miss"),
    }

    println!("exists after set: {}", cache.get("user:123").is_some());

    let deleted = cache.delete("user:123");
    println!("deleted: {deleted}");
    println!("exists after delete: {}", cache.get("user:123").is_some());

    cache.set(
        "temp",
        b"expires soon".to_vec(),
        CacheOpts::new().ttl(Duration::from_millis(50)),
    );
    std::thread::sleep(Duration::from_millis(60));
    println!("temp after ttl: {:?}", cache.get("temp"));

    let stats = cache.stats();
    println!(
        "\nstats: size={} hits={} misses={} sets={} deletes={} expirations={} hit_rate={:.2}",
        stats.size, stats.hits, stats.misses, stats.sets, stats.deletes, stats.expirations, stats.hit_rate
    );
}
