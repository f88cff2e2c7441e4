//! Bulk invalidation of a group of related keys via a shared tag.

use tagcache::prelude::*;

fn main() {
    println!("=== tagcache tag invalidation ===\n");

    let cache = Cache::new();

    for id in 1..=3 {
        cache.set(
            &format!("session:{id}"),
            format!("user-{id}").into_bytes(),
            CacheOpts::new().tag("sessions").tag(format!("user:{id}")),
        );
    }
    cache.set("config:theme", b"dark".to_vec(), CacheOpts::new().tag("config"));

    println!("before invalidation: {} keys", cache.keys().len());

    let removed = cache.invalidate_tag("sessions");
    println!("invalidated {removed} entries tagged \"sessions\"");

    println!("after invalidation: {} keys", cache.keys().len());
    println!("config survives: {:?}", cache.get("config:theme").is_some());
}
