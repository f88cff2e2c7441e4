//! Wiring the cache's observability hook into `tracing`.

use tagcache::prelude::*;
use tagcache::CacheConfig;

fn main() {
    tracing_subscriber::fmt().with_target(true).init();

    let cache = Cache::with_metrics(
        CacheConfig::with_capacity(256),
        TracingMetrics::new().with_service_name("demo"),
    );

    cache.set("key", b"value".to_vec(), CacheOpts::new().tag("demo"));
    cache.get("key");
    cache.get("missing");
    cache.invalidate_tag("demo");
}
