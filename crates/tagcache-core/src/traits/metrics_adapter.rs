//! Adapter forwarding cache events to the `metrics` crate's global
//! recorder.

use crate::{CacheMetrics, EvictionReason};
use metrics::{counter, gauge};

/// Metrics adapter that records cache events as `metrics` crate
/// counters and gauges. Install a recorder (e.g. a Prometheus exporter)
/// before using this, as the crate otherwise discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCrateAdapter;

impl CacheMetrics for MetricsCrateAdapter {
    fn record_hit(&self, _key: &str) {
        counter!("tagcache_hits_total").increment(1);
    }

    fn record_miss(&self, _key: &str) {
        counter!("tagcache_misses_total").increment(1);
    }

    fn record_set(&self, _key: &str) {
        counter!("tagcache_sets_total").increment(1);
    }

    fn record_delete(&self, _key: &str) {
        counter!("tagcache_deletes_total").increment(1);
    }

    fn record_eviction(&self, _key: &str, reason: EvictionReason) {
        counter!("tagcache_evictions_total", "reason" => reason.as_str()).increment(1);
    }

    fn record_expiration(&self, _key: &str) {
        counter!("tagcache_expirations_total").increment(1);
    }

    fn record_size(&self, size: usize, max_size: Option<usize>) {
        gauge!("tagcache_size").set(size as f64);
        gauge!("tagcache_max_size").set(max_size.map(|m| m as f64).unwrap_or(f64::INFINITY));
    }
}
