use crate::{CacheMetrics, EvictionReason};
use tracing::{debug, trace};

/// Metrics adapter that logs events via `tracing` instead of forwarding
/// them to a metrics backend.
#[derive(Debug, Clone, Default)]
pub struct TracingMetrics {
    /// Optional prefix included on every event, e.g. the cache's name.
    service_name: Option<String>,
}

impl TracingMetrics {
    /// Create a new tracing metrics adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a service name prefix to every logged event.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }
}

impl CacheMetrics for TracingMetrics {
    fn record_hit(&self, key: &str) {
        debug!(
            target: "tagcache",
            event = "hit",
            key = %key,
            service = ?self.service_name,
            "cache hit"
        );
    }

    fn record_miss(&self, key: &str) {
        debug!(
            target: "tagcache",
            event = "miss",
            key = %key,
            service = ?self.service_name,
            "cache miss"
        );
    }

    fn record_set(&self, key: &str) {
        trace!(
            target: "tagcache",
            event = "set",
            key = %key,
            service = ?self.service_name,
            "cache set"
        );
    }

    fn record_delete(&self, key: &str) {
        trace!(
            target: "tagcache",
            event = "delete",
            key = %key,
            service = ?self.service_name,
            "cache delete"
        );
    }

    fn record_eviction(&self, key: &str, reason: EvictionReason) {
        debug!(
            target: "tagcache",
            event = "eviction",
            key = %key,
            reason = reason.as_str(),
            service = ?self.service_name,
            "cache eviction"
        );
    }

    fn record_expiration(&self, key: &str) {
        debug!(
            target: "tagcache",
            event = "expiration",
            key = %key,
            service = ?self.service_name,
            "cache entry expired"
        );
    }

    fn record_size(&self, size: usize, max_size: Option<usize>) {
        trace!(
            target: "tagcache",
            event = "size",
            size = size,
            max_size = ?max_size,
            service = ?self.service_name,
            "cache size update"
        );
    }
}
