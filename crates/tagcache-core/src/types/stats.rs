//! Cache statistics and the JSON-facing report built from them.

#[cfg(feature = "json")]
use serde::Serialize;

/// Monotonic operation counters, maintained under the same lock as the
/// operation that moves them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    /// Lookups that found a live, unexpired entry.
    pub hits: u64,
    /// Lookups that found nothing, or found an expired entry.
    pub misses: u64,
    /// Successful `set` calls.
    pub sets: u64,
    /// `delete` calls that removed a live entry.
    pub deletes: u64,
    /// Entries removed to enforce capacity.
    pub evictions: u64,
    /// Entries removed because their TTL had elapsed.
    pub expirations: u64,
}

impl Stats {
    /// Fraction of lookups (`get`) that were hits, in `[0.0, 1.0]`.
    ///
    /// Defined as `0.0` when there have been no lookups yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A point-in-time snapshot of [`Stats`] plus sizing, suitable for
/// serializing across the binding boundary.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct CacheReport {
    pub size: usize,
    /// `None` (serialized as JSON `null`) when the cache is unbounded.
    pub max_size: Option<usize>,
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub deletes: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub hit_rate: f64,
}

impl CacheReport {
    pub fn new(stats: Stats, size: usize, max_size: Option<usize>) -> Self {
        Self {
            size,
            max_size,
            hits: stats.hits,
            misses: stats.misses,
            sets: stats.sets,
            deletes: stats.deletes,
            evictions: stats.evictions,
            expirations: stats.expirations,
            hit_rate: stats.hit_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = Stats::default();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = Stats {
            hits: 80,
            misses: 20,
            ..Default::default()
        };
        assert!((stats.hit_rate() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_from_stats() {
        let stats = Stats {
            hits: 3,
            misses: 1,
            sets: 4,
            ..Default::default()
        };
        let report = CacheReport::new(stats, 4, Some(100));
        assert_eq!(report.size, 4);
        assert_eq!(report.max_size, Some(100));
        assert_eq!(report.sets, 4);
        assert!((report.hit_rate - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_max_size_none_for_unbounded() {
        let report = CacheReport::new(Stats::default(), 0, None);
        assert_eq!(report.max_size, None);
    }
}
