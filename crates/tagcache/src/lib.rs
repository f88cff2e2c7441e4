//! tagcache: an in-process, thread-safe key-value cache engine.
//!
//! Combines bounded-capacity LRU eviction, per-entry TTL expiration and
//! a tag index for bulk invalidation behind a single coordinating lock.
//!
//! # Quick start
//!
//! ```rust
//! use tagcache::prelude::*;
//!
//! let cache = Cache::with_capacity(1024);
//!
//! cache.set("user:1", b"alice".to_vec(), CacheOpts::new().ttl_secs(60).tag("users"));
//!
//! assert_eq!(cache.get("user:1"), Some(b"alice".to_vec()));
//!
//! cache.invalidate_tag("users");
//! assert_eq!(cache.get("user:1"), None);
//! ```

pub mod boundary;
mod manager;

pub use tagcache_core::*;
pub use tagcache_store::{MemoryConfig, MemoryStore};

pub use manager::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheConfig, CacheMetrics, CacheOpts, CacheReport, NoopMetrics, SetOptions, Stats};
    pub use crate::Cache;

    #[cfg(feature = "tracing")]
    pub use crate::TracingMetrics;
}

#[cfg(test)]
mod tests;
