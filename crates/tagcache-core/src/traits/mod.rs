//! Core traits for cache observability.

mod metrics;

pub use metrics::{CacheMetrics, EvictionReason, NoopMetrics};

#[cfg(feature = "metrics")]
mod metrics_adapter;
#[cfg(feature = "metrics")]
pub use metrics_adapter::MetricsCrateAdapter;

#[cfg(feature = "tracing")]
mod tracing;
#[cfg(feature = "tracing")]
pub use tracing::TracingMetrics;
