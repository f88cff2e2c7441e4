//! Per-`set` options and their builder.

use std::collections::HashSet;
use std::time::Duration;

/// Options accepted by `set`: a TTL and a set of tags.
#[derive(Debug, Clone, Default)]
pub struct SetOptions {
    /// Time-to-live. `None` means the entry never expires.
    pub ttl: Option<Duration>,
    /// Tags this entry is indexed under.
    pub tags: HashSet<String>,
}

/// Fluent builder for [`SetOptions`].
#[derive(Debug, Clone, Default)]
pub struct CacheOpts(SetOptions);

impl CacheOpts {
    /// Start a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TTL.
    pub fn ttl(mut self, duration: Duration) -> Self {
        self.0.ttl = Some(duration);
        self
    }

    /// Set the TTL in whole seconds.
    pub fn ttl_secs(self, seconds: u64) -> Self {
        self.ttl(Duration::from_secs(seconds))
    }

    /// Set the TTL in whole minutes.
    pub fn ttl_mins(self, minutes: u64) -> Self {
        self.ttl(Duration::from_secs(minutes * 60))
    }

    /// Add multiple tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.0.tags.insert(tag.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> SetOptions {
        self.0
    }
}

impl From<CacheOpts> for SetOptions {
    fn from(opts: CacheOpts) -> Self {
        opts.0
    }
}

impl From<Duration> for SetOptions {
    fn from(ttl: Duration) -> Self {
        SetOptions {
            ttl: Some(ttl),
            ..Default::default()
        }
    }
}
