//! tagcache-store: the in-memory LRU/TTL/tag-indexed storage engine.

pub mod memory;

pub use memory::{MemoryConfig, MemoryStore};
