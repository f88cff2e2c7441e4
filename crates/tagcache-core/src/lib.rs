//! tagcache-core: shared types, errors and observability traits for the
//! tagcache in-process cache engine.

mod config;
mod error;
mod traits;
mod types;

pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use traits::*;
pub use types::*;
