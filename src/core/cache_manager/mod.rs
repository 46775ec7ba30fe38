//! In-memory TTL cache
//!
//! Generic key/value store where every entry expires a fixed time after it was
//! written. Expired entries are removed lazily on the next read of their key.

pub mod manager;
pub mod types;


pub use manager::{DEFAULT_TTL, TtlCache};
pub use types::{CacheEntry, CacheStats};
