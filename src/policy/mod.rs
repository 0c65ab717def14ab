//! Cache eviction policies.
//!
//! Each policy is a standalone single-threaded type over the shared slot
//! arena; the wrappers in [`crate::sync`] add synchronization.

pub mod lfu;
pub mod lru;

pub use lfu::LfuCache;
pub use lru::LruCache;
