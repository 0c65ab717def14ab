pub use crate::builder::{Cache, CacheBuilder, CachePolicy};
pub use crate::capacity::Capacity;
pub use crate::ds::{SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::{LfuCache, LruCache};
pub use crate::traits::{CoreCache, LfuCacheTrait, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::sync::{ConcurrentLfuCache, ConcurrentLruCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::{LfuMetricsSnapshot, LruMetricsSnapshot};
