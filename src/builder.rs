//! Unified cache builder across eviction policies.
//!
//! Lets callers pick the policy at construction time while programming
//! against one concrete wrapper type.
//!
//! ## Example
//!
//! ```
//! use freqcache::builder::{CacheBuilder, CachePolicy};
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::capacity::Capacity;
use crate::policy::lfu::LfuCache;
use crate::policy::lru::LruCache;
use crate::traits::{CoreCache, MutableCache};

/// Available cache eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Least Frequently Used eviction, recency tie-break.
    Lfu,
    /// Least Recently Used eviction.
    Lru,
}

/// Policy-agnostic cache wrapper produced by [`CacheBuilder`].
#[derive(Debug)]
pub struct Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: CacheInner<K, V>,
}

#[derive(Debug)]
enum CacheInner<K, V>
where
    K: Eq + Hash + Clone,
{
    Lfu(LfuCache<K, V>),
    Lru(LruCache<K, V>),
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts a key-value pair. Returns the previous value if the key existed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.inner {
            CacheInner::Lfu(lfu) => lfu.insert(key, value),
            CacheInner::Lru(lru) => lru.insert(key, value),
        }
    }

    /// Returns the value for `key`, recording the access per the policy.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Lfu(lfu) => lfu.get(key),
            CacheInner::Lru(lru) => lru.get(key),
        }
    }

    /// Removes `key` and returns its value, if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match &mut self.inner {
            CacheInner::Lfu(lfu) => lfu.remove(key),
            CacheInner::Lru(lru) => lru.remove(key),
        }
    }

    /// Returns `true` if `key` is present, without recording an access.
    pub fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Lfu(lfu) => lfu.contains(key),
            CacheInner::Lru(lru) => lru.contains(key),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        match &self.inner {
            CacheInner::Lfu(lfu) => lfu.len(),
            CacheInner::Lru(lru) => lru.len(),
        }
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum entry count; `0` for a disabled cache.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            CacheInner::Lfu(lfu) => lfu.capacity(),
            CacheInner::Lru(lru) => lru.capacity(),
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Lfu(lfu) => lfu.clear(),
            CacheInner::Lru(lru) => lru.clear(),
        }
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: Capacity,
}

impl CacheBuilder {
    /// Starts a builder for a cache of at most `capacity` entries; `0`
    /// yields a disabled cache.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: Capacity::new(capacity),
        }
    }

    /// Starts a builder from an explicit [`Capacity`].
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self { capacity }
    }

    /// Builds a cache with the given policy.
    pub fn build<K, V>(self, policy: CachePolicy) -> Cache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        let inner = match policy {
            CachePolicy::Lfu => CacheInner::Lfu(LfuCache::with_capacity(self.capacity)),
            CachePolicy::Lru => CacheInner::Lru(LruCache::with_capacity(self.capacity)),
        };
        Cache { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_policies_support_basic_ops() {
        for policy in [CachePolicy::Lfu, CachePolicy::Lru] {
            let mut cache = CacheBuilder::new(10).build::<u64, String>(policy);

            assert_eq!(cache.insert(1, "one".to_string()), None);
            assert_eq!(cache.insert(2, "two".to_string()), None);
            assert_eq!(cache.get(&1), Some(&"one".to_string()));
            assert_eq!(cache.get(&3), None);
            assert!(cache.contains(&1));
            assert!(!cache.contains(&99));
            assert_eq!(cache.len(), 2);

            assert_eq!(cache.insert(1, "ONE".to_string()), Some("one".to_string()));
            assert_eq!(cache.get(&1), Some(&"ONE".to_string()));

            assert_eq!(cache.remove(&2), Some("two".to_string()));
            cache.clear();
            assert!(cache.is_empty());
        }
    }

    #[test]
    fn capacity_is_enforced_per_policy() {
        for policy in [CachePolicy::Lfu, CachePolicy::Lru] {
            let mut cache = CacheBuilder::new(2).build::<u64, u64>(policy);
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.insert(3, 3);
            assert_eq!(cache.len(), 2);
        }
    }

    #[test]
    fn disabled_builder_produces_disabled_cache() {
        let mut cache = CacheBuilder::with_capacity(Capacity::Disabled).build::<u64, u64>(CachePolicy::Lfu);
        cache.insert(1, 1);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 0);
    }
}
