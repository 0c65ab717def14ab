//! # Cache Trait Hierarchy
//!
//! Defines the trait surface shared by the cache policies in this crate,
//! separating universal operations from policy-specific ones.
//!
//! ## Architecture
//!
//! ```text
//!                ┌─────────────────────────────────────────┐
//!                │            CoreCache<K, V>              │
//!                │                                         │
//!                │  insert(&mut, K, V) → Option<V>         │
//!                │  get(&mut, &K) → Option<&V>             │
//!                │  contains(&, &K) → bool                 │
//!                │  len(&) → usize                         │
//!                │  is_empty(&) → bool                     │
//!                │  capacity(&) → usize                    │
//!                │  clear(&mut)                            │
//!                └──────────────────┬──────────────────────┘
//!                                   │
//!                                   ▼
//!                ┌─────────────────────────────────────────┐
//!                │           MutableCache<K, V>            │
//!                │                                         │
//!                │  remove(&K) → Option<V>                 │
//!                │  remove_batch(keys) → usize             │
//!                └─────────┬─────────────────────┬─────────┘
//!                          │                     │
//!                          ▼                     ▼
//!          ┌────────────────────────┐  ┌────────────────────────┐
//!          │   LfuCacheTrait<K, V>  │  │   LruCacheTrait<K, V>  │
//!          │                        │  │                        │
//!          │  pop_lfu() → (K, V)    │  │  pop_lru() → (K, V)    │
//!          │  peek_lfu() → (&K, &V) │  │  peek_lru() → (&K, &V) │
//!          │  frequency(&K) → u64   │  │  touch(&K) → bool      │
//!          └────────────────────────┘  └────────────────────────┘
//! ```
//!
//! `CoreCache` holds the operations every policy supports; `MutableCache`
//! adds arbitrary key removal; the policy traits add the eviction-order
//! operations that only make sense for that policy. [`ConcurrentCache`] is
//! a `Send + Sync` marker for the synchronized wrappers — the plain policy
//! types are single-threaded and rely on external synchronization.
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//! use freqcache::traits::CoreCache;
//!
//! fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
//!     for (key, value) in data {
//!         cache.insert(*key, value.clone());
//!     }
//! }
//!
//! let mut cache = LfuCache::new(100);
//! warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
//! assert_eq!(cache.len(), 2);
//! ```

/// Core cache operations that all policies support.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations require `Eq + Hash + Clone`)
/// - `V`: Value type
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// existed.
    ///
    /// At capacity, an entry is evicted according to the policy before the
    /// new entry is stored. Updating an existing key counts as an access
    /// for eviction-order purposes.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key`, recording the access per the policy.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is present, without recording an access.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum entry count; `0` for a disabled cache.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key` and returns its value, if present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes a batch of keys; returns the number actually removed.
    fn remove_batch<'a, I>(&mut self, keys: I) -> usize
    where
        K: 'a,
        I: IntoIterator<Item = &'a K>,
    {
        let mut removed = 0;
        for key in keys {
            if self.remove(key).is_some() {
                removed += 1;
            }
        }
        removed
    }
}

/// LFU-specific operations: frequency inspection and min-frequency eviction.
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the eviction candidate: the least recently
    /// touched entry at the minimum frequency.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Returns the eviction candidate without removing it.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Returns the access frequency of `key`, if present.
    fn frequency(&self, key: &K) -> Option<u64>;
}

/// LRU-specific operations: recency inspection and oldest-entry eviction.
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without removing it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used without retrieving its value.
    /// Returns `true` if the key was present.
    fn touch(&mut self, key: &K) -> bool;
}

/// Marker for thread-safe cache handles.
///
/// Implemented by the synchronized wrappers in [`crate::sync`]; bound on it
/// to require a cache that can be shared across threads as-is.
pub trait ConcurrentCache: Send + Sync {}
