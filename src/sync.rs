//! Synchronized cache wrappers.
//!
//! Each wrapper owns one `parking_lot::Mutex` around the whole policy and
//! holds it for the full duration of every operation — there is no separate
//! read path and no finer-grained locking, because each critical section is
//! O(1) and bounded. Operations from different threads are totally ordered
//! by lock acquisition, so the observable state always matches some serial
//! execution of the same calls.
//!
//! Values are returned by clone (`V: Clone`) since a reference cannot
//! outlive the critical section; `get_with` runs a closure under the lock
//! for callers that want to avoid the clone.
//!
//! A fatal invariant violation inside an operation panics. `parking_lot`
//! mutexes do not poison, but such a panic means the cache implementation
//! itself is defective — there is no recovery path either way.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use freqcache::sync::ConcurrentLfuCache;
//!
//! let cache = Arc::new(ConcurrentLfuCache::new(100));
//! let handle = {
//!     let cache = cache.clone();
//!     std::thread::spawn(move || {
//!         cache.insert(1u64, "one".to_string());
//!     })
//! };
//! handle.join().unwrap();
//! assert_eq!(cache.get(&1), Some("one".to_string()));
//! ```

use std::hash::Hash;

use parking_lot::Mutex;

use crate::capacity::Capacity;
use crate::policy::lfu::LfuCache;
use crate::policy::lru::LruCache;
use crate::traits::{ConcurrentCache, CoreCache, LfuCacheTrait, LruCacheTrait, MutableCache};

/// Thread-safe handle around an [`LfuCache`].
#[derive(Debug)]
pub struct ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Mutex<LfuCache<K, V>>,
}

impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries; `0` disables it.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LfuCache::new(capacity)),
        }
    }

    /// Creates a cache from an explicit [`Capacity`].
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            inner: Mutex::new(LfuCache::with_capacity(capacity)),
        }
    }

    /// Returns a clone of the value for `key`, recording the access.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Runs `f` on the value for `key` under the lock, recording the access.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.inner.lock().get(key).map(f)
    }

    /// Inserts a key-value pair, returning the previous value if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Removes `key` and returns its value, if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the current eviction candidate.
    pub fn pop_lfu(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lfu()
    }

    /// Returns the access frequency of `key`, if present.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.lock().frequency(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs the structural consistency check under the lock.
    pub fn check_invariants(&self) -> Result<(), crate::error::InvariantError> {
        self.inner.lock().check_invariants()
    }
}

impl<K, V> ConcurrentCache for ConcurrentLfuCache<K, V> where K: Eq + Hash + Clone + Send, V: Send {}

/// Thread-safe handle around an [`LruCache`].
#[derive(Debug)]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Mutex<LruCache<K, V>>,
}

impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries; `0` disables it.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Creates a cache from an explicit [`Capacity`].
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            inner: Mutex::new(LruCache::with_capacity(capacity)),
        }
    }

    /// Returns a clone of the value for `key`, refreshing its recency.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Runs `f` on the value for `key` under the lock, refreshing recency.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.inner.lock().get(key).map(f)
    }

    /// Inserts a key-value pair, returning the previous value if any.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Removes `key` and returns its value, if present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Marks `key` as most recently used; `true` if it was present.
    pub fn touch(&self, key: &K) -> bool {
        self.inner.lock().touch(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs the structural consistency check under the lock.
    pub fn check_invariants(&self) -> Result<(), crate::error::InvariantError> {
        self.inner.lock().check_invariants()
    }
}

impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V> where K: Eq + Hash + Clone + Send, V: Send {}
