//! # LRU (Least Recently Used) Cache
//!
//! Fixed-capacity cache that evicts the entry untouched longest. A single
//! recency list spans the whole cache: head = most recently used, tail =
//! eviction candidate. Same slot-arena formulation as the LFU policy —
//! entries link to their neighbors by [`SlotId`], and a key index gives
//! O(1) lookup.
//!
//! ```text
//!   index: FxHashMap<K, SlotId>
//!   head ──► [id_4] ◄──► [id_1] ◄──► [id_0] ◄── tail (evict first)
//!             MRU                      LRU
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::policy::lru::LruCache;
//! use freqcache::traits::CoreCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");      // "a" is now most recent
//! cache.insert("c", 3); // evicts "b"
//! assert!(!cache.contains(&"b"));
//! ```
//!
//! Not thread-safe; see [`ConcurrentLruCache`](crate::sync::ConcurrentLruCache).

use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::capacity::Capacity;
use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[derive(Debug)]
struct Entry<K, V> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    key: K,
    value: V,
}

/// LRU cache with O(1) get/insert/evict.
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    entries: SlotArena<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries; `0` disables it,
    /// matching [`LfuCache::new`](crate::policy::lfu::LfuCache::new).
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(Capacity::new(capacity))
    }

    /// Creates a cache from an explicit [`Capacity`].
    pub fn with_capacity(capacity: Capacity) -> Self {
        let limit = capacity.entry_limit();
        Self {
            entries: SlotArena::with_capacity(limit),
            index: FxHashMap::with_capacity_and_hasher(limit, Default::default()),
            head: None,
            tail: None,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    fn push_front(&mut self, id: SlotId) {
        let old_head = self.head;
        self.head = Some(id);
        if old_head.is_none() {
            self.tail = Some(id);
        }
        let entry = self.entries.get_mut(id).expect("lru entry missing");
        entry.prev = None;
        entry.next = old_head;
        if let Some(head_id) = old_head {
            self.entries.get_mut(head_id).expect("lru entry missing").prev = Some(id);
        }
    }

    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = {
            let entry = self.entries.get_mut(id).expect("lru entry missing");
            let links = (entry.prev, entry.next);
            entry.prev = None;
            entry.next = None;
            links
        };
        match prev {
            Some(prev_id) => {
                self.entries.get_mut(prev_id).expect("lru entry missing").next = next;
            },
            None => self.head = next,
        }
        match next {
            Some(next_id) => {
                self.entries.get_mut(next_id).expect("lru entry missing").prev = prev;
            },
            None => self.tail = prev,
        }
    }

    fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) {
            return;
        }
        self.unlink(id);
        self.push_front(id);
    }

    fn evict_tail(&mut self) -> Option<(K, V)> {
        let id = self.tail?;
        self.unlink(id);
        let entry = self.entries.remove(id).expect("lru entry missing");
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Walks the recency list and reports the first violated invariant.
    /// O(n); the test-suite oracle, like
    /// [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but arena holds {} entries",
                self.index.len(),
                self.entries.len()
            )));
        }
        if let Capacity::Bounded(limit) = self.capacity
            && self.entries.len() > limit.get()
        {
            return Err(InvariantError::new(format!(
                "size {} exceeds capacity {}",
                self.entries.len(),
                limit
            )));
        }
        if self.capacity.is_disabled() && !self.entries.is_empty() {
            return Err(InvariantError::new("disabled cache holds entries"));
        }

        let mut current = self.head;
        let mut last = None;
        let mut seen = 0usize;
        while let Some(id) = current {
            let entry = self
                .entries
                .get(id)
                .ok_or_else(|| InvariantError::new("recency list links to vacant slot"))?;
            if entry.prev != last {
                return Err(InvariantError::new("back-link mismatch in recency list"));
            }
            if self.index.get(&entry.key) != Some(&id) {
                return Err(InvariantError::new("entry not indexed under its own key"));
            }
            last = current;
            current = entry.next;
            seen += 1;
            if seen > self.entries.len() {
                return Err(InvariantError::new("cycle in recency list"));
            }
        }
        if self.tail != last {
            return Err(InvariantError::new("tail does not terminate recency list"));
        }
        if seen != self.entries.len() {
            return Err(InvariantError::new(format!(
                "{} entries reachable, {} in arena",
                seen,
                self.entries.len()
            )));
        }
        Ok(())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let entry = self.entries.get_mut(id).expect("lru entry missing");
            let previous = mem::replace(&mut entry.value, value);
            self.move_to_front(id);
            return Some(previous);
        }

        let limit = match self.capacity {
            Capacity::Disabled => return None,
            Capacity::Bounded(limit) => limit.get(),
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() >= limit {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some((_key, _value)) = self.evict_tail() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.entries.insert(Entry {
            prev: None,
            next: None,
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        self.push_front(id);

        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        self.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.entries.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity.entry_limit()
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.entries.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.unlink(id);
        self.entries.remove(id).map(|entry| entry.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let result = self.evict_tail();

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_pop_lru_found();
        }

        result
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.tail.and_then(|id| self.entries.get(id))?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        self.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_hits() {
        let mut cache = LruCache::new(3);
        assert_eq!(cache.insert("a", 1), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), None);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.get(&"a");
        cache.insert("c", 3);

        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"b"));
        assert!(cache.contains(&"c"));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn update_refreshes_recency_and_returns_previous() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.insert("a", 10), Some(1));
        cache.insert("c", 3); // evicts "b", not the just-updated "a"

        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"b"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn touch_protects_from_eviction() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert!(cache.touch(&"a"));
        assert!(!cache.touch(&"missing"));
        cache.insert("c", 3);

        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"b"));
    }

    #[test]
    fn pop_and_peek_agree_on_order() {
        let mut cache = LruCache::new(3);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");
        cache.get(&1);

        assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
        assert_eq!(cache.pop_lru(), Some((2, "two")));
        assert_eq!(cache.pop_lru(), Some((3, "three")));
        assert_eq!(cache.pop_lru(), Some((1, "one")));
        assert_eq!(cache.pop_lru(), None);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn remove_unlinks_anywhere_in_the_list() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(3, 3);

        assert_eq!(cache.remove(&2), Some(2)); // middle
        cache.check_invariants().unwrap();
        assert_eq!(cache.remove(&3), Some(3)); // head
        cache.check_invariants().unwrap();
        assert_eq!(cache.remove(&1), Some(1)); // tail, also last
        assert!(cache.is_empty());
        cache.check_invariants().unwrap();
    }

    #[test]
    fn capacity_zero_disables() {
        let mut cache = LruCache::new(0);
        assert_eq!(cache.capacity(), 0);
        cache.insert(1, 1);
        assert_eq!(cache.get(&1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_then_reuse() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.clear();
        assert!(cache.is_empty());
        cache.insert("b", 2);
        assert_eq!(cache.get(&"b"), Some(&2));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn mixed_sweep_keeps_structure_consistent() {
        let mut cache = LruCache::new(6);
        let mut state = 0x2545f4914f6cdd1du64;
        for step in 0..1_500u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let key = state % 16;
            match state % 4 {
                0 | 1 => {
                    cache.insert(key, step);
                },
                2 => {
                    let _ = cache.get(&key);
                },
                _ => {
                    cache.remove(&key);
                },
            }
            assert!(cache.len() <= 6);
            cache.check_invariants().unwrap_or_else(|err| {
                panic!("step {step}: {err}");
            });
        }
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn counters_track_operations() {
        let mut cache = LruCache::new(2);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.get(&1);
        cache.get(&7);
        cache.insert(3, 3); // evicts
        cache.touch(&1);

        let snap = cache.metrics_snapshot();
        assert_eq!(snap.insert_new, 3);
        assert_eq!(snap.get_hits, 1);
        assert_eq!(snap.get_misses, 1);
        assert_eq!(snap.evicted_entries, 1);
        assert_eq!(snap.touch_found, 1);
        assert_eq!(snap.cache_len, 2);
    }
}
