//! # LFU (Least Frequently Used) Cache
//!
//! Fixed-capacity cache that evicts the entry with the lowest access
//! frequency, breaking ties by recency: among the entries tied at the
//! minimum frequency, the one untouched longest goes first.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                         LfuCache<K, V>                           │
//!   │                                                                  │
//!   │   index: FxHashMap<K, SlotId>      entries: SlotArena<Entry>     │
//!   │   ┌───────────┬─────────┐          ┌──────┬────────────────────┐ │
//!   │   │   Key     │ SlotId  │          │ Slot │ freq, links, k, v  │ │
//!   │   ├───────────┼─────────┤          ├──────┼────────────────────┤ │
//!   │   │ "page_a"  │  id_0   │─────────►│ id_0 │ freq=2, prev/next  │ │
//!   │   │ "page_b"  │  id_1   │─────────►│ id_1 │ freq=1, prev/next  │ │
//!   │   │ "page_c"  │  id_2   │─────────►│ id_2 │ freq=1, prev/next  │ │
//!   │   └───────────┴─────────┘          └──────┴────────────────────┘ │
//!   │                                                                  │
//!   │   buckets: FxHashMap<u64, Bucket>   (frequency → recency list)   │
//!   │                                                                  │
//!   │   min_freq = 1                                                   │
//!   │        │                                                         │
//!   │        ▼                                                         │
//!   │   freq=1: head ──► [id_2] ◄──► [id_1] ◄── tail (evict first)     │
//!   │   freq=2: head ──► [id_0] ◄── tail                               │
//!   │                                                                  │
//!   │   Level links: freq=1 ──next──► freq=2,  freq=2 ──prev──► freq=1 │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries live in a slot arena and refer to their bucket neighbors by
//! [`SlotId`], never by pointer. Buckets are doubly linked by frequency
//! level so that arbitrary removal can recompute the minimum in O(1).
//!
//! ## Operation Flow
//!
//! ```text
//!   get(key) hit / insert(key) on existing key:
//!     1. Look up the slot id in the index
//!     2. Unlink the entry from its current bucket
//!     3. Bucket emptied → drop it, advance min_freq past it
//!     4. Push the entry to the front of the freq+1 bucket (created lazily)
//!
//!   insert(key) on a new key at capacity:
//!     1. Pop the tail of the min_freq bucket (LFU victim, oldest tie)
//!     2. Store the new entry at freq=1, front of bucket 1
//!     3. min_freq = 1 (a fresh entry is always the global minimum)
//! ```
//!
//! ## Operations
//!
//! | Method        | Complexity | Notes                                 |
//! |---------------|------------|---------------------------------------|
//! | `insert(k,v)` | O(1)       | Update counts as an access            |
//! | `get(&k)`     | O(1)       | Increments frequency                  |
//! | `remove(&k)`  | O(1)       | Arbitrary removal, min_freq stays true|
//! | `pop_lfu()`   | O(1)       | Evict the candidate explicitly        |
//! | `peek_lfu()`  | O(1)       | Inspect without mutating              |
//! | `frequency`   | O(1)       | Current access count for a key        |
//! | `clear()`     | O(n)       | Drop everything                       |
//!
//! ## Example Usage
//!
//! ```
//! use freqcache::policy::lfu::LfuCache;
//! use freqcache::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache = LfuCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a"); // "a" now at frequency 2
//!
//! cache.insert("c", 3); // evicts "b" (frequency 1)
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.frequency(&"a"), Some(2));
//! ```
//!
//! ## Thread Safety
//!
//! `LfuCache` is not thread-safe. Use
//! [`ConcurrentLfuCache`](crate::sync::ConcurrentLfuCache) for shared
//! access; it holds one mutex across each whole operation.

use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::capacity::Capacity;
use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// Link fields first: they are touched on every relocation, the key and
/// value only on lookup and eviction.
#[derive(Debug)]
struct Entry<K, V> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    freq: u64,
    key: K,
    value: V,
}

#[derive(Debug)]
struct Bucket {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    /// Next lower occupied frequency level.
    prev: Option<u64>,
    /// Next higher occupied frequency level.
    next: Option<u64>,
}

/// LFU cache with O(1) get/insert/evict and recency tie-breaking.
///
/// See the module documentation for the structure; see
/// [`Capacity`](crate::capacity::Capacity) for the disabled-cache
/// convention.
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    entries: SlotArena<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    buckets: FxHashMap<u64, Bucket>,
    /// Smallest occupied frequency; 0 while the cache is empty.
    min_freq: u64,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// `capacity == 0` yields a permanently disabled cache: every insert is
    /// silently dropped and every get misses. This is the documented
    /// behavior of the original interface, not an error.
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(Capacity::new(capacity))
    }

    /// Creates a cache from an explicit [`Capacity`].
    pub fn with_capacity(capacity: Capacity) -> Self {
        let limit = capacity.entry_limit();
        Self {
            entries: SlotArena::with_capacity(limit),
            index: FxHashMap::with_capacity_and_hasher(limit, Default::default()),
            buckets: FxHashMap::default(),
            min_freq: 0,
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    fn list_push_front(&mut self, freq: u64, id: SlotId) {
        let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");
        let old_head = bucket.head;
        bucket.head = Some(id);
        if old_head.is_none() {
            bucket.tail = Some(id);
        }
        let entry = self.entries.get_mut(id).expect("lfu entry missing");
        entry.prev = None;
        entry.next = old_head;
        if let Some(head_id) = old_head {
            self.entries.get_mut(head_id).expect("lfu entry missing").prev = Some(id);
        }
    }

    fn list_remove(&mut self, freq: u64, id: SlotId) {
        let (prev, next) = {
            let entry = self.entries.get_mut(id).expect("lfu entry missing");
            let links = (entry.prev, entry.next);
            entry.prev = None;
            entry.next = None;
            links
        };
        match prev {
            Some(prev_id) => {
                self.entries.get_mut(prev_id).expect("lfu entry missing").next = next;
            },
            None => {
                self.buckets.get_mut(&freq).expect("lfu bucket missing").head = next;
            },
        }
        match next {
            Some(next_id) => {
                self.entries.get_mut(next_id).expect("lfu entry missing").prev = prev;
            },
            None => {
                self.buckets.get_mut(&freq).expect("lfu bucket missing").tail = prev;
            },
        }
    }

    fn bucket_is_empty(&self, freq: u64) -> bool {
        self.buckets
            .get(&freq)
            .map_or(true, |bucket| bucket.head.is_none())
    }

    /// Creates the bucket for `freq` and splices it between the given
    /// occupied levels.
    fn insert_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            Bucket {
                head: None,
                tail: None,
                prev,
                next,
            },
        );
        if let Some(prev_freq) = prev
            && let Some(bucket) = self.buckets.get_mut(&prev_freq)
        {
            bucket.next = Some(freq);
        }
        if let Some(next_freq) = next
            && let Some(bucket) = self.buckets.get_mut(&next_freq)
        {
            bucket.prev = Some(freq);
        }
    }

    /// Drops the (empty) bucket for `freq` and relinks its neighbor levels.
    fn remove_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.remove(&freq);
        if let Some(prev_freq) = prev
            && let Some(bucket) = self.buckets.get_mut(&prev_freq)
        {
            bucket.next = next;
        }
        if let Some(next_freq) = next
            && let Some(bucket) = self.buckets.get_mut(&next_freq)
        {
            bucket.prev = prev;
        }
    }

    /// Moves the entry to the front of the next-higher frequency bucket and
    /// returns the new frequency. The relocation never leaves an empty
    /// bucket behind and keeps `min_freq` exact.
    fn promote(&mut self, id: SlotId) -> u64 {
        let current = self.entries.get(id).expect("lfu entry missing").freq;
        if current == u64::MAX {
            // Saturated: refresh recency, leave the frequency alone.
            self.list_remove(current, id);
            self.list_push_front(current, id);
            return current;
        }
        let next_freq = current + 1;

        let (level_prev, level_next) = {
            let bucket = self.buckets.get(&current).expect("lfu bucket missing");
            (bucket.prev, bucket.next)
        };

        self.list_remove(current, id);
        let emptied = self.bucket_is_empty(current);
        if emptied {
            self.remove_bucket(current, level_prev, level_next);
            if self.min_freq == current {
                self.min_freq = level_next.unwrap_or(0);
            }
        }

        if !self.buckets.contains_key(&next_freq) {
            let prev = if emptied { level_prev } else { Some(current) };
            self.insert_bucket(next_freq, prev, level_next);
        }

        self.entries.get_mut(id).expect("lfu entry missing").freq = next_freq;
        self.list_push_front(next_freq, id);
        if self.min_freq == 0 || next_freq < self.min_freq {
            self.min_freq = next_freq;
        }

        next_freq
    }

    /// Removes the eviction candidate: tail of the `min_freq` bucket.
    fn evict_min(&mut self) -> Option<(K, V)> {
        if self.min_freq == 0 {
            return None;
        }
        let freq = self.min_freq;
        let bucket = self.buckets.get(&freq).expect("lfu min bucket missing");
        let id = bucket.tail.expect("lfu min bucket empty");
        let (level_prev, level_next) = (bucket.prev, bucket.next);

        self.list_remove(freq, id);
        if self.bucket_is_empty(freq) {
            self.remove_bucket(freq, level_prev, level_next);
            self.min_freq = level_next.unwrap_or(0);
        }

        let entry = self.entries.remove(id).expect("lfu entry missing");
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Walks the whole structure and reports the first violated invariant.
    ///
    /// O(n); intended for tests and debugging, not for the hot path. The
    /// operations themselves treat a detected inconsistency as fatal and
    /// panic instead of returning this error.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but arena holds {} entries",
                self.index.len(),
                self.entries.len()
            )));
        }
        match self.capacity {
            Capacity::Disabled => {
                if !self.entries.is_empty() {
                    return Err(InvariantError::new("disabled cache holds entries"));
                }
            },
            Capacity::Bounded(limit) => {
                if self.entries.len() > limit.get() {
                    return Err(InvariantError::new(format!(
                        "size {} exceeds capacity {}",
                        self.entries.len(),
                        limit
                    )));
                }
            },
        }

        if self.entries.is_empty() {
            if self.min_freq != 0 {
                return Err(InvariantError::new("empty cache has nonzero min_freq"));
            }
            if !self.buckets.is_empty() {
                return Err(InvariantError::new("empty cache holds buckets"));
            }
            return Ok(());
        }

        if self.min_freq == 0 {
            return Err(InvariantError::new("populated cache has min_freq 0"));
        }
        let smallest = self.buckets.keys().copied().min();
        if smallest != Some(self.min_freq) {
            return Err(InvariantError::new(format!(
                "min_freq {} but smallest occupied level is {:?}",
                self.min_freq, smallest
            )));
        }

        let mut seen = 0usize;
        for (&freq, bucket) in &self.buckets {
            if freq == 0 {
                return Err(InvariantError::new("bucket at frequency 0"));
            }
            if bucket.head.is_none() || bucket.tail.is_none() {
                return Err(InvariantError::new(format!(
                    "bucket {freq} empty but indexed"
                )));
            }
            match bucket.prev {
                Some(prev) => {
                    if prev >= freq {
                        return Err(InvariantError::new(format!(
                            "bucket {freq} has non-ascending lower level {prev}"
                        )));
                    }
                    let prev_bucket = self.buckets.get(&prev).ok_or_else(|| {
                        InvariantError::new(format!("bucket {freq} links to absent level {prev}"))
                    })?;
                    if prev_bucket.next != Some(freq) {
                        return Err(InvariantError::new(format!(
                            "level links between {prev} and {freq} disagree"
                        )));
                    }
                },
                None => {
                    if freq != self.min_freq {
                        return Err(InvariantError::new(format!(
                            "bucket {freq} has no lower level but is not the minimum"
                        )));
                    }
                },
            }
            if let Some(next) = bucket.next {
                if next <= freq {
                    return Err(InvariantError::new(format!(
                        "bucket {freq} has non-ascending upper level {next}"
                    )));
                }
                if !self.buckets.contains_key(&next) {
                    return Err(InvariantError::new(format!(
                        "bucket {freq} links to absent level {next}"
                    )));
                }
            }

            let mut current = bucket.head;
            let mut last = None;
            while let Some(id) = current {
                let entry = self.entries.get(id).ok_or_else(|| {
                    InvariantError::new(format!("bucket {freq} links to vacant slot"))
                })?;
                if entry.freq != freq {
                    return Err(InvariantError::new(format!(
                        "entry at frequency {} linked into bucket {freq}",
                        entry.freq
                    )));
                }
                if entry.prev != last {
                    return Err(InvariantError::new(format!(
                        "back-link mismatch in bucket {freq}"
                    )));
                }
                if self.index.get(&entry.key) != Some(&id) {
                    return Err(InvariantError::new(
                        "entry not indexed under its own key",
                    ));
                }
                last = current;
                current = entry.next;
                seen += 1;
                if seen > self.entries.len() {
                    return Err(InvariantError::new(format!("cycle in bucket {freq}")));
                }
            }
            if bucket.tail != last {
                return Err(InvariantError::new(format!(
                    "bucket {freq} tail does not terminate its list"
                )));
            }
        }
        if seen != self.entries.len() {
            return Err(InvariantError::new(format!(
                "{} entries reachable from buckets, {} in arena",
                seen,
                self.entries.len()
            )));
        }
        Ok(())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let entry = self.entries.get_mut(id).expect("lfu entry missing");
            let previous = mem::replace(&mut entry.value, value);
            // Overwriting counts as an access; frequency is never reset.
            self.promote(id);
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

            if let Some((_key, _value)) = self.evict_min() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.entries.insert(Entry {
            prev: None,
            next: None,
            freq: 1,
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        if !self.buckets.contains_key(&1) {
            let next = if self.min_freq == 0 {
                None
            } else {
                Some(self.min_freq)
            };
            self.insert_bucket(1, None, next);
        }
        self.list_push_front(1, id);
        // A fresh entry is always the new global minimum.
        self.min_freq = 1;

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

        self.promote(id);

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
        self.buckets.clear();
        self.min_freq = 0;
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let freq = self.entries.get(id).expect("lfu entry missing").freq;
        let (level_prev, level_next) = {
            let bucket = self.buckets.get(&freq).expect("lfu bucket missing");
            (bucket.prev, bucket.next)
        };

        self.list_remove(freq, id);
        if self.bucket_is_empty(freq) {
            self.remove_bucket(freq, level_prev, level_next);
            if self.min_freq == freq {
                // Successor level, not freq+1: arbitrary removal may leave
                // a gap the relocation paths never produce.
                self.min_freq = level_next.unwrap_or(0);
            }
        }

        self.entries.remove(id).map(|entry| entry.value)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let result = self.evict_min();

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_pop_lfu_found();
        }

        result
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lfu_call();

        let id = self
            .buckets
            .get(&self.min_freq)
            .and_then(|bucket| bucket.tail)?;
        let entry = self.entries.get(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lfu_found();

        Some((&entry.key, &entry.value))
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_frequency_call();

        let result = self
            .index
            .get(key)
            .and_then(|&id| self.entries.get(id))
            .map(|entry| entry.freq);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_frequency_found();
        }

        result
    }
}
