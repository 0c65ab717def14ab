use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::{LfuMetricsSnapshot, LruMetricsSnapshot};

/// Operation counters for [`LfuCache`](crate::policy::lfu::LfuCache).
///
/// Mutating operations record through `&mut self`; read-path operations
/// (`peek_lfu`, `frequency`) record through [`MetricsCell`]s.
#[derive(Debug, Default)]
pub struct LfuMetrics {
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lfu_calls: u64,
    pub pop_lfu_found: u64,
    pub clear_calls: u64,
    pub peek_lfu_calls: MetricsCell,
    pub peek_lfu_found: MetricsCell,
    pub frequency_calls: MetricsCell,
    pub frequency_found: MetricsCell,
}

impl LfuMetrics {
    pub fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    pub fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    pub fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    pub fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    pub fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    pub fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    pub fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    pub fn record_pop_lfu_call(&mut self) {
        self.pop_lfu_calls += 1;
    }

    pub fn record_pop_lfu_found(&mut self) {
        self.pop_lfu_found += 1;
    }

    pub fn record_clear(&mut self) {
        self.clear_calls += 1;
    }

    pub fn record_peek_lfu_call(&self) {
        self.peek_lfu_calls.incr();
    }

    pub fn record_peek_lfu_found(&self) {
        self.peek_lfu_found.incr();
    }

    pub fn record_frequency_call(&self) {
        self.frequency_calls.incr();
    }

    pub fn record_frequency_found(&self) {
        self.frequency_found.incr();
    }

    /// Captures the counters together with the given gauges.
    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_updates: self.insert_updates,
            insert_new: self.insert_new,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            pop_lfu_calls: self.pop_lfu_calls,
            pop_lfu_found: self.pop_lfu_found,
            clear_calls: self.clear_calls,
            peek_lfu_calls: self.peek_lfu_calls.get(),
            peek_lfu_found: self.peek_lfu_found.get(),
            frequency_calls: self.frequency_calls.get(),
            frequency_found: self.frequency_found.get(),
            cache_len,
            capacity,
        }
    }
}

/// Operation counters for [`LruCache`](crate::policy::lru::LruCache).
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub clear_calls: u64,
    pub peek_lru_calls: MetricsCell,
    pub peek_lru_found: MetricsCell,
}

impl LruMetrics {
    pub fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    pub fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    pub fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    pub fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    pub fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    pub fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    pub fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    pub fn record_pop_lru_call(&mut self) {
        self.pop_lru_calls += 1;
    }

    pub fn record_pop_lru_found(&mut self) {
        self.pop_lru_found += 1;
    }

    pub fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    pub fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }

    pub fn record_clear(&mut self) {
        self.clear_calls += 1;
    }

    pub fn record_peek_lru_call(&self) {
        self.peek_lru_calls.incr();
    }

    pub fn record_peek_lru_found(&self) {
        self.peek_lru_found.incr();
    }

    /// Captures the counters together with the given gauges.
    pub fn snapshot(&self, cache_len: usize, capacity: usize) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            insert_calls: self.insert_calls,
            insert_updates: self.insert_updates,
            insert_new: self.insert_new,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            pop_lru_calls: self.pop_lru_calls,
            pop_lru_found: self.pop_lru_found,
            touch_calls: self.touch_calls,
            touch_found: self.touch_found,
            clear_calls: self.clear_calls,
            peek_lru_calls: self.peek_lru_calls.get(),
            peek_lru_found: self.peek_lru_found.get(),
            cache_len,
            capacity,
        }
    }
}
