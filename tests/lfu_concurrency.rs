// ==============================================
// LFU CONCURRENCY TESTS (integration)
// ==============================================
//
// Exercises the mutex wrapper from many threads: every operation holds the
// per-cache lock for its full duration, so the final state must always be
// consistent with some serial execution of the same calls.
#![cfg(feature = "concurrency")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use freqcache::sync::ConcurrentLfuCache;

#[test]
fn concurrent_inserts_land_exactly_once() {
    let num_threads = 8;
    let inserts_per_thread = 200;
    let capacity = num_threads * inserts_per_thread;
    let cache: Arc<ConcurrentLfuCache<u64, u64>> = Arc::new(ConcurrentLfuCache::new(capacity));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..inserts_per_thread {
                    let key = (thread_id * inserts_per_thread + i) as u64;
                    cache.insert(key, key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), num_threads * inserts_per_thread);
    cache.check_invariants().unwrap();
}

#[test]
fn concurrent_reads_all_hit() {
    let capacity = 512;
    let cache: Arc<ConcurrentLfuCache<u64, u64>> = Arc::new(ConcurrentLfuCache::new(capacity));

    for key in 0..capacity as u64 {
        cache.insert(key, key * 2);
    }

    let reader_threads = 16;
    let reads_per_thread = 800;
    let hits = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..reader_threads)
        .map(|_| {
            let cache = cache.clone();
            let hits = hits.clone();
            thread::spawn(move || {
                for i in 0..reads_per_thread {
                    let key = (i % capacity) as u64;
                    if cache.get(&key) == Some(key * 2) {
                        hits.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // No evictions can occur below capacity, so every read hits.
    assert_eq!(hits.load(Ordering::Relaxed), reader_threads * reads_per_thread);
    assert_eq!(cache.len(), capacity);
    cache.check_invariants().unwrap();
}

#[test]
fn mixed_workload_stays_within_capacity() {
    let capacity = 128;
    let cache: Arc<ConcurrentLfuCache<u64, String>> = Arc::new(ConcurrentLfuCache::new(capacity));

    let num_threads = 8;
    let ops_per_thread = 1_000;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = ((thread_id * ops_per_thread + i) % (capacity * 2)) as u64;
                    match i % 5 {
                        0 | 1 => {
                            cache.insert(key, format!("v{key}"));
                        },
                        2 | 3 => {
                            if let Some(value) = cache.get(&key) {
                                assert_eq!(value, format!("v{key}"));
                            }
                        },
                        _ => {
                            cache.remove(&key);
                        },
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= capacity);
    cache.check_invariants().unwrap();
}

#[test]
fn frequency_accumulates_across_threads() {
    let cache: Arc<ConcurrentLfuCache<&str, u32>> = Arc::new(ConcurrentLfuCache::new(4));
    cache.insert("shared", 7);

    let num_threads = 4;
    let gets_per_thread = 50;

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let cache = cache.clone();
            thread::spawn(move || {
                for _ in 0..gets_per_thread {
                    assert_eq!(cache.get(&"shared"), Some(7));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 1 from the insert plus one per get, regardless of interleaving.
    let expected = 1 + (num_threads * gets_per_thread) as u64;
    assert_eq!(cache.frequency(&"shared"), Some(expected));
    cache.check_invariants().unwrap();
}

#[test]
fn contended_insert_get_cycles_preserve_consistency() {
    let capacity = 64;
    let cache: Arc<ConcurrentLfuCache<u64, u64>> = Arc::new(ConcurrentLfuCache::new(capacity));

    let num_threads = 16;
    let iterations = 500;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..iterations {
                    let key = ((thread_id * iterations + i) % (capacity * 2)) as u64;
                    cache.insert(key, key);
                    if let Some(value) = cache.get(&key) {
                        assert_eq!(value, key);
                    }
                    if i % 3 == 0 {
                        cache.remove(&key);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= capacity);
    cache.check_invariants().unwrap();
}
