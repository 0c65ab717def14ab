// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Behavioral consistency both policies must share: the capacity-0
// (disabled) contract, capacity enforcement, and update semantics. These
// span multiple modules and belong here rather than in any single source
// file.

use freqcache::builder::{CacheBuilder, CachePolicy};
use freqcache::policy::lfu::LfuCache;
use freqcache::policy::lru::LruCache;
use freqcache::traits::CoreCache;

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// Capacity 0 means disabled, not "coerced to 1": the cache reports
// capacity 0, rejects every insert silently, and always misses.

mod lfu_zero_capacity {
    use super::*;

    #[test]
    fn capacity_zero_is_honored() {
        let cache: LfuCache<&str, i32> = LfuCache::new(0);
        assert_eq!(
            cache.capacity(),
            0,
            "LfuCache::new(0) should honor capacity=0, not coerce to {}",
            cache.capacity()
        );
    }

    #[test]
    fn capacity_zero_rejects_inserts() {
        let mut cache: LfuCache<&str, i32> = LfuCache::new(0);
        cache.insert("key", 42);
        assert_eq!(cache.len(), 0, "LfuCache with capacity=0 should reject inserts");
        assert_eq!(cache.get(&"key"), None);
    }
}

mod lru_zero_capacity {
    use super::*;

    #[test]
    fn capacity_zero_is_honored() {
        let cache: LruCache<&str, i32> = LruCache::new(0);
        assert_eq!(
            cache.capacity(),
            0,
            "LruCache::new(0) should honor capacity=0, not coerce to {}",
            cache.capacity()
        );
    }

    #[test]
    fn capacity_zero_rejects_inserts() {
        let mut cache: LruCache<&str, i32> = LruCache::new(0);
        cache.insert("key", 42);
        assert_eq!(cache.len(), 0, "LruCache with capacity=0 should reject inserts");
        assert_eq!(cache.get(&"key"), None);
    }
}

// ==============================================
// Shared Contract
// ==============================================

mod shared_contract {
    use super::*;

    #[test]
    fn updates_never_change_len() {
        for policy in [CachePolicy::Lfu, CachePolicy::Lru] {
            let mut cache = CacheBuilder::new(2).build::<u64, u64>(policy);
            cache.insert(1, 1);
            cache.insert(2, 2);
            for round in 0..20 {
                cache.insert(1, round);
                assert_eq!(cache.len(), 2, "{policy:?}");
            }
        }
    }

    #[test]
    fn len_never_exceeds_capacity() {
        for policy in [CachePolicy::Lfu, CachePolicy::Lru] {
            let mut cache = CacheBuilder::new(3).build::<u64, u64>(policy);
            for i in 0..50 {
                cache.insert(i, i);
                assert!(cache.len() <= 3, "{policy:?}");
            }
        }
    }

    #[test]
    fn insert_then_get_hits_both_policies() {
        for policy in [CachePolicy::Lfu, CachePolicy::Lru] {
            let mut cache = CacheBuilder::new(4).build::<u64, u64>(policy);
            for i in 0..100 {
                cache.insert(i, i * 10);
                assert_eq!(cache.get(&i), Some(&(i * 10)), "{policy:?}");
            }
        }
    }
}
