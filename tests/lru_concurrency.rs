// ==============================================
// CONCURRENT LRU CACHE TESTS (integration)
// ==============================================
//
// The wrapper holds the index, recency list, and arena behind one lock, so
// no interleaving of put/get/contains may tear the combined state. These
// require multi-threaded execution and cannot live inline.

#![cfg(feature = "concurrency")]

use std::sync::{Arc, Barrier};
use std::thread;

use lrukit::policy::lru::ConcurrentLruCache;

#[test]
fn parallel_puts_respect_capacity() {
    let cache: Arc<ConcurrentLruCache<u64, u64>> = Arc::new(ConcurrentLruCache::new(32).unwrap());
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads as u64)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..500u64 {
                    cache.put(t * 10_000 + i, i);
                    assert!(cache.len() <= cache.capacity());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 32);
}

#[test]
fn mixed_readers_and_writers_do_not_corrupt_entries() {
    let iterations = 200;

    for _ in 0..iterations {
        let cache: Arc<ConcurrentLruCache<u64, String>> =
            Arc::new(ConcurrentLruCache::new(8).unwrap());
        cache.put(1, "one".to_string());
        cache.put(2, "two".to_string());

        let barrier = Arc::new(Barrier::new(3));

        let cache_a = Arc::clone(&cache);
        let barrier_a = Arc::clone(&barrier);
        let t_a = thread::spawn(move || {
            barrier_a.wait();
            for i in 10..20u64 {
                cache_a.put(i, format!("value-{i}"));
            }
        });

        let cache_b = Arc::clone(&cache);
        let barrier_b = Arc::clone(&barrier);
        let t_b = thread::spawn(move || {
            barrier_b.wait();
            for _ in 0..20 {
                let _ = cache_b.get(&1);
                let _ = cache_b.contains(&2);
            }
        });

        let cache_c = Arc::clone(&cache);
        let barrier_c = Arc::clone(&barrier);
        let t_c = thread::spawn(move || {
            barrier_c.wait();
            let _ = cache_c.remove(&2);
        });

        t_a.join().unwrap();
        t_b.join().unwrap();
        t_c.join().unwrap();

        // Any surviving entry must still carry its own value.
        if let Some(value) = cache.peek(&1) {
            assert_eq!(*value, "one", "key 1 was corrupted by concurrent access");
        }
        for i in 10..20u64 {
            if let Some(value) = cache.peek(&i) {
                assert_eq!(
                    *value,
                    format!("value-{i}"),
                    "key {i} was corrupted by concurrent access"
                );
            }
        }
        assert!(cache.len() <= cache.capacity());
    }
}

#[test]
fn handles_shared_across_threads_see_one_cache() {
    let cache: ConcurrentLruCache<u64, u64> = ConcurrentLruCache::new(16).unwrap();

    let writer = {
        let cache = cache.clone();
        thread::spawn(move || {
            for i in 0..16u64 {
                cache.put(i, i * 2);
            }
        })
    };
    writer.join().unwrap();

    assert_eq!(cache.len(), 16);
    for i in 0..16u64 {
        assert_eq!(cache.get(&i).as_deref(), Some(&(i * 2)));
    }
}

#[test]
fn values_held_across_eviction_stay_valid() {
    let cache: ConcurrentLruCache<u64, Vec<u8>> = ConcurrentLruCache::new(1).unwrap();
    cache.put(1, vec![1, 2, 3]);
    let held = cache.get(&1).unwrap();

    // Evict key 1 from another handle while the value is still held.
    let other = cache.clone();
    let evictor = thread::spawn(move || {
        other.put(2, vec![4, 5, 6]);
    });
    evictor.join().unwrap();

    assert!(!cache.contains(&1));
    assert_eq!(*held, vec![1, 2, 3]);
}
