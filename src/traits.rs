//! # Cache Trait Hierarchy
//!
//! Defines the layered interface the LRU policy implements, separating the
//! operations every cache supports from the ones that only make sense for a
//! recency-ordered cache.
//!
//! ## Architecture
//!
//! ```text
//!        ┌─────────────────────────────────────────┐
//!        │            CoreCache<K, V>              │
//!        │                                         │
//!        │  insert(&mut, K, V) → Option<V>         │
//!        │  get(&mut, &K) → Option<&V>             │
//!        │  contains(&, &K) → bool                 │
//!        │  len / is_empty / capacity / clear      │
//!        └──────────────────┬──────────────────────┘
//!                           │
//!                           ▼
//!        ┌─────────────────────────────────────────┐
//!        │           MutableCache<K, V>            │
//!        │                                         │
//!        │  remove(&K) → Option<V>                 │
//!        │  remove_batch(&[K])                     │
//!        └──────────────────┬──────────────────────┘
//!                           │
//!                           ▼
//!        ┌─────────────────────────────────────────┐
//!        │           LruCacheTrait<K, V>           │
//!        │                                         │
//!        │  pop_lru() → (K, V)                     │
//!        │  peek_lru() → (&K, &V)                  │
//!        │  touch(&K) → bool                       │
//!        │  recency_rank(&K) → usize               │
//!        └─────────────────────────────────────────┘
//! ```
//!
//! [`ConcurrentCache`] is a `Send + Sync` marker identifying thread-safe
//! wrappers; individual cache cores are single-threaded by design.

/// Core cache operations that any cache supports.
///
/// # Example
///
/// ```
/// use lrukit::traits::CoreCache;
/// use lrukit::policy::lru::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity and the key is new, an entry is evicted
    /// according to the cache's eviction policy before the insert.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update internal access state depending on the eviction policy.
    /// Use [`contains`](Self::contains) to check existence without affecting
    /// eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache can hold.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use lrukit::traits::{CoreCache, MutableCache};
/// use lrukit::policy::lru::LruCache;
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(10).unwrap();
/// cache.insert(1, "one".to_string());
/// invalidate_keys(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes an entry by key, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes a batch of keys, returning each removal result in order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency-ordered caches.
///
/// # Example
///
/// ```
/// use lrukit::traits::{CoreCache, LruCacheTrait};
/// use lrukit::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(3).unwrap();
/// cache.insert(1, "one");
/// cache.insert(2, "two");
///
/// // Mark key 1 as recently used without retrieving it.
/// assert!(cache.touch(&1));
/// assert_eq!(cache.pop_lru(), Some((2, "two")));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without removing it or
    /// refreshing its recency.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Moves an entry to the most recently used position without returning
    /// its value. Returns `true` if the key was found.
    fn touch(&mut self, key: &K) -> bool;

    /// Returns the position of `key` in recency order (0 = MRU). O(n) scan;
    /// intended for diagnostics and tests.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker trait for thread-safe cache handles.
///
/// Cache cores require `&mut self` and are not `Sync`; wrappers that
/// serialize access behind a lock implement this marker.
pub trait ConcurrentCache: Send + Sync {}
