//! # Least Recently Used (LRU) Cache
//!
//! Fixed-capacity cache with O(1) amortized `get`/`put` and LRU eviction,
//! composed from the arena-indexed structures in [`crate::ds`].
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                         LruCache<K, V>                           │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  KeyIndex<K>  (FxHashMap: key → SlotId)                    │ │
//!   │   │                                                            │ │
//!   │   │  ┌─────────┬───────────────────────────────────────┐       │ │
//!   │   │  │   Key   │  SlotId                               │       │ │
//!   │   │  ├─────────┼───────────────────────────────────────┤       │ │
//!   │   │  │  k_1    │  ─────────────────────────────────┐   │       │ │
//!   │   │  │  k_2    │  ───────────────────────────┐     │   │       │ │
//!   │   │  └─────────┴──────────────────────────── ┼─────┼───┘       │ │
//!   │   └──────────────────────────────────────────┼─────┼───────────┘ │
//!   │                                              ▼     ▼             │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  SlotArena<Entry<K, V>>  (fixed slots, keys + values)      │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────────┐ │
//!   │   │  RecencyList  (sentinel-ringed links over the same slots)  │ │
//!   │   │                                                            │ │
//!   │   │  front ─► [slot] ◄──► [slot] ◄──► [slot] ◄─ back           │ │
//!   │   │           (MRU)                   (LRU)                    │ │
//!   │   └────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Flow
//!
//! ```text
//!   put(new key, cache full)
//!   ═══════════════════════════════════════════════════════════════════
//!   1. pop_back() the LRU slot from the recency list
//!   2. free that slot in the arena, drop its key from the index
//!   3. allocate a fresh slot, index it, push_front()
//!   4. return the evicted (key, value) pair to the caller
//!
//!   get(existing key)
//!   ═══════════════════════════════════════════════════════════════════
//!   1. index lookup: O(1)
//!   2. move_to_front(): O(1)  ← reading refreshes recency
//!
//!   contains(key)
//!   ═══════════════════════════════════════════════════════════════════
//!   index probe only; recency order is never touched.
//! ```
//!
//! ## Key Components
//!
//! | Component              | Description                                   |
//! |------------------------|-----------------------------------------------|
//! | `LruCache<K, V>`       | Single-threaded core: index + list + arena    |
//! | `ConcurrentLruCache`   | Thread-safe wrapper with `parking_lot::RwLock`|
//! | `Entry<K, V>`          | Arena entry storing key + value               |
//! | `RecencyList`          | Recency order over the arena's slot indices   |
//! | `KeyIndex<K>`          | FxHashMap from key to slot                    |
//!
//! ## Performance Characteristics
//!
//! | Operation        | Time       | Notes                                 |
//! |------------------|------------|---------------------------------------|
//! | `put`            | O(1) avg   | Index update + list splice            |
//! | `get`            | O(1) avg   | Index lookup + list move              |
//! | `contains`/`peek`| O(1) avg   | Index lookup only                     |
//! | `pop_lru`        | O(1)       | Back-sentinel unlink                  |
//! | `recency_rank`   | O(n)       | Diagnostic scan                       |
//!
//! ## Design Rationale
//!
//! - **Arena + indices over pointers**: `prev`/`next` are plain `usize`
//!   indices into pre-allocated storage, so the cyclic structure needs no
//!   raw pointers, no `Rc<RefCell<..>>`, and no `unsafe`.
//! - **Sentinel ring**: the recency list keeps two permanent sentinel rows,
//!   so every splice is the same four-pointer rewire.
//! - **Fallible construction**: a zero-capacity cache can hold nothing, so
//!   `new(0)` returns [`ConfigError::InvalidCapacity`] instead of producing
//!   an instance that silently rejects every insert.
//! - **Eviction surfaced to callers**: `put` returns the evicted pair so
//!   write-back layers can react; the cache itself performs no write-back.
//!
//! ## Thread Safety
//!
//! - `LruCache`: **NOT thread-safe**, single-threaded only. `get` takes
//!   `&mut self` because touching an entry rewires the recency list.
//! - `ConcurrentLruCache`: one `RwLock` guards the index, list, and arena as
//!   a unit. Per-structure locks would allow a torn state (list says a slot
//!   is front, arena says it is empty), so the whole core sits behind a
//!   single lock; `get` takes the write lock because it reorders.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<u32, String> = LruCache::new(2).unwrap();
//!
//! assert_eq!(cache.put(1, "alpha".to_string()), None);
//! assert_eq!(cache.put(2, "beta".to_string()), None);
//!
//! // Reading key 1 refreshes it, so key 2 becomes the eviction victim.
//! assert_eq!(cache.get(&1).map(String::as_str), Some("alpha"));
//! let evicted = cache.put(3, "gamma".to_string());
//! assert_eq!(evicted, Some((2, "beta".to_string())));
//! assert!(!cache.contains(&2));
//! ```

use std::fmt;
use std::hash::Hash;
use std::mem;

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;

use crate::ds::{KeyIndex, RecencyList, SlotArena, SlotId};
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// One live key/value pair, stored in the arena at a stable slot.
///
/// Recency links for the slot live in the `RecencyList`'s link table under
/// the same index, so the entry itself carries no list state.
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache core.
///
/// Composes a [`KeyIndex`] for existence, a [`RecencyList`] for eviction
/// order, and a [`SlotArena`] for entry storage. The unifying invariant is
/// `len == |index| == occupied slots == real list nodes`, and `len` never
/// exceeds the capacity fixed at construction.
///
/// Keys are held once in the arena entry and once in the index, hence
/// `K: Clone`; values are owned solely by the arena and borrowed out of
/// `get`/`peek`.
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: KeyIndex<K>,
    order: RecencyList,
    arena: SlotArena<Entry<K, V>>,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache that holds at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when `capacity` is zero.
    /// Capacity is immutable afterwards; there is no resize operation.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    ///
    /// assert!(LruCache::<u32, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        Ok(Self {
            index: KeyIndex::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            arena: SlotArena::with_capacity(capacity),
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Inserts or updates a key, returning the entry evicted to make room.
    ///
    /// Three cases:
    /// 1. `key` exists: its value is overwritten in place and the entry is
    ///    refreshed to MRU. Size is unchanged; returns `None`.
    /// 2. `key` is new and the cache has room: plain insert at MRU; returns
    ///    `None`.
    /// 3. `key` is new and the cache is full: the LRU entry is evicted first
    ///    and returned as `Some((key, value))`.
    ///
    /// `put` cannot fail: eviction absorbs the full-cache case.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(1).unwrap();
    /// assert_eq!(cache.put(1, "one"), None);
    /// assert_eq!(cache.put(1, "ONE"), None); // overwrite, no eviction
    /// assert_eq!(cache.put(2, "two"), Some((1, "ONE")));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(id) = self.index.lookup(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            if let Some(entry) = self.arena.get_mut(id) {
                entry.value = value;
            }
            self.order.move_to_front(id);

            #[cfg(debug_assertions)]
            self.debug_validate();

            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let evicted = if self.len() == self.capacity() {
            self.evict_lru()
        } else {
            None
        };

        let id = self
            .arena
            .insert(Entry {
                key: key.clone(),
                value,
            })
            .expect("arena has a free slot after eviction");
        self.index.insert(key, id);
        self.order.push_front(id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        evicted
    }

    /// Gets a reference to a value, refreshing its recency.
    ///
    /// A miss is an ordinary `None`, not an error. On a hit the entry moves
    /// to the MRU position; this side effect is what makes the policy LRU.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    /// cache.put(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&2), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.lookup(key) {
            Some(id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            }
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);
        self.arena.get(id).map(|entry| &entry.value)
    }

    /// Gets a value without refreshing its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = self.index.lookup(key)?;
        self.arena.get(id).map(|entry| &entry.value)
    }

    /// Checks existence with **no** recency side effect.
    ///
    /// Unlike [`get`](Self::get), a `contains` probe never shields an entry
    /// from eviction.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    ///
    /// // Probing key 1 does not refresh it; it is still the LRU victim.
    /// assert!(cache.contains(&1));
    /// cache.put(3, "three");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Removes an entry by key, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.order.remove(id);
        let entry = self.arena.remove(id)?;

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.pop_lru(), Some((2, "two")));
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let popped = self.take_lru()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some(popped)
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        let id = self.order.back_id()?;
        let entry = self.arena.get(id)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// Moves an entry to the MRU position without returning its value.
    ///
    /// Returns `true` if the key was found.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        if let Some(id) = self.index.lookup(key) {
            self.order.move_to_front(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_touch_found();

            true
        } else {
            false
        }
    }

    /// Returns the position of `key` in recency order (0 = MRU). O(n).
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let target = self.index.lookup(key)?;
        for (rank, id) in self.order.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Resets to the empty state without releasing the fixed storage.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.order.clear();
        self.arena.clear();
    }

    /// Returns entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order
            .iter_ids()
            .filter_map(move |id| self.arena.get(id).map(|entry| (&entry.key, &entry.value)))
    }

    /// Unlinks the LRU slot from all three structures.
    fn take_lru(&mut self) -> Option<(K, V)> {
        let id = self.order.pop_back()?;
        let entry = self.arena.remove(id)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let evicted = self.take_lru();

        #[cfg(feature = "metrics")]
        if evicted.is_some() {
            self.metrics.record_evicted_entry();
        }

        evicted
    }

    /// Verifies the invariant tying the three structures together:
    /// `len == |index| == occupied slots == real list nodes <= capacity`,
    /// with the list visiting every live slot exactly once and the index
    /// mapping each listed key back to its own slot.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.arena.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but arena holds {} entries",
                self.index.len(),
                self.arena.len()
            )));
        }
        if self.order.len() != self.arena.len() {
            return Err(InvariantError::new(format!(
                "recency list has {} nodes but arena holds {} entries",
                self.order.len(),
                self.arena.len()
            )));
        }
        if self.len() > self.capacity() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len(),
                self.capacity()
            )));
        }

        for (key, id) in self.index.iter() {
            match self.arena.get(id) {
                Some(entry) if entry.key == *key => {}
                _ => {
                    return Err(InvariantError::new(
                        "index maps a key to a slot that does not hold it",
                    ));
                }
            }
        }

        let mut visited = 0usize;
        for id in self.order.iter_ids() {
            let entry = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new("recency list references an empty slot"))?;
            match self.index.lookup(&entry.key) {
                Some(mapped) if mapped == id => {}
                _ => {
                    return Err(InvariantError::new(
                        "index does not map a listed key back to its slot",
                    ));
                }
            }
            visited += 1;
            if visited > self.order.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
        }
        if visited != self.order.len() {
            return Err(InvariantError::new(format!(
                "recency traversal visited {} slots, expected {}",
                visited,
                self.order.len()
            )));
        }

        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.order.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("lru invariant violated: {err}");
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts a key-value pair, returning the *previous value* if the key
    /// existed (the trait contract; use [`LruCache::put`] for the evicted
    /// pair instead).
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(id) = self.index.lookup(&key) {
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_insert_call();
                self.metrics.record_insert_update();
            }

            self.order.move_to_front(id);
            let entry = self.arena.get_mut(id)?;
            return Some(mem::replace(&mut entry.value, value));
        }

        self.put(key, value);
        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.len(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

// Send + Sync analysis:
// - LruCache is Send if K and V are Send (plain owned storage, no pointers)
// - LruCache is NOT shared mutably across threads; ConcurrentLruCache
//   serializes access behind a single RwLock
// This is enforced by Rust's auto traits.

/// Thread-safe LRU cache handle.
///
/// The index, recency list, and arena form one atomic unit behind a single
/// `parking_lot::RwLock`: `get` takes the write lock because touching an
/// entry rewires the recency list, while `peek`/`contains`/`len` only need
/// the read lock. Values are stored as `Arc<V>` so lookups hand out clones
/// that stay valid after eviction.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100).unwrap();
/// cache.put(1, "value".to_string());
///
/// let value = cache.get(&1).unwrap();
/// assert_eq!(*value, "value");
/// ```
#[cfg(feature = "concurrency")]
#[derive(Clone)]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<RwLock<LruCache<K, Arc<V>>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a thread-safe cache that holds at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(ConcurrentLruCache {
            inner: Arc::new(RwLock::new(LruCache::new(capacity)?)),
        })
    }

    /// Inserts or updates a key, wrapping the value in `Arc<V>` internally.
    ///
    /// Returns the entry evicted to make room, if any.
    pub fn put(&self, key: K, value: V) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.put(key, Arc::new(value))
    }

    /// Inserts a pre-wrapped `Arc<V>` directly.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::ConcurrentLruCache;
    /// use std::sync::Arc;
    ///
    /// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(10).unwrap();
    /// let shared = Arc::new("shared".to_string());
    /// cache.put_arc(1, Arc::clone(&shared));
    ///
    /// assert!(Arc::ptr_eq(&shared, &cache.get(&1).unwrap()));
    /// ```
    pub fn put_arc(&self, key: K, value: Arc<V>) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.put(key, value)
    }

    /// Gets a value by key, refreshing its recency.
    ///
    /// Takes the write lock because the recency list is rewired.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.get(key).map(Arc::clone)
    }

    /// Gets a value without refreshing recency. Read lock only.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let cache = self.inner.read();
        cache.peek(key).map(Arc::clone)
    }

    /// Checks existence with no recency side effect. Read lock only.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Removes an entry and returns its value.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Marks an entry as recently used without retrieving it.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.write();
        cache.touch(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(K, Arc<V>)> {
        let cache = self.inner.read();
        cache
            .peek_lru()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Resets to the empty state without releasing the fixed storage.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}
