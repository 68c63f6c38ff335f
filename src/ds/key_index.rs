//! Key to slot lookup, a bijection onto the occupied arena slots.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::slot_arena::SlotId;

/// Hash index from cache key to the arena slot holding its entry.
///
/// Pure lookup structure: no recency or storage logic lives here.
#[derive(Debug)]
pub struct KeyIndex<K> {
    map: FxHashMap<K, SlotId>,
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn lookup(&self, key: &K) -> Option<SlotId> {
        self.map.get(key).copied()
    }

    /// Maps `key` to `id`, returning the displaced slot if the key was
    /// already present (callers check `lookup` first, so this is `None` in
    /// steady state).
    pub fn insert(&mut self, key: K, id: SlotId) -> Option<SlotId> {
        self.map.insert(key, id)
    }

    pub fn remove(&mut self, key: &K) -> Option<SlotId> {
        self.map.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, SlotId)> {
        self.map.iter().map(|(key, &id)| (key, id))
    }
}
