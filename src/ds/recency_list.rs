//! Recency ordering over arena slot indices, bracketed by two sentinels.
//!
//! Stores `prev`/`next` links in a flat table indexed by the same slot indices
//! the arena hands out. Two extra rows past the data range are permanent
//! sentinels, so inserting at the head of an empty list, unlinking the only
//! node, and popping the tail all run the same four-pointer rewire with no
//! null branching.
//!
//! ## Architecture
//!
//! ```text
//!   links (Vec<Link>, capacity + 2 rows)
//!   ┌───────┬──────────────────────────────┐
//!   │ row   │ Link { prev, next }          │
//!   ├───────┼──────────────────────────────┤
//!   │ 0..cap│ data rows, shared with arena │
//!   │ cap   │ front sentinel (MRU side)    │
//!   │ cap+1 │ back sentinel (LRU side)     │
//!   └───────┴──────────────────────────────┘
//!
//!   front ─► [id_2] ◄──► [id_0] ◄──► [id_5] ◄─ back
//!            (MRU)                   (LRU)
//! ```
//!
//! ## Operations
//! - `push_front(id)`: link behind the front sentinel
//! - `move_to_front(id)`: unlink + relink at the front
//! - `pop_back()`: unlink and return the row before the back sentinel
//!
//! All operations are O(1); the link table never scans.
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::SlotId;

/// Tag for rows not currently linked into the ring.
const UNLINKED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Link {
    prev: usize,
    next: usize,
}

/// Doubly linked recency order over occupied arena slots, front = most
/// recently used, back = least recently used.
#[derive(Debug)]
pub struct RecencyList {
    links: Vec<Link>,
    front: usize,
    back: usize,
    len: usize,
}

impl RecencyList {
    /// Creates an empty list able to order `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let front = capacity;
        let back = capacity + 1;
        let mut links = vec![
            Link {
                prev: UNLINKED,
                next: UNLINKED,
            };
            capacity + 2
        ];
        links[front] = Link {
            prev: UNLINKED,
            next: back,
        };
        links[back] = Link {
            prev: front,
            next: UNLINKED,
        };
        Self {
            links,
            front,
            back,
            len: 0,
        }
    }

    /// Returns the number of real nodes between the sentinels.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots this list can order.
    pub fn capacity(&self) -> usize {
        self.links.len() - 2
    }

    /// Returns `true` if `id` is currently linked into the ring.
    pub fn contains(&self, id: SlotId) -> bool {
        self.links
            .get(id.index())
            .map(|link| link.prev != UNLINKED)
            .unwrap_or(false)
    }

    /// Returns the most recently used slot, if any.
    pub fn front_id(&self) -> Option<SlotId> {
        let next = self.links[self.front].next;
        (next != self.back).then(|| SlotId(next))
    }

    /// Returns the least recently used slot, if any.
    pub fn back_id(&self) -> Option<SlotId> {
        let prev = self.links[self.back].prev;
        (prev != self.front).then(|| SlotId(prev))
    }

    /// Links `id` immediately behind the front sentinel, marking it most
    /// recently used. The slot must not already be linked.
    pub fn push_front(&mut self, id: SlotId) {
        let idx = id.index();
        debug_assert!(idx < self.front, "slot index out of range");
        debug_assert!(!self.contains(id), "slot already linked");

        let first = self.links[self.front].next;
        self.links[idx] = Link {
            prev: self.front,
            next: first,
        };
        self.links[self.front].next = idx;
        self.links[first].prev = idx;
        self.len += 1;
    }

    /// Unlinks `id` from wherever it sits. The slot must currently be linked
    /// (caller's responsibility).
    pub fn remove(&mut self, id: SlotId) {
        let idx = id.index();
        debug_assert!(self.contains(id), "slot not linked");

        let Link { prev, next } = self.links[idx];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        self.links[idx] = Link {
            prev: UNLINKED,
            next: UNLINKED,
        };
        self.len -= 1;
    }

    /// Relinks `id` at the front; a single operation so callers never observe
    /// the slot half-unlinked.
    pub fn move_to_front(&mut self, id: SlotId) {
        if self.links[self.front].next == id.index() {
            return;
        }
        self.remove(id);
        self.push_front(id);
    }

    /// Unlinks and returns the least recently used slot, or `None` when only
    /// the sentinels remain.
    pub fn pop_back(&mut self) -> Option<SlotId> {
        let id = self.back_id()?;
        self.remove(id);
        Some(id)
    }

    /// Unlinks every real node, keeping the sentinel ring.
    pub fn clear(&mut self) {
        let (front, back) = (self.front, self.back);
        for link in &mut self.links {
            *link = Link {
                prev: UNLINKED,
                next: UNLINKED,
            };
        }
        self.links[front] = Link {
            prev: UNLINKED,
            next: back,
        };
        self.links[back] = Link {
            prev: front,
            next: UNLINKED,
        };
        self.len = 0;
    }

    /// Returns an iterator of slot ids from front (MRU) to back (LRU).
    pub fn iter_ids(&self) -> RecencyIdIter<'_> {
        RecencyIdIter {
            list: self,
            current: self.links[self.front].next,
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.links[self.front].prev, UNLINKED);
        assert_eq!(self.links[self.back].next, UNLINKED);

        let mut count = 0usize;
        let mut prev = self.front;
        let mut current = self.links[self.front].next;

        while current != self.back {
            assert!(current < self.front, "ring escaped the data rows");
            assert_eq!(self.links[current].prev, prev);
            prev = current;
            current = self.links[current].next;
            count += 1;
            assert!(count <= self.len, "cycle detected in recency ring");
        }

        assert_eq!(self.links[self.back].prev, prev);
        assert_eq!(count, self.len);
    }
}

/// Iterator over linked slot ids from front to back.
pub struct RecencyIdIter<'a> {
    list: &'a RecencyList,
    current: usize,
}

impl Iterator for RecencyIdIter<'_> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.list.back {
            return None;
        }
        let id = SlotId(self.current);
        self.current = self.list.links[self.current].next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &RecencyList) -> Vec<usize> {
        list.iter_ids().map(SlotId::index).collect()
    }

    #[test]
    fn empty_list_has_only_sentinels() {
        let mut list = RecencyList::with_capacity(4);
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        assert_eq!(list.pop_back(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(SlotId(0));
        list.push_front(SlotId(1));
        list.push_front(SlotId(2));

        assert_eq!(ids(&list), vec![2, 1, 0]);
        assert_eq!(list.front_id(), Some(SlotId(2)));
        assert_eq!(list.back_id(), Some(SlotId(0)));
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_back_returns_least_recent() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(SlotId(0));
        list.push_front(SlotId(1));

        assert_eq!(list.pop_back(), Some(SlotId(0)));
        assert_eq!(list.pop_back(), Some(SlotId(1)));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_refreshes_recency() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(SlotId(0));
        list.push_front(SlotId(1));
        list.push_front(SlotId(2));

        list.move_to_front(SlotId(0));
        assert_eq!(ids(&list), vec![0, 2, 1]);

        // Moving the current front is a no-op.
        list.move_to_front(SlotId(0));
        assert_eq!(ids(&list), vec![0, 2, 1]);
        assert_eq!(list.len(), 3);
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_unlinks_middle_node() {
        let mut list = RecencyList::with_capacity(4);
        list.push_front(SlotId(0));
        list.push_front(SlotId(1));
        list.push_front(SlotId(2));

        list.remove(SlotId(1));
        assert_eq!(ids(&list), vec![2, 0]);
        assert!(!list.contains(SlotId(1)));
        list.debug_validate_invariants();
    }

    #[test]
    fn removed_slot_can_be_relinked() {
        let mut list = RecencyList::with_capacity(2);
        list.push_front(SlotId(0));
        list.remove(SlotId(0));
        list.push_front(SlotId(0));

        assert_eq!(ids(&list), vec![0]);
        list.debug_validate_invariants();
    }

    #[test]
    fn clear_resets_to_sentinel_ring() {
        let mut list = RecencyList::with_capacity(3);
        list.push_front(SlotId(0));
        list.push_front(SlotId(1));

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 3);
        assert_eq!(ids(&list), Vec::<usize>::new());

        list.push_front(SlotId(1));
        assert_eq!(ids(&list), vec![1]);
        list.debug_validate_invariants();
    }
}
