//! Singly linked list backed by `SlotArena`.
//!
//! Nodes are stored in a `SlotArena` and chained through `SlotId` links, so
//! relinking a node is O(1) once its predecessor is known and no node is ever
//! reached through a raw pointer.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────┐
//!   │ SlotId │ Node { value, next }             │
//!   ├────────┼──────────────────────────────────┤
//!   │ id_1   │ { value: A, next: Some(id_2) }   │
//!   │ id_2   │ { value: B, next: Some(id_3) }   │
//!   │ id_3   │ { value: C, next: None }         │
//!   └────────┴──────────────────────────────────┘
//!
//!   head ─► [id_1] ──► [id_2] ──► [id_3] ──► ∅
//! ```
//!
//! There is no tail pointer and no back link: the only way to reach a node's
//! predecessor is to scan from the head. [`ForwardList::find_link`] performs
//! that scan and hands back the predecessor alongside the match, which is
//! exactly what [`ForwardList::move_to_front_after`] needs.
//!
//! ## Operations
//! - `push_front` / `pop_front`: O(1)
//! - `find_link(pred)`: O(n) scan, tracks the predecessor
//! - `move_to_front_after(prev, id)`: O(1) unlink + relink at head
//! - `nth_id(index)`: O(index)
//! - `iter` / `iter_ids`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<SlotId>,
}

/// Location of a node found by [`ForwardList::find_link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Predecessor of `id`, `None` when `id` is the head.
    pub prev: Option<SlotId>,
    pub id: SlotId,
    /// Zero-based distance from the head.
    pub depth: usize,
}

impl Link {
    /// Returns `true` if the linked node is the head of the list.
    pub fn is_head(&self) -> bool {
        self.prev.is_none()
    }
}

#[derive(Debug)]
/// Singly linked list that stores nodes in a `SlotArena` and links them via `SlotId`.
pub struct ForwardList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
}

impl<T> ForwardList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the number of nodes the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the head of the list.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the head of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the successor of `id`, if `id` is present and not the last node.
    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.next)
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the head and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        id
    }

    /// Removes and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        let node = self.arena.remove(id)?;
        self.head = node.next;
        Some(node.value)
    }

    /// Scans from the head for the first value matching `pred`.
    ///
    /// The returned [`Link`] carries the predecessor of the match so the
    /// caller can relink it without a second scan.
    pub fn find_link(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Link> {
        let mut prev = None;
        let mut current = self.head;
        let mut depth = 0usize;

        while let Some(id) = current {
            let node = self.arena.get(id)?;
            if pred(&node.value) {
                return Some(Link { prev, id, depth });
            }
            prev = Some(id);
            current = node.next;
            depth += 1;
        }

        None
    }

    /// Returns the SlotId at zero-based position `index`, if any.
    pub fn nth_id(&self, index: usize) -> Option<SlotId> {
        self.iter_ids().nth(index)
    }

    /// Unlinks `id` from behind `prev` and relinks it as the new head.
    ///
    /// Returns `false` (leaving the list untouched) unless `prev` is present
    /// and currently links directly to `id`. Moving the head is a no-op that
    /// returns `true`.
    pub fn move_to_front_after(&mut self, prev: SlotId, id: SlotId) -> bool {
        if Some(id) == self.head {
            return true;
        }
        let after = match self.arena.get(id) {
            Some(node) => node.next,
            None => return false,
        };
        match self.arena.get_mut(prev) {
            Some(prev_node) if prev_node.next == Some(id) => prev_node.next = after,
            _ => return false,
        }
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.next = old_head;
        }
        self.head = Some(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
    }

    /// Clears the list and shrinks internal storage.
    pub fn clear_shrink(&mut self) {
        self.clear();
        self.arena.shrink_to_fit();
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.arena.approx_bytes()
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> ForwardListIter<'_, T> {
        ForwardListIter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Returns an iterator of SlotIds from head to tail.
    pub fn iter_ids(&self) -> ForwardListIdIter<'_, T> {
        ForwardListIdIter {
            list: self,
            current: self.head,
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the list order as SlotIds from head to tail.
    pub fn debug_snapshot_ids(&self) -> Vec<SlotId> {
        self.iter_ids().collect()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() {
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = rustc_hash::FxHashSet::default();
        let mut count = 0usize;
        let mut current = self.head;

        while let Some(id) = current {
            assert!(seen.insert(id), "cycle through {:?}", id);
            let node = self.arena.get(id).expect("node missing");
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
    }
}

pub struct ForwardListIter<'a, T> {
    list: &'a ForwardList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for ForwardListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ForwardListIter<'_, T> {}

/// Iterator over SlotIds from head to tail.
pub struct ForwardListIdIter<'a, T> {
    list: &'a ForwardList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for ForwardListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(id)
    }
}

/// Owning iterator that drains the list from head to tail.
pub struct ForwardListIntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for ForwardListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for ForwardListIntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = ForwardListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        ForwardListIntoIter { list: self }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics if `id` is not a live node, like slice indexing.
impl<T> std::ops::Index<SlotId> for ForwardList<T> {
    type Output = T;

    fn index(&self, id: SlotId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("no live node at slot {}", id.index()),
        }
    }
}

impl<T> std::ops::IndexMut<SlotId> for ForwardList<T> {
    fn index_mut(&mut self, id: SlotId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("no live node at slot {}", id.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn forward_list_basic_ops() {
        let mut list = ForwardList::new();
        let c = list.push_front("c");
        let b = list.push_front("b");
        let a = list.push_front("a");

        assert_eq!(list.front(), Some(&"a"));
        assert_eq!(list.front_id(), Some(a));
        assert_eq!(list.next_id(a), Some(b));
        assert_eq!(list.next_id(c), None);
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.front(), Some(&"b"));
        assert!(!list.contains(a));
        assert!(list.contains(c));
        list.debug_validate_invariants();
    }

    #[test]
    fn forward_list_push_front_reverses_order() {
        let mut list = ForwardList::new();
        for v in 1..=4 {
            list.push_front(v);
        }
        assert_eq!(values(&list), vec![4, 3, 2, 1]);
        assert_eq!(list.iter().len(), 4);
    }

    #[test]
    fn forward_list_find_link_tracks_predecessor() {
        let mut list = ForwardList::new();
        let c = list.push_front('c');
        let b = list.push_front('b');
        let a = list.push_front('a');

        let head = list.find_link(|v| *v == 'a').unwrap();
        assert_eq!(head, Link { prev: None, id: a, depth: 0 });
        assert!(head.is_head());

        let tail = list.find_link(|v| *v == 'c').unwrap();
        assert_eq!(tail, Link { prev: Some(b), id: c, depth: 2 });
        assert!(!tail.is_head());

        assert_eq!(list.find_link(|v| *v == 'z'), None);
    }

    #[test]
    fn forward_list_move_to_front_after_middle_and_tail() {
        let mut list = ForwardList::new();
        let c = list.push_front('c');
        let b = list.push_front('b');
        let a = list.push_front('a');

        assert!(list.move_to_front_after(b, c));
        assert_eq!(values(&list), vec!['c', 'a', 'b']);
        list.debug_validate_invariants();

        assert!(list.move_to_front_after(c, a));
        assert_eq!(values(&list), vec!['a', 'c', 'b']);
        assert_eq!(list.next_id(b), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn forward_list_move_to_front_after_rejects_wrong_predecessor() {
        let mut list = ForwardList::new();
        let c = list.push_front(3);
        let _b = list.push_front(2);
        let a = list.push_front(1);

        assert!(!list.move_to_front_after(a, c));
        assert_eq!(values(&list), vec![1, 2, 3]);

        assert!(list.move_to_front_after(c, a));
        assert_eq!(values(&list), vec![1, 2, 3]);
    }

    #[test]
    fn forward_list_nth_id() {
        let mut list = ForwardList::new();
        let b = list.push_front("b");
        let a = list.push_front("a");
        assert_eq!(list.nth_id(0), Some(a));
        assert_eq!(list.nth_id(1), Some(b));
        assert_eq!(list.nth_id(2), None);
    }

    #[test]
    fn forward_list_clear_resets_state() {
        let mut list = ForwardList::with_capacity(8);
        list.push_front(1);
        list.push_front(2);
        list.clear_shrink();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.approx_bytes() >= std::mem::size_of::<ForwardList<i32>>());
        list.debug_validate_invariants();
    }

    #[test]
    fn forward_list_get_mut_updates_value() {
        let mut list = ForwardList::new();
        let id = list.push_front(10);
        if let Some(value) = list.get_mut(id) {
            *value = 20;
        }
        assert_eq!(list.get(id), Some(&20));
    }

    #[test]
    fn forward_list_index_by_slot() {
        let mut list = ForwardList::new();
        let id = list.push_front(5);
        list[id] += 1;
        assert_eq!(list[id], 6);
    }

    #[test]
    #[should_panic(expected = "no live node")]
    fn forward_list_index_vacant_slot_panics() {
        let mut list = ForwardList::new();
        let id = list.push_front(1);
        list.pop_front();
        let _ = list[id];
    }

    #[test]
    fn forward_list_into_iter_drains_in_order() {
        let mut list = ForwardList::new();
        list.push_front("z");
        list.push_front("y");
        list.push_front("x");
        let drained: Vec<_> = list.into_iter().collect();
        assert_eq!(drained, vec!["x", "y", "z"]);
    }

    #[test]
    fn forward_list_reuses_popped_slots() {
        let mut list = ForwardList::new();
        let first = list.push_front(1);
        list.pop_front();
        let second = list.push_front(2);
        assert_eq!(first.index(), second.index());
        assert_eq!(list.debug_snapshot_ids(), vec![second]);
    }
}
