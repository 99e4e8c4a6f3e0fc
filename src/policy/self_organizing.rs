//! # Self-Organizing Association List
//!
//! A key/value list that reorders itself on lookup: every node carries an
//! access counter, and a node that is found away from the head is moved to
//! the front once its counter catches up with the head's counter. Frequently
//! read keys drift toward the head and become cheap to find again, without
//! the memory overhead of a hash table.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                      SelfOrganizingMap<K, V>                             │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  ForwardList<Entry<K, V>>   (nodes in a SlotArena, linked by id)   │ │
//!   │   │                                                                    │ │
//!   │   │   head                                                             │ │
//!   │   │    │                                                               │ │
//!   │   │    ▼                                                               │ │
//!   │   │  ┌──────────┐    ┌──────────┐    ┌──────────┐                      │ │
//!   │   │  │ key: a   │───►│ key: b   │───►│ key: c   │───► ∅                │ │
//!   │   │  │ value    │    │ value    │    │ value    │                      │ │
//!   │   │  │ count: 5 │    │ count: 0 │    │ count: 2 │                      │ │
//!   │   │  └──────────┘    └──────────┘    └──────────┘                      │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Promotion Rule
//!
//! ```text
//!   find(key):
//!     scan from head, remembering the predecessor
//!     ├─ not found ............................ None, nothing changes
//!     ├─ found at head ........................ return value (count untouched)
//!     └─ found behind `prev`:
//!          count += 1
//!          ├─ count <  head.count ............. stay in place
//!          └─ count >= head.count ............. unlink after `prev`, relink as head
//!
//!   Example: [A(5), B(0), C(0)]
//!     find(C) x4   →  C: 1..4, all < 5      →  [A(5), B(0), C(4)]
//!     find(C)      →  C: 5 >= 5             →  [C(5), A(5), B(0)]
//!     find(C)      →  head hit, free        →  [C(5), A(5), B(0)]
//! ```
//!
//! A single repeat access is never enough to unseat a popular head; the
//! challenger has to accumulate as many non-head hits as the head did. Head
//! hits are free: they neither count nor move anything.
//!
//! New keys are pushed at the head with a count of zero, ahead of every
//! existing node.
//!
//! ## Example Usage
//!
//! ```
//! use freqlist::SelfOrganizingMap;
//!
//! let mut map = SelfOrganizingMap::new();
//! map.set("alpha", 1);
//! map.set("beta", 2);
//! map.set("gamma", 3);
//!
//! // Newest key is at the head.
//! assert_eq!(map.front(), Some((&"gamma", &3)));
//!
//! // "alpha" sits at the tail; one hit brings it level with the head (0)
//! // and moves it to the front.
//! assert_eq!(map.find(&"alpha"), Some(&1));
//! assert_eq!(map.front(), Some((&"alpha", &1)));
//! assert_eq!(map.access_count(&"alpha"), Some(1));
//!
//! let order: Vec<_> = map.keys().copied().collect();
//! assert_eq!(order, ["alpha", "gamma", "beta"]);
//! ```
//!
//! ## Copy Semantics
//!
//! `Clone` produces a *cold* copy: same entries in the same order, every
//! access count reset to zero. The copy earns its own access history.
//!
//! ## Thread Safety
//!
//! Not synchronized. Lookups take `&mut self` because they may reorder the
//! chain, so shared access needs external locking.
//!
//! ## Implementation Notes
//!
//! - O(n) lookup and insert-or-update (linear scan), O(1) relink
//! - O(1) `len`
//! - Keys only need `Eq`; no hashing
//! - Counters saturate at `u64::MAX`

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::ds::forward_list::{ForwardList, ForwardListIntoIter, ForwardListIter, Link};
use crate::ds::slot_arena::SlotId;
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::PromotionMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::PromotionMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, PromotionMetricsReadRecorder,
    PromotionMetricsRecorder,
};
use crate::traits::{AssocContainer, FrequencyPromoting};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    access_count: u64,
}

impl<K, V> Entry<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            access_count: 0,
        }
    }
}

/// Association list that promotes frequently found keys toward the head.
pub struct SelfOrganizingMap<K, V> {
    list: ForwardList<Entry<K, V>>,
    #[cfg(feature = "metrics")]
    metrics: PromotionMetrics,
}

impl<K, V> SelfOrganizingMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            list: ForwardList::new(),
            #[cfg(feature = "metrics")]
            metrics: PromotionMetrics::default(),
        }
    }

    /// Creates an empty map with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: ForwardList::with_capacity(capacity),
            #[cfg(feature = "metrics")]
            metrics: PromotionMetrics::default(),
        }
    }

    /// Returns the number of entries. O(1).
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.list.clear();
    }

    /// Drops every entry and releases the node storage.
    pub fn clear_shrink(&mut self) {
        self.clear();
        self.list.clear_shrink();
    }

    /// Returns the head entry without touching any counter.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.list.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry at zero-based position `index` (head = 0).
    ///
    /// Positional reads never count as an access and never reorder.
    pub fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_entry_at_call();

        self.list
            .nth_id(index)
            .and_then(|id| self.list.get(id))
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates `(key, value)` pairs from head to tail.
    ///
    /// The iterator borrows the map, so no lookup can reorder it while the
    /// iteration is open.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Iterates keys from head to tail.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates values from head to tail.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Calls `visitor` once per key, head to tail.
    pub fn for_each_key<F>(&self, mut visitor: F)
    where
        F: FnMut(&K),
    {
        for key in self.keys() {
            visitor(key);
        }
    }

    /// Calls `visitor` per entry, head to tail, stopping after the first
    /// call that returns `false`.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self.iter() {
            if !visitor(key, value) {
                break;
            }
        }
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() - std::mem::size_of::<ForwardList<Entry<K, V>>>()
            + self.list.approx_bytes()
    }

    fn push_new(&mut self, key: K, value: V) -> SlotId {
        let id = self.list.push_front(Entry::new(key, value));

        #[cfg(debug_assertions)]
        self.list.debug_validate_invariants();

        id
    }
}

impl<K, V> SelfOrganizingMap<K, V>
where
    K: Eq,
{
    /// Looks up `key`, counting the access and promoting the node when its
    /// count reaches the head's.
    pub fn find<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.locate(key) {
            Some(id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_hit();
                Some(&self.list[id].value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_miss();
                None
            },
        }
    }

    /// Like [`find`](Self::find), returning a mutable reference.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.locate(key) {
            Some(id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_hit();
                Some(&mut self.list[id].value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_miss();
                None
            },
        }
    }

    /// Inserts or overwrites `key`.
    ///
    /// An existing key goes through the same count-and-promote step as
    /// [`find`](Self::find) and keeps its counter; its previous value is
    /// returned. A new key is pushed at the head with a count of zero.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_set_call();

        if let Some(id) = self.locate(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_set_update();
            return Some(std::mem::replace(&mut self.list[id].value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_set_new();

        self.push_new(key, value);
        None
    }

    /// Finds `key` (with promotion), or inserts `default()` at the head.
    pub fn find_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let id = match self.locate(&key) {
            Some(id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_hit();
                id
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_miss();
                self.push_new(key, default())
            },
        };
        &mut self.list[id].value
    }

    /// Returns the access count of `key` without counting or moving it.
    pub fn access_count<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_access_count_call();

        self.list
            .iter()
            .find(|entry| <K as Borrow<Q>>::borrow(&entry.key) == key)
            .map(|entry| entry.access_count)
    }

    /// Sets every `(key, value)` of `other` into `self`, in `other`'s order.
    ///
    /// Shared keys take `other`'s value and are counted like any lookup.
    /// Keys new to `self` are pushed at the head, so the last new key of
    /// `other` ends up first.
    pub fn merge(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_merge_call();

        for (key, value) in other.iter() {
            self.set(key.clone(), value.clone());
        }
    }

    fn locate<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let link = self
            .list
            .find_link(|entry| <K as Borrow<Q>>::borrow(&entry.key) == key);

        #[cfg(feature = "metrics")]
        self.metrics
            .record_scan_steps(link.map_or(self.list.len(), |l| l.depth + 1) as u64);

        Some(self.touch(link?))
    }

    /// Counts a hit on `link` and promotes it if it caught up with the head.
    fn touch(&mut self, link: Link) -> SlotId {
        let Some(prev) = link.prev else {
            #[cfg(feature = "metrics")]
            self.metrics.record_head_hit();
            return link.id;
        };

        let head_count = self.list.front().map_or(0, |head| head.access_count);
        let entry = &mut self.list[link.id];
        entry.access_count = entry.access_count.saturating_add(1);

        if entry.access_count < head_count {
            #[cfg(feature = "metrics")]
            self.metrics.record_promotion_deferred();
            return link.id;
        }

        self.list.move_to_front_after(prev, link.id);

        #[cfg(feature = "metrics")]
        self.metrics.record_promotion();

        #[cfg(debug_assertions)]
        self.list.debug_validate_invariants();

        link.id
    }
}

impl<K, V> SelfOrganizingMap<K, V>
where
    K: Eq + Hash,
{
    /// Verifies count, acyclicity and key uniqueness of the chain.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        let len = self.list.len();
        let mut keys = FxHashSet::default();
        let mut walked = 0usize;

        // Bounded walk: a cycle shows up as more nodes than `len`.
        for id in self.list.iter_ids().take(len + 1) {
            walked += 1;
            if walked > len {
                return Err(InvariantError::new(format!(
                    "chain longer than count {}: cycle through slot {}",
                    len,
                    id.index()
                )));
            }
            let entry = self.list.get(id).ok_or_else(|| {
                InvariantError::new(format!("chain links to vacant slot {}", id.index()))
            })?;
            if !keys.insert(&entry.key) {
                return Err(InvariantError::new(format!(
                    "duplicate key {:?} at position {}",
                    entry.key,
                    walked - 1
                )));
            }
        }

        if walked != len {
            return Err(InvariantError::new(format!(
                "count {} but only {} nodes reachable from head",
                len, walked
            )));
        }

        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> SelfOrganizingMap<K, V> {
    /// Returns a snapshot of the lookup and promotion counters.
    pub fn metrics_snapshot(&self) -> PromotionMetricsSnapshot {
        self.metrics.snapshot(self.len())
    }

    /// Zeroes every counter.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<PromotionMetricsSnapshot> for SelfOrganizingMap<K, V> {
    fn snapshot(&self) -> PromotionMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> Default for SelfOrganizingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for SelfOrganizingMap<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Copies every entry in order with all access counts reset to zero.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.push_cold_copy(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.push_cold_copy(source);
    }
}

impl<K, V> SelfOrganizingMap<K, V>
where
    K: Clone,
    V: Clone,
{
    // Walks tail to head so pushing at the front reproduces the source order.
    fn push_cold_copy(&mut self, source: &Self) {
        let entries: Vec<_> = source.iter().collect();
        for (key, value) in entries.into_iter().rev() {
            self.list.push_front(Entry::new(key.clone(), value.clone()));
        }

        #[cfg(debug_assertions)]
        self.list.debug_validate_invariants();
    }
}

impl<K, V> fmt::Debug for SelfOrganizingMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<_> = self
            .list
            .iter()
            .map(|entry| (&entry.key, &entry.value, entry.access_count))
            .collect();
        f.debug_struct("SelfOrganizingMap")
            .field("len", &self.len())
            .field("entries", &entries)
            .finish()
    }
}

impl<K, V> Extend<(K, V)> for SelfOrganizingMap<K, V>
where
    K: Eq,
{
    /// Sets each pair in iteration order.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for SelfOrganizingMap<K, V>
where
    K: Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> AssocContainer<K, V> for SelfOrganizingMap<K, V>
where
    K: Eq,
{
    fn set(&mut self, key: K, value: V) -> Option<V> {
        SelfOrganizingMap::set(self, key, value)
    }

    fn find(&mut self, key: &K) -> Option<&V> {
        SelfOrganizingMap::find(self, key)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn clear(&mut self) {
        SelfOrganizingMap::clear(self)
    }
}

impl<K, V> FrequencyPromoting<K, V> for SelfOrganizingMap<K, V>
where
    K: Eq,
{
    fn access_count(&self, key: &K) -> Option<u64> {
        SelfOrganizingMap::access_count(self, key)
    }

    fn front(&self) -> Option<(&K, &V)> {
        SelfOrganizingMap::front(self)
    }
}

/// Borrowing iterator over `(key, value)` pairs, head to tail.
pub struct Iter<'a, K, V> {
    inner: ForwardListIter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Owning iterator over `(key, value)` pairs, head to tail.
pub struct IntoIter<K, V> {
    inner: ForwardListIntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for SelfOrganizingMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.list.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SelfOrganizingMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
