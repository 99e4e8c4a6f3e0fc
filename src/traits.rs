//! Container trait hierarchy.
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────────────────┐
//!   │ AssocContainer<K, V>                                                    │
//!   │                                                                         │
//!   │   set(k, v) -> Option<V>    find(&k) -> Option<&V>                      │
//!   │   len()   is_empty()   clear()                                          │
//!   └───────────────────────────────────┬─────────────────────────────────────┘
//!                                       │
//!                                       ▼
//!   ┌─────────────────────────────────────────────────────────────────────────┐
//!   │ FrequencyPromoting<K, V>                                                │
//!   │                                                                         │
//!   │   access_count(&k) -> Option<u64>    front() -> Option<(&K, &V)>        │
//!   └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`AssocContainer`] is the contract every linear-scan association list in
//! an application can share: insert-or-update, lookup, count, clear. Unlike
//! a hash map, `find` takes `&mut self` because an implementation is allowed
//! to reorganise itself on every lookup.
//!
//! [`FrequencyPromoting`] adds the observable state of access-count driven
//! reordering, implemented by [`SelfOrganizingMap`](crate::SelfOrganizingMap).

/// Core operations shared by association-list style containers.
///
/// # Example
///
/// ```
/// use freqlist::traits::AssocContainer;
/// use freqlist::SelfOrganizingMap;
///
/// fn load<C: AssocContainer<u64, String>>(c: &mut C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         c.set(*key, value.to_string());
///     }
/// }
///
/// let mut map = SelfOrganizingMap::new();
/// load(&mut map, &[(1, "one"), (2, "two")]);
/// assert_eq!(map.len(), 2);
/// ```
pub trait AssocContainer<K, V> {
    /// Inserts or overwrites `key`, returning the previous value if it existed.
    ///
    /// ```
    /// use freqlist::traits::AssocContainer;
    /// use freqlist::SelfOrganizingMap;
    ///
    /// let mut map = SelfOrganizingMap::new();
    /// assert_eq!(AssocContainer::set(&mut map, 1, "first"), None);
    /// assert_eq!(AssocContainer::set(&mut map, 1, "second"), Some("first"));
    /// ```
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key`. May reorder the container.
    fn find(&mut self, key: &K) -> Option<&V>;

    /// Returns the number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    fn clear(&mut self);
}

/// Containers that reorder themselves by per-entry access counts.
pub trait FrequencyPromoting<K, V>: AssocContainer<K, V> {
    /// Returns the access count recorded for `key` without touching order.
    fn access_count(&self, key: &K) -> Option<u64>;

    /// Returns the entry currently at the head (the cheapest to find).
    fn front(&self) -> Option<(&K, &V)>;
}
