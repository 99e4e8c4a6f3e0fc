//! Index-addressed node storage with slot reuse.
//!
//! Nodes live in a `Vec<Option<T>>` and are addressed by [`SlotId`]. Freed
//! slots go onto a free list and are handed out again by the next
//! [`SlotArena::insert`], so ids stay stable for the lifetime of a node and
//! no raw pointers are needed to link nodes together.
//!
//! ```text
//!   slots:     [ Some(a) | None | Some(c) | Some(d) ]
//!   free_list: [ 1 ]
//!   len:       3
//! ```

/// Stable handle to a slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value`, reusing a freed slot when one is available.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Frees the slot and returns its value; `None` if `id` is vacant.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        let value = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of slots ever allocated, vacant ones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
        self.free_list.shrink_to_fit();
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.slots.capacity() * std::mem::size_of::<Option<T>>()
            + self.free_list.capacity() * std::mem::size_of::<usize>()
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_insert_remove_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.insert("a");
        let id2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.remove(id1), Some("a"));
        assert_eq!(arena.len(), 1);

        let id3 = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
        assert_eq!(arena.slot_count(), 2);
    }

    #[test]
    fn slot_arena_double_remove_is_none() {
        let mut arena = SlotArena::new();
        let id = arena.insert(7u32);
        assert_eq!(arena.remove(id), Some(7));
        assert_eq!(arena.remove(id), None);
        assert!(!arena.contains(id));
        assert!(arena.is_empty());
    }

    #[test]
    fn slot_arena_out_of_range_lookups() {
        let mut arena: SlotArena<u8> = SlotArena::new();
        let bogus = SlotId(42);
        assert_eq!(arena.get(bogus), None);
        assert_eq!(arena.get_mut(bogus), None);
        assert_eq!(arena.remove(bogus), None);
        assert!(!arena.contains(bogus));
    }

    #[test]
    fn slot_arena_clear_resets_slots() {
        let mut arena = SlotArena::with_capacity(4);
        let a = arena.insert(1);
        arena.insert(2);
        arena.remove(a);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.slot_count(), 0);
        let b = arena.insert(3);
        assert_eq!(b.index(), 0);
    }

    #[test]
    fn slot_arena_get_mut_updates_value() {
        let mut arena = SlotArena::new();
        let id = arena.insert(10);
        if let Some(value) = arena.get_mut(id) {
            *value = 20;
        }
        assert_eq!(arena.get(id), Some(&20));
        assert!(arena.approx_bytes() >= std::mem::size_of::<SlotArena<i32>>());
    }
}
