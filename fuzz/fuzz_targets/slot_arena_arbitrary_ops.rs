#![no_main]

use freqlist::ds::SlotArena;
use libfuzzer_sys::fuzz_target;
use rustc_hash::FxHashSet;

// Fuzz arbitrary operation sequences on SlotArena
//
// Tests random sequences of insert, remove, get, get_mut, contains, clear,
// shrink_to_fit, and checks that freed slots are reused before growing.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut all_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // insert
                let had_free = arena.slot_count() > arena.len();
                let slots_before = arena.slot_count();
                let id = arena.insert(value);
                all_ids.push(id);

                assert_eq!(arena.get(id), Some(&value));
                assert!(arena.contains(id));
                if had_free {
                    assert_eq!(arena.slot_count(), slots_before);
                } else {
                    assert_eq!(arena.slot_count(), slots_before + 1);
                }
            },
            1 => {
                // remove
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let old_len = arena.len();
                    if arena.remove(id).is_some() {
                        assert_eq!(arena.len(), old_len - 1);
                        assert!(!arena.contains(id));
                        assert_eq!(arena.get(id), None);
                    } else {
                        assert_eq!(arena.len(), old_len);
                    }
                }
            },
            2 => {
                // get_mut
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = value;
                        assert_eq!(arena.get(id), Some(&value));
                    }
                }
            },
            3 => {
                // contains agrees with get
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    assert_eq!(arena.contains(id), arena.get(id).is_some());
                }
            },
            4 => {
                // clear
                arena.clear();
                all_ids.clear();
                assert!(arena.is_empty());
                assert_eq!(arena.slot_count(), 0);
            },
            5 => {
                // shrink_to_fit keeps live slots addressable
                arena.shrink_to_fit();
                assert!(arena.capacity() >= arena.slot_count());
            },
            6 => {
                // freed slots are recycled, so ids can repeat
                let live: FxHashSet<_> = all_ids.iter().filter(|id| arena.contains(**id)).collect();
                assert_eq!(live.len(), arena.len());
            },
            _ => unreachable!(),
        }

        assert!(arena.len() <= arena.slot_count());
        assert_eq!(arena.is_empty(), arena.len() == 0);

        idx += 2;
    }
});
