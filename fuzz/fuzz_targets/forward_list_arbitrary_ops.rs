#![no_main]

use freqlist::ds::ForwardList;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on ForwardList
//
// Mirrors every operation on a Vec model (head at index 0) and compares
// order after each step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: ForwardList<u32> = ForwardList::new();
    let mut model: Vec<u32> = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // push_front
                let id = list.push_front(value);
                model.insert(0, value);
                assert_eq!(list.front_id(), Some(id));
                assert_eq!(list.front(), Some(&value));
            },
            1 => {
                // pop_front
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.pop_front(), expected);
            },
            2 => {
                // find_link + move_to_front_after
                let target = value % 32;
                let link = list.find_link(|v| *v % 32 == target);
                let pos = model.iter().position(|v| *v % 32 == target);
                assert_eq!(link.map(|l| l.depth), pos);
                if let (Some(link), Some(pos)) = (link, pos) {
                    assert_eq!(list.get(link.id), Some(&model[pos]));
                    match link.prev {
                        Some(prev) => {
                            assert!(list.move_to_front_after(prev, link.id));
                            let moved = model.remove(pos);
                            model.insert(0, moved);
                        },
                        None => assert_eq!(pos, 0),
                    }
                    assert_eq!(list.front_id(), Some(link.id));
                }
            },
            3 => {
                // nth_id
                let index = value as usize % (model.len() + 1);
                let id = list.nth_id(index);
                assert_eq!(id.and_then(|id| list.get(id)), model.get(index));
            },
            4 => {
                // move with a stale predecessor must be rejected
                if model.len() >= 3 {
                    let head = list.front_id();
                    let third = list.nth_id(2);
                    if let (Some(head), Some(third)) = (head, third) {
                        assert!(!list.move_to_front_after(head, third));
                    }
                }
            },
            5 => {
                // clear
                if value % 4 == 0 {
                    list.clear_shrink();
                } else {
                    list.clear();
                }
                model.clear();
                assert!(list.is_empty());
            },
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
        #[cfg(debug_assertions)]
        list.debug_validate_invariants();

        idx += 2;
    }
});
