#![no_main]

use freqlist::SelfOrganizingMap;
use libfuzzer_sys::fuzz_target;
use rustc_hash::FxHashMap;

// Fuzz arbitrary operation sequences on SelfOrganizingMap
//
// Tests random sequences of set, find, find_mut, find_or_insert_with, merge,
// clone and clear. Values are tracked in a hash map model; the promotion
// rule itself is checked locally on every lookup.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut map: SelfOrganizingMap<u8, u32> = SelfOrganizingMap::new();
    let mut model: FxHashMap<u8, u32> = FxHashMap::default();

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 7;
        let key = data[idx + 1] % 32;
        let value = u32::from(data[idx + 2]);

        match op {
            0 => {
                // set
                let old = map.set(key, value);
                assert_eq!(old, model.insert(key, value));
                if old.is_none() {
                    assert_eq!(map.front(), Some((&key, &value)));
                    assert_eq!(map.access_count(&key), Some(0));
                }
            },
            1 => {
                // find
                let head = map.front().map(|(k, _)| *k);
                let head_count = head.and_then(|k| map.access_count(&k));
                let before = map.access_count(&key);

                assert_eq!(map.find(&key), model.get(&key));

                match before {
                    None => assert_eq!(map.access_count(&key), None),
                    Some(count) if head == Some(key) => {
                        assert_eq!(map.access_count(&key), Some(count));
                    },
                    Some(count) => {
                        let after = count.saturating_add(1);
                        assert_eq!(map.access_count(&key), Some(after));
                        let now_head = map.front().map(|(k, _)| *k) == Some(key);
                        assert_eq!(now_head, Some(after) >= head_count);
                    },
                }
            },
            2 => {
                // find_mut
                if let Some(v) = map.find_mut(&key) {
                    *v = value;
                    model.insert(key, value);
                }
                assert_eq!(map.find(&key), model.get(&key));
            },
            3 => {
                // find_or_insert_with
                let got = *map.find_or_insert_with(key, || value);
                let expected = *model.entry(key).or_insert(value);
                assert_eq!(got, expected);
            },
            4 => {
                // merge with a small map built from the next bytes
                let mut other = SelfOrganizingMap::new();
                for b in data[idx..].iter().take(4) {
                    other.set(b % 32, value);
                    model.insert(b % 32, value);
                }
                map.merge(&other);
            },
            5 => {
                // clone is a cold copy
                let copy = map.clone();
                assert!(copy.iter().eq(map.iter()));
                assert!(copy.keys().all(|k| copy.access_count(k) == Some(0)));
                map = copy;
            },
            6 => {
                // clear
                if value % 8 == 0 {
                    map.clear();
                    model.clear();
                }
            },
            _ => unreachable!(),
        }

        assert_eq!(map.len(), model.len());
        assert!(map.check_invariants().is_ok());

        idx += 3;
    }
});
