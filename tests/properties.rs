use contactbook::hash::{CharSum, SlotHasher};
use contactbook::{Contact, ContactTable};
use proptest::prelude::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;

const MAX_CAPACITY: usize = 64;

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{0,8}",
        ".{0,12}",
    ]
}

fn arb_number() -> impl Strategy<Value = String> {
    "[0-9]{3}-[0-9]{3}-[0-9]{4}"
}

proptest! {
    #[test]
    fn hash_in_range(key in arb_key(), capacity in 1..MAX_CAPACITY) {
        let capacity = NonZeroUsize::new(capacity).unwrap();

        prop_assert!(CharSum.slot(&key, capacity) < capacity.get());
    }

    #[test]
    fn empty_key_hashes_to_zero(capacity in 1..MAX_CAPACITY) {
        prop_assert_eq!(CharSum.slot("", NonZeroUsize::new(capacity).unwrap()), 0);
    }

    #[test]
    fn permutations_collide(key in "[a-z]{1,8}", capacity in 1..MAX_CAPACITY) {
        let capacity = NonZeroUsize::new(capacity).unwrap();
        let reversed: String = key.chars().rev().collect();

        prop_assert_eq!(CharSum.slot(&key, capacity), CharSum.slot(&reversed, capacity));
    }

    #[test]
    fn insert_then_search(key in arb_key(), number in arb_number(), capacity in 1..MAX_CAPACITY) {
        let mut table = ContactTable::new(capacity).unwrap();
        table.insert(&key, &number);

        prop_assert_eq!(table.search(&key), Some(&Contact::new(&key, &number)));
    }

    #[test]
    fn update_does_not_duplicate(
        key in arb_key(),
        first in arb_number(),
        second in arb_number(),
        capacity in 1..MAX_CAPACITY,
    ) {
        let mut table = ContactTable::new(capacity).unwrap();
        table.insert(&key, &first);
        table.insert(&key, &second);

        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table.chain_len(table.slot_of(&key)), 1);
        prop_assert_eq!(table.search(&key).map(|c| c.number.as_str()), Some(second.as_str()));
    }

    #[test]
    fn colliding_keys_stay_distinct(
        key in "[a-z]{2,8}",
        first in arb_number(),
        second in arb_number(),
        swap in any::<bool>(),
    ) {
        let other: String = key.chars().rev().collect();
        prop_assume!(other != key);

        let mut table = ContactTable::new(10).unwrap();
        prop_assert_eq!(table.slot_of(&key), table.slot_of(&other));

        if swap {
            table.insert(&other, &second);
            table.insert(&key, &first);
        } else {
            table.insert(&key, &first);
            table.insert(&other, &second);
        }

        prop_assert_eq!(table.search(&key), Some(&Contact::new(&key, &first)));
        prop_assert_eq!(table.search(&other), Some(&Contact::new(&other, &second)));
    }

    #[test]
    fn absent_keys(
        keys in proptest::collection::vec(arb_key(), 0..20),
        missing in arb_key(),
    ) {
        prop_assume!(!keys.contains(&missing));

        let mut table = ContactTable::new(7).unwrap();
        for key in &keys {
            table.insert(key, "000-000-0000");
        }

        prop_assert_eq!(table.search(&missing), None);
    }

    // the table agrees with a std map fed the same inserts
    #[test]
    fn matches_std_map(
        inserts in proptest::collection::vec((arb_key(), arb_number()), 0..50),
        capacity in 1..MAX_CAPACITY,
    ) {
        let mut table = ContactTable::new(capacity).unwrap();
        let mut model = HashMap::new();

        for (key, number) in &inserts {
            table.insert(key, number);
            model.insert(key.clone(), number.clone());
        }

        prop_assert_eq!(table.len(), model.len());

        for (key, number) in &model {
            prop_assert_eq!(table.search(key).map(|c| &c.number), Some(number));
        }

        let chained: usize = (0..capacity).map(|i| table.chain_len(i)).sum();
        prop_assert_eq!(chained, model.len());

        for slot in table.slots() {
            if let contactbook::table::SlotView::Chain { index, nodes } = slot {
                for node in nodes {
                    prop_assert_eq!(table.slot_of(node.key()), index);
                    prop_assert_eq!(node.key(), node.value().name.as_str());
                }
            }
        }
    }
}
