#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;
use crate::util::panic::assert_panics;

fn in_order_keys<K: Ord + Clone, V>(map: &AvlTreeMap<K, V>) -> Vec<K> {
    let mut keys = Vec::with_capacity(map.len());
    map.for_each(|key, _| keys.push(key.clone()));
    keys
}

#[test]
fn test_insert_and_get() {
    let mut map = AvlTreeMap::new();
    map.insert(5, "five");
    map.insert(3, "three");
    map.insert(8, "eight");
    map.insert(1, "one");

    assert!(
        matches!(map.root.as_ref().map(|node| node.key), Some(5) | Some(3)),
        "The root should be 5 or 3 depending on rotation."
    );
    assert_eq!(map.get(&1), &"one");
    assert_eq!(map.get(&8), &"eight");
    assert_eq!(map.len(), 4);
    assert_eq!(map.root.verify(), 4);
}

#[test]
fn test_overwrite() {
    let mut map = AvlTreeMap::new();
    assert_eq!(map.insert("key", 1), None);
    assert_eq!(map.insert("key", 2), Some(1), "Overwriting should return the previous value.");

    assert_eq!(map.get("key"), &2);
    assert_eq!(map.len(), 1, "Overwriting shouldn't change the length.");

    *map.get_mut("key") += 10;
    assert_eq!(map["key"], 12);
}

#[test]
fn test_lookup_errors() {
    let mut map: AvlTreeMap<u32, u32> = (0..10).map(|i| (i, i * i)).collect();

    assert_eq!(map.try_get(&3), Ok(&9));
    assert_eq!(map.try_get(&10), Err(KeyNotFound));
    assert_eq!(map.try_get_mut(&11), Err(KeyNotFound));
    assert!(!map.contains_key(&10));

    assert_panics!({
        let map: AvlTreeMap<u32, u32> = AvlTreeMap::new();
        map.get(&0);
    });
}

#[test]
fn test_remove_errors() {
    let mut map: AvlTreeMap<u32, &str> = AvlTreeMap::new();

    let error = map.try_remove(&1).unwrap_err();
    assert!(error.is_empty_container(), "Removing from an empty map should fail as empty.");

    map.insert(1, "one");
    let error = map.try_remove(&2).unwrap_err();
    assert!(error.is_key_not_found(), "Removing a missing key should fail as not found.");
    assert!(KeyNotFound::try_from(error).is_ok());
    assert_eq!(map.len(), 1, "Failed removals shouldn't modify the map.");

    assert_eq!(map.try_remove(&1), Ok("one"));
    assert!(map.is_empty());

    assert_panics!({
        let mut map: AvlTreeMap<u32, u32> = AvlTreeMap::new();
        map.remove(&0);
    });
}

#[test]
fn test_ascending_inserts_stay_balanced() {
    let mut map = AvlTreeMap::new();
    for i in 0..1024 {
        map.insert(i, i);
        map.root.verify();
    }

    assert_eq!(map.len(), 1024);
    assert!(
        (11..=14).contains(&map.height()),
        "The height should stay within the AVL bound of about 1.44 log2(n)."
    );
    assert_eq!(in_order_keys(&map), (0..1024).collect::<Vec<_>>());
}

#[test]
fn test_remove_with_two_children() {
    let mut map: AvlTreeMap<i32, i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().map(|i| (i, -i)).collect();

    assert_eq!(map.remove_entry(&4), (4, -4), "Removing the root should return its entry.");
    assert_eq!(map.root.verify(), 6);
    assert_eq!(in_order_keys(&map), [1, 2, 3, 5, 6, 7]);
    assert_eq!(
        map.root.as_ref().map(|node| node.key),
        Some(5),
        "The in-order successor should replace a removed node with two children."
    );

    for key in [2, 6, 1] {
        map.remove(&key);
        map.root.verify();
    }
    assert_eq!(in_order_keys(&map), [3, 5, 7]);
}

#[test]
fn test_first_and_last() {
    let mut map: AvlTreeMap<char, usize> = "avltree".chars().zip(0..).collect();

    assert_eq!(map.first_entry(), Some((&'a', &0)));
    assert_eq!(map.last_entry(), Some((&'v', &1)));

    assert_eq!(map.take_first_entry(), Some(('a', 0)));
    assert_eq!(map.take_last_entry(), Some(('v', 1)));
    assert_eq!(map.len(), 4, "Duplicate keys should have been overwritten, leaving e, l, r, t.");
    map.root.verify();

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
    assert_eq!(map.take_first_entry(), None);
}

#[test]
fn test_clone_is_independent() {
    let mut map: AvlTreeMap<u8, String> = (0..20).map(|i| (i, i.to_string())).collect();
    let copy = map.clone();

    map.remove(&5);
    map.get_mut(&6).push('!');

    assert_eq!(copy.len(), 20);
    assert_eq!(copy.get(&5), "5");
    assert_eq!(copy.get(&6), "6");
    assert_eq!(copy.root.verify(), 20);
}

#[test]
fn test_display() {
    let map: AvlTreeMap<u8, u8> = [(2, 20), (1, 10), (3, 30)].into_iter().collect();
    assert_eq!(format!("{map}"), "{1: 10, 2: 20, 3: 30}");
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i16, i32),
    Remove(i16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0_i16..64, any::<i32>()).prop_map(|(key, value)| Op::Insert(key, value)),
        (0_i16..64).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_matches_reference_and_stays_balanced(
        ops in proptest::collection::vec(op_strategy(), 0..300)
    ) {
        let mut map = AvlTreeMap::new();
        let mut reference = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), reference.insert(key, value));
                    prop_assert_eq!(map.get(&key), &value);
                },
                Op::Remove(key) => {
                    let len = map.len();
                    match reference.remove(&key) {
                        Some(value) => {
                            prop_assert_eq!(map.try_remove(&key), Ok(value));
                            prop_assert!(!map.contains_key(&key));
                            prop_assert_eq!(map.len(), len - 1);
                        },
                        None => {
                            prop_assert!(map.try_remove(&key).is_err());
                            prop_assert_eq!(map.len(), len);
                        },
                    }
                },
            }

            prop_assert_eq!(map.root.verify(), reference.len());
            prop_assert_eq!(map.len(), reference.len());
            prop_assert_eq!(in_order_keys(&map), reference.keys().copied().collect::<Vec<_>>());
        }
    }
}
