#![cfg(test)]

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(deque: &Deque<T>) -> Vec<T> {
    let mut items = Vec::with_capacity(deque.len());
    deque.for_each(|item| items.push(item.clone()));
    items
}

fn section_lens<T>(deque: &Deque<T>) -> Vec<usize> {
    let mut lens = Vec::new();
    if let DequeState::Full(contents) = &deque.state {
        let mut section = Some(contents.head.section());
        while let Some(curr) = section {
            lens.push(curr.items.len());
            section = curr.next.as_ref().map(|next| next.section());
        }
    }
    lens
}

#[test]
fn test_push_and_pop() {
    let mut deque = Deque::new();
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.pop_back(), None);

    deque.push_back(2);
    deque.push_front(1);
    deque.push_back(3);
    deque.verify_sections();

    assert_eq!(deque.front(), Some(&1));
    assert_eq!(deque.back(), Some(&3));
    assert_eq!(contents(&deque), [1, 2, 3]);

    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_back(), Some(3));
    assert_eq!(deque.pop_back(), Some(2));
    assert!(deque.is_empty());
    assert!(deque.state.is_empty(), "Popping the last element should free its section.");
    assert_eq!(deque.front(), None);
}

#[test]
fn test_sections_fill_and_free() {
    let mut deque: Deque<usize> = (0..25).collect();
    deque.verify_sections();
    assert_eq!(section_lens(&deque), [10, 10, 5]);

    deque.push_front(100);
    assert_eq!(
        section_lens(&deque),
        [1, 10, 10, 5],
        "Pushing to a full front section should link a new one."
    );

    for _ in 0..6 {
        deque.pop_back();
    }
    deque.verify_sections();
    assert_eq!(section_lens(&deque), [1, 10, 9], "An emptied tail section should be freed.");

    deque.pop_front();
    deque.verify_sections();
    assert_eq!(section_lens(&deque), [10, 9]);
    assert_eq!(deque.front(), Some(&0));
    assert_eq!(deque.back(), Some(&18));
}

#[test]
fn test_indexing() {
    let mut deque: Deque<i32> = (0..35).collect();
    for i in 0..5 {
        deque.push_front(-1 - i);
    }

    assert_eq!(deque.len(), 40);
    assert_eq!(deque[0], -5);
    assert_eq!(deque[5], 0);
    assert_eq!(deque[39], 34);

    deque[20] *= 100;
    *deque.get_mut(21) += 1;
    assert_eq!(deque.get(20), &1500);
    assert_eq!(deque.try_get(21), Ok(&17));

    assert_eq!(deque.try_get(40), Err(IndexOutOfBounds { index: 40, len: 40 }));
    assert_eq!(deque.try_get_mut(41), Err(IndexOutOfBounds { index: 41, len: 40 }));

    assert_panics!({
        let deque: Deque<u8> = Deque::new();
        deque.get(0);
    });
}

#[test]
fn test_front_and_back_mut() {
    let mut deque: Deque<String> = ["a", "b"].into_iter().map(String::from).collect();

    if let Some(front) = deque.front_mut() {
        front.push('!');
    }
    if let Some(back) = deque.back_mut() {
        back.push('?');
    }
    assert_eq!(contents(&deque), ["a!", "b?"]);
}

#[test]
fn test_clear() {
    let mut deque: Deque<u8> = Deque::new();
    deque.clear();
    assert!(deque.is_empty(), "Clearing an empty deque should be valid.");

    deque.extend(0..30);
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);

    deque.push_front(1);
    deque.verify_sections();
    assert_eq!(contents(&deque), [1]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);

    let mut deque = Deque::new();
    for _ in 0..23 {
        deque.push_back(counter.clone());
    }
    drop(deque.pop_front());
    assert_eq!(counter.take(), 1);

    deque.clear();
    assert_eq!(counter.take(), 22, "Clearing should drop every element.");

    deque.extend((0..15).map(|_| counter.clone()));
    drop(deque);
    assert_eq!(counter.take(), 15, "Dropping the deque should drop every element.");
}

#[test]
fn test_zst() {
    let mut deque: Deque<ZeroSizedType> = (0..12).map(|_| ZeroSizedType).collect();
    deque.verify_sections();
    assert_eq!(section_lens(&deque), [10, 2]);
    assert_eq!(deque.pop_back(), Some(ZeroSizedType));
    assert_eq!(deque.len(), 11);
}

#[test]
fn test_clone() {
    let mut deque: Deque<u16> = (0..17).collect();
    let copy = deque.clone();

    deque.pop_front();
    deque[0] = 99;

    copy.verify_sections();
    assert_eq!(contents(&copy), (0..17).collect::<Vec<_>>());
}

#[test]
fn test_debug() {
    let deque: Deque<u8> = (0..12).collect();
    assert_eq!(
        format!("{deque:?}"),
        "Deque { sections: [[0, 1, 2, 3, 4, 5, 6, 7, 8, 9], [10, 11]], len: 12 }"
    );
}

#[derive(Debug, Clone)]
enum Op {
    PushFront(u16),
    PushBack(u16),
    PopFront,
    PopBack,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u16>().prop_map(Op::PushFront),
        any::<u16>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

proptest! {
    #[test]
    fn prop_matches_vec_deque(ops in proptest::collection::vec(op_strategy(), 0..400)) {
        let mut deque = Deque::new();
        let mut reference = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(value) => {
                    deque.push_front(value);
                    reference.push_front(value);
                },
                Op::PushBack(value) => {
                    deque.push_back(value);
                    reference.push_back(value);
                },
                Op::PopFront => prop_assert_eq!(deque.pop_front(), reference.pop_front()),
                Op::PopBack => prop_assert_eq!(deque.pop_back(), reference.pop_back()),
            }

            deque.verify_sections();
            prop_assert_eq!(deque.len(), reference.len());
            prop_assert_eq!(deque.front(), reference.front());
            prop_assert_eq!(deque.back(), reference.back());
        }

        prop_assert_eq!(contents(&deque), reference.iter().copied().collect::<Vec<_>>());
        for (index, value) in reference.iter().enumerate() {
            prop_assert_eq!(deque.get(index), value);
        }
    }
}
