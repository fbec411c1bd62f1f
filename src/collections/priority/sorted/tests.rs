#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::collections::priority::{EmptyContainer, ValueNotFound};
use crate::util::panic::assert_panics;

fn assert_sorted<V>(queue: &SortedQueue<V>) {
    assert_eq!(queue.priorities.len(), queue.values.len(), "Both Vectors should have equal lengths.");
    assert!(
        queue.priorities.windows(2).all(|w| w[0].total_cmp(&w[1]).is_le()),
        "Priorities should be stored in ascending order."
    );
}

#[test]
fn test_dequeue_order() {
    let mut queue = SortedQueue::new();
    queue.enqueue("A", 5.0);
    queue.enqueue("B", 3.0);
    queue.enqueue("C", 8.0);
    assert_sorted(&queue);

    assert_eq!(queue.peek(), &"B");
    assert_eq!(queue.peek_priority(), 3.0);
    assert_eq!(queue.dequeue(), "B");
    assert_eq!(queue.dequeue(), "A");
    assert_eq!(queue.dequeue(), "C");
    assert!(queue.is_empty());
}

#[test]
fn test_empty_errors() {
    let mut queue: SortedQueue<u8> = SortedQueue::new();

    assert_eq!(queue.try_dequeue(), Err(EmptyContainer));
    assert_eq!(queue.try_peek(), Err(EmptyContainer));
    assert_eq!(queue.try_peek_priority(), Err(EmptyContainer));

    assert_panics!({
        let mut queue: SortedQueue<u8> = SortedQueue::new();
        queue.dequeue();
    });
}

#[test]
fn test_equal_priorities_are_fifo() {
    let mut queue: SortedQueue<char> =
        [('a', 1.0), ('b', 0.0), ('c', 1.0), ('d', 0.0), ('e', 1.0)].into_iter().collect();
    assert_sorted(&queue);

    let order: String = (0..5).map(|_| queue.dequeue()).collect();
    assert_eq!(order, "bdace");
}

#[test]
fn test_change_priority() {
    let mut queue: SortedQueue<&str> =
        [("x", 1.0), ("y", 2.0), ("z", 3.0), ("y", 4.0)].into_iter().collect();

    queue.change_priority(&"z", 0.0);
    assert_eq!(queue.peek(), &"z");
    assert_sorted(&queue);

    queue.change_priority(&"y", 5.0);
    assert_eq!(
        queue.priorities[..],
        [0.0, 1.0, 4.0, 5.0],
        "Only the first matching value should have been moved."
    );

    queue.change_priority(&"x", 4.0);
    assert_eq!(
        queue.values[..],
        ["z", "y", "x", "y"],
        "A moved value should be placed after existing values with the same priority."
    );
    assert_sorted(&queue);
}

#[test]
fn test_change_priority_missing() {
    let mut queue: SortedQueue<u32> = [(1, 1.0), (2, 2.0)].into_iter().collect();

    assert_eq!(queue.try_change_priority(&3, 0.0), Err(ValueNotFound));
    assert_eq!(queue.values[..], [1, 2], "A failed change shouldn't modify the queue.");
    assert_eq!(queue.priorities[..], [1.0, 2.0]);

    assert_panics!({
        let mut queue: SortedQueue<u32> = SortedQueue::new();
        queue.change_priority(&0, 0.0);
    });
}

#[test]
fn test_clear_and_reuse() {
    let mut queue: SortedQueue<u8> = (0..20).map(|i| (i, f64::from(20 - i))).collect();
    assert_eq!(queue.peek(), &19);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.try_peek(), Err(EmptyContainer));

    queue.enqueue(1, 1.0);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_debug() {
    let queue: SortedQueue<u8> = [(7, 2.0), (8, 1.5)].into_iter().collect();
    assert_eq!(
        format!("{queue:?}"),
        "SortedQueue { values: [8, 7], priorities: [1.5, 2.0], len: 2 }"
    );
}

proptest! {
    #[test]
    fn prop_dequeues_in_stable_order(
        priorities in proptest::collection::vec(-4_i8..4, 0..100),
        dequeues in 0_usize..100,
    ) {
        let mut queue = SortedQueue::new();
        for (id, priority) in priorities.iter().enumerate() {
            queue.enqueue(id, f64::from(*priority));
        }

        // A stable sort keeps ids with equal priorities in insertion order.
        let mut expected: Vec<usize> = (0..priorities.len()).collect();
        expected.sort_by_key(|id| priorities[*id]);

        for id in expected.iter().take(dequeues) {
            prop_assert_eq!(queue.try_dequeue(), Ok(*id));
            assert_sorted(&queue);
        }
        prop_assert_eq!(queue.len(), priorities.len().saturating_sub(dequeues));
    }
}
