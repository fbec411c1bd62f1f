use std::fmt::{self, Debug, Formatter};

use super::Entry;
use crate::collections::contiguous::Vector;
use crate::collections::priority::EmptyContainer;
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// A priority queue implemented as a binary min-heap over a flat [`Vector`].
///
/// The entry at index `i` has its children at `2i + 1` and `2i + 2`, so the shape of the tree is
/// implied by the length alone and no links are stored. Every entry precedes both of its
/// children, which keeps the entry with the lowest priority at index 0.
///
/// Priorities are compared with [`f64::total_cmp`]. Values with equal priorities are dequeued in
/// the order that they were enqueued.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the HeapQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(log n)`*, `O(n)` |
/// | `dequeue` | `O(log n)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the underlying Vector has to grow, `enqueue` will take `O(n)`.
#[derive(Clone)]
pub struct HeapQueue<V> {
    pub(crate) entries: Vector<Entry<V>>,
    pub(crate) next_seq: u64,
}

impl<V> HeapQueue<V> {
    /// Creates a new, empty HeapQueue.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::priority::HeapQueue;
    /// let mut queue = HeapQueue::new();
    /// queue.enqueue('A', 5.0);
    /// queue.enqueue('B', 3.0);
    /// queue.enqueue('C', 8.0);
    ///
    /// assert_eq!(queue.dequeue(), 'B');
    /// assert_eq!(queue.dequeue(), 'A');
    /// assert_eq!(queue.dequeue(), 'C');
    /// assert!(queue.try_dequeue().is_err());
    /// ```
    pub fn new() -> HeapQueue<V> {
        HeapQueue {
            entries: Vector::new(),
            next_seq: 0,
        }
    }

    /// Creates a new HeapQueue with room for `cap` values before it has to reallocate.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> HeapQueue<V> {
        HeapQueue {
            entries: Vector::with_cap(cap),
            next_seq: 0,
        }
    }

    /// Returns the number of values in the HeapQueue.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the HeapQueue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `value` to the queue with the provided `priority`.
    pub fn enqueue(&mut self, value: V, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.push(Entry {
            value,
            priority,
            seq,
        });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the value with the lowest priority.
    ///
    /// # Panics
    /// Panics if the HeapQueue is empty.
    pub fn dequeue(&mut self) -> V {
        self.try_dequeue().throw()
    }

    /// Removes and returns the value with the lowest priority, or [`EmptyContainer`] if there are
    /// no values.
    pub fn try_dequeue(&mut self) -> Result<V, EmptyContainer> {
        let last = self.entries.len().checked_sub(1).ok_or(EmptyContainer)?;

        self.entries.swap(0, last);
        let entry = self.entries.pop().ok_or(EmptyContainer)?;
        self.sift_down(0);

        Ok(entry.value)
    }

    /// Returns a reference to the value with the lowest priority.
    ///
    /// # Panics
    /// Panics if the HeapQueue is empty.
    pub fn peek(&self) -> &V {
        self.try_peek().throw()
    }

    /// Returns a reference to the value with the lowest priority, or [`EmptyContainer`] if there
    /// are no values.
    pub fn try_peek(&self) -> Result<&V, EmptyContainer> {
        self.entries.first().map(|e| &e.value).ok_or(EmptyContainer)
    }

    /// Returns the lowest priority in the queue.
    ///
    /// # Panics
    /// Panics if the HeapQueue is empty.
    pub fn peek_priority(&self) -> f64 {
        self.try_peek_priority().throw()
    }

    /// Returns the lowest priority in the queue, or [`EmptyContainer`] if there are no values.
    pub fn try_peek_priority(&self) -> Result<f64, EmptyContainer> {
        self.entries.first().map(|e| e.priority).ok_or(EmptyContainer)
    }

    /// Drops every value in the queue. The allocated capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.entries[index].precedes(&self.entries[parent]) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let (left, right) = (left(index), right(index));
            let mut first = index;

            if left < len && self.entries[left].precedes(&self.entries[first]) {
                first = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[first]) {
                first = right;
            }
            if first == index {
                break;
            }

            self.entries.swap(index, first);
            index = first;
        }
    }

    /// Checks that every entry precedes both of its children.
    ///
    /// # Panics
    /// Panics if the heap property is violated.
    #[cfg(test)]
    pub(crate) fn verify_heap(&self) {
        for index in 1..self.entries.len() {
            assert!(
                self.entries[parent(index)].precedes(&self.entries[index]),
                "Each entry should precede its children (index {index})."
            );
        }
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn left(index: usize) -> usize {
    2 * index + 1
}

const fn right(index: usize) -> usize {
    2 * index + 2
}

impl<V> Default for HeapQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(V, f64)> for HeapQueue<V> {
    fn extend<I: IntoIterator<Item = (V, f64)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);

        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<V> FromIterator<(V, f64)> for HeapQueue<V> {
    fn from_iter<I: IntoIterator<Item = (V, f64)>>(iter: I) -> Self {
        let mut queue = HeapQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<V: Debug> Debug for HeapQueue<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapQueue")
            .field("entries", &DebugList(&self.entries))
            .field("len", &self.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}
