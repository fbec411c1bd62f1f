use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Vector;
use crate::collections::priority::{EmptyContainer, ValueNotFound};
use crate::util::fmt::DebugList;
use crate::util::result::ResultExtension;

/// A priority queue which stores its values in ascending order of priority, in two parallel
/// [`Vector`]s.
///
/// A new value is inserted before the first stored priority that is strictly greater than its
/// own, so values with equal priorities stay in the order that they were enqueued. Finding that
/// position is a linear scan, which makes SortedQueue best suited to small queues or to uses that
/// need [`change_priority`](SortedQueue::change_priority).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the SortedQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(n)` |
/// | `dequeue` | `O(n)` |
/// | `peek` | `O(1)` |
/// | `change_priority` | `O(n)` |
/// | `clear` | `O(n)` |
#[derive(Clone)]
pub struct SortedQueue<V> {
    pub(crate) priorities: Vector<f64>,
    pub(crate) values: Vector<V>,
}

impl<V> SortedQueue<V> {
    /// Creates a new, empty SortedQueue.
    ///
    /// # Examples
    /// ```
    /// # use standard_collections::collections::priority::SortedQueue;
    /// let mut queue = SortedQueue::new();
    /// queue.enqueue("low", 1.0);
    /// queue.enqueue("high", 9.0);
    /// queue.change_priority(&"high", 0.5);
    ///
    /// assert_eq!(queue.peek(), &"high");
    /// assert_eq!(queue.peek_priority(), 0.5);
    /// ```
    pub fn new() -> SortedQueue<V> {
        SortedQueue {
            priorities: Vector::new(),
            values: Vector::new(),
        }
    }

    /// Returns the number of values in the SortedQueue.
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the SortedQueue contains no values.
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds `value` to the queue with the provided `priority`, after any values with the same
    /// priority.
    pub fn enqueue(&mut self, value: V, priority: f64) {
        let index = self
            .priorities
            .iter()
            .position(|p| p.total_cmp(&priority).is_gt())
            .unwrap_or(self.len());

        self.priorities.insert(index, priority);
        self.values.insert(index, value);
    }

    /// Removes and returns the value with the lowest priority.
    ///
    /// # Panics
    /// Panics if the SortedQueue is empty.
    pub fn dequeue(&mut self) -> V {
        self.try_dequeue().throw()
    }

    /// Removes and returns the value with the lowest priority, or [`EmptyContainer`] if there are
    /// no values.
    pub fn try_dequeue(&mut self) -> Result<V, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        self.priorities.remove(0);
        Ok(self.values.remove(0))
    }

    /// Returns a reference to the value with the lowest priority.
    ///
    /// # Panics
    /// Panics if the SortedQueue is empty.
    pub fn peek(&self) -> &V {
        self.try_peek().throw()
    }

    /// Returns a reference to the value with the lowest priority, or [`EmptyContainer`] if there
    /// are no values.
    pub fn try_peek(&self) -> Result<&V, EmptyContainer> {
        self.values.first().ok_or(EmptyContainer)
    }

    /// Returns the lowest priority in the queue.
    ///
    /// # Panics
    /// Panics if the SortedQueue is empty.
    pub fn peek_priority(&self) -> f64 {
        self.try_peek_priority().throw()
    }

    /// Returns the lowest priority in the queue, or [`EmptyContainer`] if there are no values.
    pub fn try_peek_priority(&self) -> Result<f64, EmptyContainer> {
        self.priorities.first().copied().ok_or(EmptyContainer)
    }

    /// Drops every value in the queue.
    pub fn clear(&mut self) {
        self.priorities.clear();
        self.values.clear();
    }
}

impl<V: PartialEq> SortedQueue<V> {
    /// Moves the first value equal to `value` to the position for `priority`.
    ///
    /// # Panics
    /// Panics if no value in the queue is equal to `value`.
    pub fn change_priority(&mut self, value: &V, priority: f64) {
        self.try_change_priority(value, priority).throw()
    }

    /// Moves the first value equal to `value` to the position for `priority`, or returns
    /// [`ValueNotFound`] without modifying the queue. The moved value is placed after any others
    /// that already have the new priority.
    pub fn try_change_priority(&mut self, value: &V, priority: f64) -> Result<(), ValueNotFound> {
        let index = self
            .values
            .iter()
            .position(|v| v == value)
            .ok_or(ValueNotFound)?;

        self.priorities.remove(index);
        let stored = self.values.remove(index);
        self.enqueue(stored, priority);
        Ok(())
    }
}

impl<V> Default for SortedQueue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(V, f64)> for SortedQueue<V> {
    fn extend<I: IntoIterator<Item = (V, f64)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<V> FromIterator<(V, f64)> for SortedQueue<V> {
    fn from_iter<I: IntoIterator<Item = (V, f64)>>(iter: I) -> Self {
        let mut queue = SortedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<V: Debug> Debug for SortedQueue<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedQueue")
            .field("values", &DebugList(&self.values))
            .field("priorities", &DebugList(&self.priorities))
            .field("len", &self.len())
            .finish()
    }
}
