use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

#[derive(Clone)]
pub(crate) struct Entry<V> {
    pub value: V,
    pub priority: f64,
    /// The position of this entry in the order that entries were enqueued.
    pub seq: u64,
}

impl<V> Entry<V> {
    /// Returns true if this entry should leave the queue before `other`. Entries are ordered by
    /// priority first and then by insertion order, so no two entries of one queue are equal.
    pub fn precedes(&self, other: &Entry<V>) -> bool {
        match self.priority.total_cmp(&other.priority) {
            Ordering::Equal => self.seq < other.seq,
            ordering => ordering.is_lt(),
        }
    }
}

impl<V: Debug> Debug for Entry<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.value, self.priority)
    }
}
