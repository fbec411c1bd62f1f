//! Priority queues, which hand back their values in ascending order of an `f64` priority.
//!
//! Two implementations are provided with the same interface:
//! - [`HeapQueue`], a binary min-heap stored in a flat [`Vector`](super::contiguous::Vector), with
//!   `O(log n)` enqueue and dequeue.
//! - [`SortedQueue`], which keeps its values fully sorted and finds the insertion point with a
//!   linear scan. Enqueueing is `O(n)`, but it supports
//!   [`change_priority`](SortedQueue::change_priority).
//!
//! Both queues compare priorities with [`f64::total_cmp`] and hand back values with equal
//! priorities in the order that they were enqueued.

mod error;
pub mod heap;
pub mod sorted;

pub use error::*;

#[doc(inline)]
pub use heap::HeapQueue;
#[doc(inline)]
pub use sorted::SortedQueue;
