//! A module containing [`HeapQueue`], a priority queue stored as an implicit binary heap.
//!
//! [`HeapQueue`] is also re-exported under the parent module.

mod entry;
mod heap_queue;

pub(crate) use entry::*;
pub use heap_queue::*;
