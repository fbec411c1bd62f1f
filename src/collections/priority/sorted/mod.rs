//! A module containing [`SortedQueue`], a priority queue kept as a fully sorted sequence.
//!
//! [`SortedQueue`] is also re-exported under the parent module.

mod sorted_queue;
mod tests;

pub use sorted_queue::*;
