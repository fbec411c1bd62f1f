//! A module containing [`Deque`] and the sections that it is built from.
//!
//! [`Deque`] is also re-exported under the parent module.

mod deque;
mod section;
mod tests;

pub use deque::*;
pub(crate) use section::*;
