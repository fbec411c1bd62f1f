//! A module containing [`Array`], a fixed-size heap allocation.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration. Arrays are mostly used as the backing storage for
//! [`Vector`](super::Vector), so owned iteration is left to it.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
