//! Linked collection types. Currently just [`Deque`], a double-ended queue made of linked,
//! fixed-capacity sections.

pub mod deque;

#[doc(inline)]
pub use deque::Deque;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
