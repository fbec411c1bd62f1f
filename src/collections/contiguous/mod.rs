//! Contiguous collection types. Namely [`Array`] for runtime-sized allocations and [`Vector`] for
//! contiguous collections that vary in size at runtime.
//!
//! [`Vector`] is the growable array that the other collections in this crate are built on.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
