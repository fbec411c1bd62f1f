//! Various general-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. The queues and the
//! [`Deque`](linked::Deque) are built on [`Vector`](contiguous::Vector) rather than on [`Vec`].
//!
//! Each submodule is gated behind a Cargo feature of the same name, all of which are enabled by
//! the default `collections-all` feature.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "priority")]
pub mod priority;
