//! A small library of generic collections: a growable array, a sectioned double-ended queue, an
//! ordered map kept balanced as an AVL tree and two priority queues.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. Writing
//! these data structures is a way to understand and appreciate them properly, while still aiming
//! for code that could be.
//!
//! # Error Handling
//! Every operation that can fail for a reason other than running out of memory comes in two
//! forms. The `try_` form returns a [`Result`] with a strongly typed error, and the plain form
//! panics with that error's message. Errors are structs (often ZSTs) that implement
//! [`Error`](std::error::Error), combined with enums where an operation can fail in more than one
//! way, so that callers can match on them statically. A failed operation never modifies the
//! collection.
//!
//! # Dependencies
//! This crate uses `std` for allocation, but none of its collections are built on [`Vec`]. It also
//! depends on some derive macros because they remove the need for some very repetitive
//! programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
