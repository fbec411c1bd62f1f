use derive_more::{Display, Error};

#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// The requested value isn't present in the queue.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("value not found in queue")]
pub struct ValueNotFound;
