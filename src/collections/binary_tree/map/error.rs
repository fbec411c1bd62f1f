use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::EmptyContainer;

/// The requested key isn't present in the map.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("key not found in map")]
pub struct KeyNotFound;

/// The reasons that a removal from an [`AvlTreeMap`](super::AvlTreeMap) can fail.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant, TryInto)]
pub enum RemoveError {
    EmptyContainer(EmptyContainer),
    KeyNotFound(KeyNotFound),
}
