use derive_more::{Display, Error};

/// The provided index was outside of the valid range for the collection.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// A capacity calculation overflowed, or the resulting allocation would exceed [`isize::MAX`]
/// bytes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// The operation requires at least one element, but the collection has none.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("operation requires at least one element but the collection is empty")]
pub struct EmptyContainer;
