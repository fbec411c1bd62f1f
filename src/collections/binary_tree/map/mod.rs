//! A module containing [`AvlTreeMap`] and associated types.
//!
//! The tree is made of uniquely owned, boxed nodes. Each node stores the height of its subtree so
//! that the balance factor can be computed in constant time while retracing a path after an
//! insertion or removal.
//!
//! [`AvlTreeMap`] is also re-exported under the parent module.

mod avl_tree_map;
mod error;
mod node;
mod tests;

pub use avl_tree_map::*;
pub use error::*;
pub(crate) use node::*;
