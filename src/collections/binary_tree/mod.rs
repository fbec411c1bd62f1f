//! Binary tree based collections. Currently just [`AvlTreeMap`], a map kept balanced by AVL
//! rotations.

pub mod map;

#[doc(inline)]
pub use map::AvlTreeMap;
