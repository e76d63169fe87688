//! A height-balanced (AVL) binary search tree.
//!
//! [`AvlTree`] stores unique values under a caller-supplied total order and keeps every
//! node's two subtrees within one level of each other, rotating nodes on the way back up
//! from each insertion and removal. Because the height of every node is cached, the tree can
//! also answer two structural queries in logarithmic time: the value of its deepest node
//! ([`AvlTree::max_deepest_node`]) and the deepest node shared by the search paths of two
//! values ([`AvlTree::deepest_common_ancestor`]).
//!
//! The order is given by a [`compare::Compare`] implementation fixed when the tree is
//! created, defaulting to the natural order of `Ord` types.
//!
//! The crate reports rotations at `trace` level and failed lookups at `debug` level through
//! the [`log`] facade.

#![deny(missing_docs)]

mod balance;
mod error;
mod node;
mod tree;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::Error;
pub use tree::AvlTree;
