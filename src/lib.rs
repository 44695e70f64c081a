//! This crate exposes a Binary Search Tree (BST) that is built balanced and only rebalanced when
//! asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of `Node`s on the longest path from the root `Node` to a leaf `Node`).
//!
//! ## Balance
//!
//! A tree is balanced when, for every `Node`, the heights of its two subtrees
//! differ by at most one. A balanced tree has a height of `O(lg N)`.
//!
//! [`Tree::new`] sorts its input and builds the tree by repeatedly picking the
//! middle value as the root of each subtree, so a freshly built tree is always
//! balanced. Unlike AVL or red-black trees, [`Tree::insert`] and
//! [`Tree::delete`] do not restore balance. A long run of ascending inserts
//! degrades the tree into a list. [`Tree::is_balanced`] reports whether this
//! has happened and [`Tree::rebalance`] rebuilds the tree from its values.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.height(), 4);
//!
//! for value in 100..110 {
//!     tree.insert(value).unwrap();
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 21);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
mod node;
mod traverse;
mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::TreeError;
pub use node::Node;
pub use tree::Tree;
