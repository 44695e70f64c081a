//! # Tree errors.
//!
//! A `TreeError` is returned when an operation on a [`Tree`](crate::Tree) can't be carried out.
//! None of them leave the tree half-modified: a failed `insert` or `delete` is a no-op.

use thiserror::Error;

/// Tree error
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TreeError {
    /// The operation needs at least one node to navigate from.
    #[error("The tree is empty.")]
    Empty,
    /// No node holds the requested value.
    #[error("Value not found in the tree.")]
    NotFound,
    /// The root anchors the tree and can only be replaced by rebuilding it.
    #[error("Cannot delete root directly.")]
    CannotDeleteRoot,
    /// Values in a tree are unique.
    #[error("Value is already in the tree.")]
    Duplicate,
}
