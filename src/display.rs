//! A diagnostic rendering of a tree's shape. The right subtree is drawn above a node and the left
//! subtree below it, so reading the output top to bottom gives values in descending order:
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```
//!
//! The format is meant for people, not for parsing.
//!
//! # Stack
//!
//! Rendering recurses once per level, so it needs stack space proportional to the tree's height.
//! Call [`Tree::rebalance`] before printing a tree that may have degraded into a long list.

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_subtree(f, root, "", true),
            None => Ok(()),
        }
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Logs the [`Display`](fmt::Display) rendering of the tree at `info` level.
    ///
    /// # Stack
    ///
    /// Rendering recurses once per level. Rebalance a tree that may have degraded into a long list
    /// before printing it.
    pub fn pretty_print(&self) {
        log::info!("\n{}", self);
    }
}

fn write_subtree<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_subtree(f, right, &prefix, false)?;
    }

    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_subtree(f, left, &prefix, true)?;
    }

    Ok(())
}
