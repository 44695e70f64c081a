//! Walking every node of a tree. Each walk takes a callback that is called exactly once per node;
//! the order it is called in is what distinguishes them.
//!
//! The walks are available on [`Tree`] (starting at the root) and on [`Node`] (starting anywhere).
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! //     4
//! //    / \
//! //   2   6
//! //  / \ / \
//! // 1  3 5  7
//! let tree = Tree::new(1..=7);
//!
//! let mut level = Vec::new();
//! tree.level_order(|node| level.push(*node.value()));
//! assert_eq!(level, [4, 2, 6, 1, 3, 5, 7]);
//!
//! let mut pre = Vec::new();
//! tree.pre_order(|node| pre.push(*node.value()));
//! assert_eq!(pre, [4, 2, 1, 3, 6, 5, 7]);
//!
//! let mut post = Vec::new();
//! tree.post_order(|node| post.push(*node.value()));
//! assert_eq!(post, [1, 3, 2, 5, 7, 6, 4]);
//! ```

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Node<T> {
    /// Breadth first: every node at depth `d` is visited before any node at depth `d + 1`, each
    /// level from left to right. The queue lives on the heap so this works at any height.
    pub fn level_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Self),
    {
        let mut queue = VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            queue.extend(node.left());
            queue.extend(node.right());
            visit(node);
        }
    }

    /// A node, then its left subtree, then its right subtree.
    ///
    /// # Stack
    ///
    /// Recurses once per level, so it needs stack space proportional to the height of the
    /// subtree. Walking a tree that has degraded into a very long list can overflow the stack;
    /// [`level_order`](Self::level_order) doesn't recurse.
    pub fn pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Self),
    {
        self.walk_pre_order(&mut visit);
    }

    /// A node's left subtree, then the node, then its right subtree. This visits values in
    /// ascending order.
    ///
    /// # Stack
    ///
    /// Recurses once per level, so it needs stack space proportional to the height of the
    /// subtree. Walking a tree that has degraded into a very long list can overflow the stack;
    /// [`level_order`](Self::level_order) doesn't recurse.
    pub fn in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Self),
    {
        self.walk_in_order(&mut visit);
    }

    /// A node's left subtree, then its right subtree, then the node.
    ///
    /// # Stack
    ///
    /// Recurses once per level, so it needs stack space proportional to the height of the
    /// subtree. Walking a tree that has degraded into a very long list can overflow the stack;
    /// [`level_order`](Self::level_order) doesn't recurse.
    pub fn post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Self),
    {
        self.walk_post_order(&mut visit);
    }

    fn walk_pre_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        visit(self);
        if let Some(left) = self.left() {
            left.walk_pre_order(visit);
        }
        if let Some(right) = self.right() {
            right.walk_pre_order(visit);
        }
    }

    fn walk_in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.walk_in_order(visit);
        }
        visit(self);
        if let Some(right) = self.right() {
            right.walk_in_order(visit);
        }
    }

    fn walk_post_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Self),
    {
        if let Some(left) = self.left() {
            left.walk_post_order(visit);
        }
        if let Some(right) = self.right() {
            right.walk_post_order(visit);
        }
        visit(self);
    }
}

impl<T> Tree<T> {
    /// See [`Node::level_order`]. Does nothing for an empty tree.
    pub fn level_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.level_order(visit);
        }
    }

    /// See [`Node::pre_order`]. Does nothing for an empty tree.
    pub fn pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.pre_order(visit);
        }
    }

    /// See [`Node::in_order`]. Does nothing for an empty tree.
    pub fn in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.in_order(visit);
        }
    }

    /// See [`Node::post_order`]. Does nothing for an empty tree.
    pub fn post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.post_order(visit);
        }
    }
}
