//! A Binary Search Tree that is balanced when it is built and stays that way only until it is
//! mutated. Inserts and deletes never restructure the tree; call [`Tree::rebalance`] to rebuild a
//! balanced shape on demand.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Tree, TreeError};
//!
//! // Duplicates are dropped and the values are sorted before building.
//! let mut tree = Tree::new([4, 1, 3, 1, 2]);
//! assert_eq!(tree.values(), vec![&1, &2, &3, &4]);
//! assert!(tree.is_balanced());
//!
//! tree.insert(5).unwrap();
//! assert!(tree.contains(&5));
//! assert_eq!(tree.insert(5), Err(TreeError::Duplicate));
//!
//! // The root can't be deleted, anything else can.
//! let root = *tree.root().unwrap().value();
//! assert_eq!(tree.delete(&root), Err(TreeError::CannotDeleteRoot));
//! assert_eq!(tree.delete(&5), Ok(5));
//! assert_eq!(tree.find(&5), None);
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::error::TreeError;
use crate::node::{self, Link, Node};
use crate::util::{locate_mut, take_min, Direction};

/// A Binary Search Tree over unique values. This can be used for inserting, finding, and deleting
/// values, walking them in several orders, and checking or restoring the tree's balance.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(self.root()),
        }
    }
}

/// Trees are equal when they have the same shape, not just the same values.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level_order = Vec::new();
        self.level_order(|node| level_order.push(node.value()));
        f.debug_struct("Tree")
            .field("level_order", &level_order)
            .finish()
    }
}

impl<T> Default for Tree<T> {
    /// An empty tree. Nothing can be inserted into it, build one with [`Tree::new`] instead.
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> Drop for Tree<T> {
    // Dropping the root `Box` directly would recurse once per level which overflows the stack for
    // the list-shaped trees that ascending inserts produce.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::new(values)
    }
}

impl<T> Tree<T> {
    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        len
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(self.root())
    }

    /// Whether every node's left and right subtrees differ in height by at most one. An empty tree
    /// is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new([2]);
    /// tree.insert(3).unwrap();
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4).unwrap();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        node::balanced_height(self.root()).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }
        Some(current.value())
    }

    /// All values in ascending order.
    pub fn values(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            values.push(node.value());
            current = node.right();
        }
        values
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a balanced tree from `values`. Duplicates are dropped and the rest are sorted first
    /// so the input can be in any order.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let values = format_input(values);
        Self {
            root: build(values),
        }
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.value()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root()?;
        while let Some(direction) = Direction::towards(current, value) {
            current = current.child(direction)?;
        }
        Some(current)
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Finds the parent of the node holding `value`. `Ok(None)` means `value` is the root's.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] for an empty tree and [`TreeError::NotFound`] when no node holds
    /// `value`.
    pub fn parent(&self, value: &T) -> Result<Option<&Node<T>>, TreeError> {
        let mut current = self.root().ok_or(TreeError::Empty)?;
        let mut parent = None;
        while let Some(direction) = Direction::towards(current, value) {
            parent = Some(current);
            current = current.child(direction).ok_or(TreeError::NotFound)?;
        }
        Ok(parent)
    }

    /// The number of edges between the root and the node holding `value`, or `None` if no node
    /// holds it.
    pub fn depth(&self, value: &T) -> Option<usize> {
        let mut current = self.root()?;
        let mut depth = 0;
        while let Some(direction) = Direction::towards(current, value) {
            current = current.child(direction)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Adds `value` as a new leaf. The tree isn't rebalanced afterwards.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no root to insert under and [`TreeError::Duplicate`]
    /// if `value` is already present. The tree is unchanged in both cases.
    pub fn insert(&mut self, value: T) -> Result<(), TreeError> {
        if self.is_empty() {
            return Err(TreeError::Empty);
        }

        let link = locate_mut(&mut self.root, &value);
        if link.is_some() {
            return Err(TreeError::Duplicate);
        }
        *link = Some(Node::new_boxed(value));
        log::trace!("Inserted a new leaf");

        Ok(())
    }

    /// Removes the node holding `value` and returns the value. A node with two children is
    /// replaced by its in-order successor. The tree isn't rebalanced afterwards.
    ///
    /// # Errors
    ///
    /// - [`TreeError::Empty`] for an empty tree.
    /// - [`TreeError::CannotDeleteRoot`] if `value` is the root's. Rebuild the tree instead.
    /// - [`TreeError::NotFound`] if no node holds `value`.
    ///
    /// The tree is unchanged in all of these cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(tree.delete(&4), Ok(4));
    /// assert_eq!(tree.delete(&4), Err(TreeError::NotFound));
    /// assert_eq!(tree.delete(&3), Err(TreeError::CannotDeleteRoot));
    /// assert_eq!(tree.values(), vec![&1, &2, &3, &5]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, TreeError> {
        let root = self.root().ok_or(TreeError::Empty)?;
        if root.value() == value {
            log::warn!("Can't delete the root of the tree, rebuild it instead");
            return Err(TreeError::CannotDeleteRoot);
        }

        // `link` is the parent's slot for the node so it can be rewired in place.
        let link = locate_mut(&mut self.root, value);
        let mut removed = link.take().ok_or(TreeError::NotFound)?;
        let children = removed.children();

        *link = match (removed.left.take(), removed.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                take_min(&mut right).map(|mut successor| {
                    successor.left = Some(left);
                    successor.right = right;
                    successor
                })
            }
        };
        log::trace!("Deleted a node with {} children", children);

        let Node { value, .. } = *removed;
        Ok(value)
    }

    /// Rebuilds the tree into a balanced shape holding the same values.
    pub fn rebalance(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut values = Vec::new();
        let mut height_before = 0;
        let mut queue = VecDeque::from([(root, 1)]);
        while let Some((node, level)) = queue.pop_front() {
            let Node { value, left, right } = *node;
            queue.extend(left.map(|left| (left, level + 1)));
            queue.extend(right.map(|right| (right, level + 1)));
            values.push(value);
            height_before = level;
        }

        // Breadth first order isn't sorted order and `build` needs sorted input.
        values.sort_unstable();
        let len = values.len();
        self.root = build(values);

        log::debug!(
            "Rebalanced {} nodes from height {} to height {}",
            len,
            height_before,
            self.height()
        );
    }
}

/// Deduplicates and sorts `values` into the sequence a tree is built from.
fn format_input<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut values: Vec<T> = values.into_iter().collect();
    let len = values.len();
    values.sort_unstable();
    values.dedup();
    log::debug!("Building a tree from {} values, {} unique", len, values.len());
    values
}

/// Builds a balanced subtree from sorted values by making the middle value the root and building
/// each half the same way.
fn build<T>(sorted: Vec<T>) -> Link<T> {
    let len = sorted.len();
    build_range(&mut sorted.into_iter(), len)
}

/// Builds a subtree from the next `len` values of `values`. The left half takes
/// `(len - 1) / 2` values, so the root is the value at `floor((start + end) / 2)` of the range.
fn build_range<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let left_len = (len - 1) / 2;
    let left = build_range(values, left_len);
    let mut node = Node::new_boxed(values.next()?);
    node.left = left;
    node.right = build_range(values, len - 1 - left_len);

    Some(node)
}
