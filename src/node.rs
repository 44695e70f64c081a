//! The building block of a [`Tree`](crate::Tree). A `Node` stores a value and owns up to two
//! children. It has no back-pointer to its parent so the whole structure is a plain tree of
//! `Box`es.

use std::fmt;

use crate::util::Direction;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` has a value and two optional children. Every value in the left subtree is smaller
/// than `value` and every value in the right subtree is larger.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new childless `Node`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn child(&self, direction: Direction) -> Option<&Self> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub(crate) fn child_mut(&mut self, direction: Direction) -> &mut Link<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// How many children this node has: 0, 1, or 2.
    pub fn children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// A node without children.
    pub fn is_leaf(&self) -> bool {
        self.children() == 0
    }

    /// Exactly one of the two children is present.
    pub fn has_one_child(&self) -> bool {
        self.children() == 1
    }

    /// Both children are present.
    pub fn has_two_children(&self) -> bool {
        self.children() == 2
    }

    /// The in-order successor of this node within its own subtree, i.e. the leftmost node of the
    /// right subtree. This is the node that takes this node's place when it is deleted while
    /// having two children.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::new([1, 2, 3, 4, 5]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.value(), &3);
    /// assert_eq!(root.successor().map(|n| *n.value()), Some(4));
    /// ```
    pub fn successor(&self) -> Option<&Self> {
        let mut current = self.right()?;
        while let Some(left) = current.left() {
            current = left;
        }
        Some(current)
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1 and an empty subtree has a height of 0.
    pub fn height(&self) -> usize {
        height(Some(self))
    }

    /// Whether, for every node in this subtree, the heights of its left and right subtrees differ
    /// by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }
}

// Shows the children's values rather than the children so formatting stays shallow.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Two subtrees are equal when they have the same shape and the same values in the same places.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

enum Step<'a, T> {
    /// Fold this subtree, pushing its result.
    Visit(Option<&'a Node<T>>),
    /// Both children's results are on top of the result stack.
    Combine(&'a Node<T>),
}

/// Folds a subtree bottom up. `empty` gives the result for a missing subtree and `combine` merges
/// a node with the results of its left and right subtrees. Pending work lives on the heap so
/// list-shaped trees of any height can be folded.
pub(crate) fn fold<'a, T, R>(
    node: Option<&'a Node<T>>,
    mut empty: impl FnMut() -> R,
    mut combine: impl FnMut(&'a Node<T>, R, R) -> R,
) -> R {
    let mut steps = vec![Step::Visit(node)];
    let mut results = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => results.push(empty()),
            Step::Visit(Some(node)) => {
                steps.push(Step::Combine(node));
                steps.push(Step::Visit(node.right()));
                steps.push(Step::Visit(node.left()));
            }
            Step::Combine(node) => {
                let right = results.pop();
                let left = results.pop();
                if let (Some(left), Some(right)) = (left, right) {
                    results.push(combine(node, left, right));
                }
            }
        }
    }

    results.pop().unwrap_or_else(empty)
}

/// Height of a possibly empty subtree.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> usize {
    fold(node, || 0, |_, left, right| left.max(right) + 1)
}

/// The height of the subtree if every node in it is balanced, `None` otherwise. Heights and
/// balance are checked in the same pass so each node is visited once.
pub(crate) fn balanced_height<T>(node: Option<&Node<T>>) -> Option<usize> {
    fold(
        node,
        || Some(0),
        |_, left: Option<usize>, right: Option<usize>| match (left, right) {
            (Some(left), Some(right)) if left.abs_diff(right) <= 1 => Some(left.max(right) + 1),
            _ => None,
        },
    )
}

/// A deep copy of a possibly empty subtree.
pub(crate) fn clone_link<T: Clone>(node: Option<&Node<T>>) -> Link<T> {
    fold(
        node,
        || None,
        |original, left, right| {
            Some(Box::new(Node {
                value: original.value.clone(),
                left,
                right,
            }))
        },
    )
}
