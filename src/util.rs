use std::cmp::Ordering;

use crate::node::{Link, Node};

/// Which child to descend into when searching for a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The step to take from `node` when looking for `value`, or `None` if `node` holds it.
    /// Smaller values go left and everything else goes right so ties route right.
    pub(crate) fn towards<T: Ord>(node: &Node<T>, value: &T) -> Option<Self> {
        match value.cmp(&node.value) {
            Ordering::Less => Some(Self::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Self::Right),
        }
    }
}

/// Walks down from `link` to the link holding `value`. If no node holds it, this is the empty
/// link where it would be inserted.
pub(crate) fn locate_mut<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    while let Some(direction) = link
        .as_deref()
        .and_then(|node| Direction::towards(node, value))
    {
        link = match link {
            Some(node) => node.child_mut(direction),
            None => break,
        };
    }

    link
}

/// Unlinks the smallest node of the subtree at `link`, splicing its right child (it can't have a
/// left one) into its place.
pub(crate) fn take_min<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_deref().is_some_and(|node| node.left.is_some()) {
        link = match link {
            Some(node) => &mut node.left,
            None => break,
        };
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}
