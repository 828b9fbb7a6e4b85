//! Height bookkeeping and AVL rotations.
//!
//! Every function here takes an owned subtree root and hands back the root of
//! the restructured subtree. The caller stores the returned box in whichever
//! slot the old root came from, so no node ever needs to know its parent.

use crate::avl::{Link, Node};
use log::trace;

/// Height of a possibly empty subtree. Empty is 0, a leaf is 1.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of `node`: right height minus left height.
pub(crate) fn shift<T>(node: &Node<T>) -> isize {
    height(&node.right) as isize - height(&node.left) as isize
}

/// Recomputes the cached height from the children's cached heights.
pub(crate) fn update_height<T>(node: &mut Node<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

pub(crate) fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    trace!("rotate left");

    // pivot's left subtree moves into the slot the pivot vacated
    node.right = pivot.left.take();
    update_height(&mut node);

    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

pub(crate) fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    trace!("rotate right");

    node.left = pivot.right.take();
    update_height(&mut node);

    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

/// Restores the balance invariant at `node`, assuming both children already
/// satisfy it, and returns the new subtree root.
///
/// A node that is already balanced comes back untouched apart from its cached
/// height being refreshed.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    update_height(&mut node);
    let balance = shift(&node);

    if balance > 1 {
        if node.right.as_deref().is_some_and(|right| shift(right) < 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else if balance < -1 {
        if node.left.as_deref().is_some_and(|left| shift(left) > 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else {
        node
    }
}
