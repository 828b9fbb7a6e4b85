use crate::balance;
use crate::traverse::{self, Dump, TraverseMode};
use crate::tree::TreeOps;
use log::debug;
use std::cmp::Ordering;
use std::fmt;

/// Height-balanced (AVL) binary search tree.
///
/// Items equal to an existing item are routed to its right on insertion, so
/// the tree behaves as a multiset. Rotations may later move an equal item to
/// the left of its twin; in-order traversal stays non-decreasing and lookups
/// find one of the equal items.
///
/// Both [`TreeOps::add`] and [`TreeOps::remove`] rebalance every node on the
/// path they touched before returning, so every node's subtrees differ in
/// height by at most one between calls.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
    traverse_mode: TraverseMode,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) height: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T: Ord> TreeOps<T> for Tree<T> {
    fn add(&mut self, item: T) {
        insert_into(&mut self.root, item);
        self.len += 1;
    }

    fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    fn search(&self, item: &T) -> Option<&T> {
        self.find(item).map(|node| &node.item)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    fn clear(&mut self) {
        debug!("clearing tree with {} items", self.len);
        self.root = None;
        self.len = 0;
    }

    fn len(&self) -> usize {
        Tree::len(self)
    }

    fn is_empty(&self) -> bool {
        Tree::is_empty(self)
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            root: None,
            len: 0,
            traverse_mode: TraverseMode::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        balance::height(&self.root)
    }

    /// Smallest item.
    pub fn first(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        Some(&cur.item)
    }

    /// Largest item.
    pub fn last(&self) -> Option<&T> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.item)
    }

    /// Items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Items in the order `mode` selects.
    pub fn traverse(&self, mode: TraverseMode) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len);
        traverse::visit(&self.root, 0, mode, &mut |_, item| items.push(item));
        items
    }

    /// Indented rendering of the tree in the order `mode` selects.
    pub fn dump(&self, mode: TraverseMode) -> Dump<'_, T> {
        Dump::new(&self.root, mode)
    }

    /// Mode used by the `Display` impl.
    pub fn traverse_mode(&self) -> TraverseMode {
        self.traverse_mode
    }

    pub fn set_traverse_mode(&mut self, mode: TraverseMode) {
        self.traverse_mode = mode;
    }
}

impl<T: Ord> Tree<T> {
    /// Removes one item equal to `item` and returns the stored item.
    pub fn take(&mut self, item: &T) -> Option<T> {
        let path = self.locate(item)?;
        let taken = unlink(&mut self.root, &path)?;
        self.len -= 1;
        debug!("removed item at depth {}, {} items left", path.len(), self.len);
        Some(taken)
    }

    fn find(&self, item: &T) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match item.cmp(&node.item) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Sides taken from the root down to the first node equal to `item`.
    /// An empty path means the root matched; the last side names the
    /// parent's slot holding the match.
    fn locate(&self, item: &T) -> Option<Vec<Side>> {
        let mut path = Vec::new();
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            let side = match item.cmp(&node.item) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(path),
            };
            path.push(side);
            cur = node.child(side).as_deref();
        }
        None
    }
}

impl<T> Node<T> {
    pub(crate) fn leaf(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

fn insert_into<T: Ord>(slot: &mut Link<T>, item: T) {
    let Some(mut node) = slot.take() else {
        *slot = Some(Node::leaf(item));
        return;
    };

    if item < node.item {
        insert_into(&mut node.left, item);
    } else {
        insert_into(&mut node.right, item);
    }
    *slot = Some(balance::rebalance(node));
}

/// Follows `path` from `slot`, splices out the node at its end and
/// rebalances every node passed on the way back up.
fn unlink<T>(slot: &mut Link<T>, path: &[Side]) -> Option<T> {
    let mut node = slot.take()?;
    let Some((&side, rest)) = path.split_first() else {
        let (replacement, item) = splice_out(node);
        *slot = replacement;
        return Some(item);
    };

    let taken = unlink(node.child_mut(side), rest);
    *slot = Some(balance::rebalance(node));
    taken
}

/// Removes `node` from its subtree, returning what should take its place
/// together with its item.
fn splice_out<T>(node: Box<Node<T>>) -> (Link<T>, T) {
    let Node {
        item, left, right, ..
    } = *node;

    match (left, right) {
        (left, None) => (left, item),
        (None, right) => (right, item),
        (Some(left), Some(right)) => {
            let (rest, mut successor) = detach_leftmost(right);
            successor.left = Some(left);
            successor.right = rest;
            (Some(balance::rebalance(successor)), item)
        }
    }
}

/// Detaches the left-most node below `node`. Its right subtree takes its
/// place in its former parent's left slot.
fn detach_leftmost<T>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, leftmost) = detach_leftmost(left);
            node.left = rest;
            (Some(balance::rebalance(node)), leftmost)
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.add_range(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.take());
        iter
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> IntoIter<T> {
    fn push_left(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { item, right, .. } = *node;
        self.push_left(right);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dump(self.traverse_mode), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("item", &self.item)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
