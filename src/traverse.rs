use crate::avl::Link;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spaces added per depth level in a [`Dump`].
const INDENT: usize = 2;

/// Order in which a traversal emits items relative to their children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraverseMode {
    /// Node, then left subtree, then right subtree.
    #[default]
    PreOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Left subtree, node, right subtree: ascending order.
    InOrder,
    /// Right subtree, node, left subtree: descending order.
    ReverseInOrder,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(
    "unknown traverse mode `{0}` (expected pre-order, post-order, in-order or reverse-in-order)"
)]
pub struct ParseTraverseModeError(String);

impl FromStr for TraverseMode {
    type Err = ParseTraverseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pre-order" | "preorder" | "pre" => Ok(TraverseMode::PreOrder),
            "post-order" | "postorder" | "post" => Ok(TraverseMode::PostOrder),
            "in-order" | "inorder" | "in" => Ok(TraverseMode::InOrder),
            "reverse-in-order" | "reverseinorder" | "reverse" => Ok(TraverseMode::ReverseInOrder),
            _ => Err(ParseTraverseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for TraverseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraverseMode::PreOrder => "pre-order",
            TraverseMode::PostOrder => "post-order",
            TraverseMode::InOrder => "in-order",
            TraverseMode::ReverseInOrder => "reverse-in-order",
        };
        f.write_str(name)
    }
}

/// Calls `f(depth, item)` for every item below `link` in the order `mode`
/// selects. The root of `link` is at `depth`.
pub(crate) fn visit<'a, T, F>(link: &'a Link<T>, depth: usize, mode: TraverseMode, f: &mut F)
where
    F: FnMut(usize, &'a T),
{
    let Some(node) = link else {
        return;
    };

    let (first, second) = match mode {
        TraverseMode::ReverseInOrder => (&node.right, &node.left),
        _ => (&node.left, &node.right),
    };

    if mode == TraverseMode::PreOrder {
        f(depth, &node.item);
    }
    visit(first, depth + 1, mode, f);
    if matches!(mode, TraverseMode::InOrder | TraverseMode::ReverseInOrder) {
        f(depth, &node.item);
    }
    visit(second, depth + 1, mode, f);
    if mode == TraverseMode::PostOrder {
        f(depth, &node.item);
    }
}

/// Indented text rendering of a tree, one item per line.
///
/// Meant for eyeballing the shape of a tree, not for parsing.
pub struct Dump<'a, T> {
    root: &'a Link<T>,
    mode: TraverseMode,
}

impl<'a, T> Dump<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, mode: TraverseMode) -> Self {
        Dump { root, mode }
    }
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        visit(self.root, 0, self.mode, &mut |depth, item| {
            if result.is_ok() {
                result = writeln!(f, "{:indent$}{item}", "", indent = depth * INDENT);
            }
        });
        result
    }
}
