//! An AVL tree with owned child links, cached heights and configurable
//! traversal order.
//!
//! ```
//! use balanced_search_tree::{Tree, TraverseMode, TreeOps};
//!
//! let mut tree = Tree::new();
//! tree.add_range([5, 3, 8]);
//! assert!(tree.contains(&3));
//! assert_eq!(tree.dump(TraverseMode::InOrder).to_string(), "  3\n5\n  8\n");
//! ```

pub mod avl;
mod balance;
pub mod traverse;
pub mod tree;

pub use avl::Tree;
pub use traverse::{Dump, ParseTraverseModeError, TraverseMode};
pub use tree::TreeOps;
