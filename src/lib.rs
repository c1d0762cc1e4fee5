//! This crate exposes an ordered key-value container backed by an unbalanced Binary Search Tree
//! (BST), along with the structural queries and traversals usually taught alongside one.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and a value
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. [`OrderedTree`] never rebalances, so inserting keys in sorted
//! order builds a tree whose height equals its size. Lookups, updates, traversals, rendering,
//! cloning and dropping all walk the tree with explicit stacks or queues, so such a tree is slow
//! but never overflows the call stack.
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for (key, value) in [(5, "five"), (3, "three"), (7, "seven"), (4, "four")] {
//!     tree.insert(key, value);
//! }
//!
//! assert_eq!(tree.search(&4), Some(&"four"));
//! assert_eq!(tree.level(&4), Some(2));
//! assert_eq!(tree.ancestor(&4), [&5, &3]);
//!
//! assert!(tree.delete(&3));
//! assert_eq!(tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [4, 5, 7]);
//! ```

#![deny(missing_docs)]

pub mod cli;
mod display;
mod query;
pub mod traversal;
mod tree;

pub use tree::OrderedTree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
