//! Traversals of an [`OrderedTree`]: the three depth-first orders plus breadth-first level
//! order. Each iterator starts from the root when it is created and keeps its own stack or
//! queue, so traversals are lazy, restartable and never recurse.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let tree: OrderedTree<_, _> = [(2, "two"), (1, "one"), (3, "three")].into_iter().collect();
//!
//! let pre: Vec<_> = tree.pre_order_traversal().map(|(k, _)| *k).collect();
//! let ins: Vec<_> = tree.in_order_traversal().map(|(k, _)| *k).collect();
//! let post: Vec<_> = tree.post_order_traversal().map(|(k, _)| *k).collect();
//! let levels: Vec<_> = tree.level_order_traversal().map(|(k, _)| *k).collect();
//!
//! assert_eq!(pre, [2, 1, 3]);
//! assert_eq!(ins, [1, 2, 3]);
//! assert_eq!(post, [1, 3, 2]);
//! assert_eq!(levels, [2, 1, 3]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Node, OrderedTree};

impl<K, V> OrderedTree<K, V> {
    /// Visits each node before its left subtree, then its right subtree.
    pub fn pre_order_traversal(&self) -> PreOrder<'_, K, V> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits the left subtree, then the node, then the right subtree. Keys come out in
    /// ascending order.
    pub fn in_order_traversal(&self) -> InOrder<'_, K, V> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Visits both subtrees before the node itself.
    pub fn post_order_traversal(&self) -> PostOrder<'_, K, V> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }

    /// Visits the tree one level at a time from the root down, left to right within a level.
    pub fn level_order_traversal(&self) -> LevelOrder<'_, K, V> {
        LevelOrder {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Iterates over the key/value pairs in ascending key order.
    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.in_order_traversal()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator returned by [`OrderedTree::pre_order_traversal`].
pub struct PreOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    /// Yields the nodes themselves for crate-internal structural walks.
    pub(crate) fn next_node(&mut self) -> Option<&'a Node<K, V>> {
        let node = self.stack.pop()?;
        // Right goes first so left comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(node)
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| (&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for PreOrder<'_, K, V> {}

/// In-order iterator returned by [`OrderedTree::in_order_traversal`] and [`OrderedTree::iter`].
pub struct InOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for InOrder<'_, K, V> {}

/// Post-order iterator returned by [`OrderedTree::post_order_traversal`].
pub struct PostOrder<'a, K, V> {
    /// Each entry records whether the node's children have already been pushed.
    stack: Vec<(&'a Node<K, V>, bool)>,
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some((&node.key, &node.value));
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
        None
    }
}

impl<K, V> FusedIterator for PostOrder<'_, K, V> {}

/// Breadth-first iterator returned by [`OrderedTree::level_order_traversal`].
pub struct LevelOrder<'a, K, V> {
    queue: VecDeque<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for LevelOrder<'_, K, V> {}
