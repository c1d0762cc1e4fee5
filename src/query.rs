//! Structural queries: how a key sits within the shape of an [`OrderedTree`].
//!
//! Lookups that miss are routine, so a missing key answers `None` (or an empty path) rather than
//! an error.

use crate::tree::{Node, OrderedTree};

impl<K, V> OrderedTree<K, V> {
    /// Counts the nodes with at least one child.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// assert_eq!(tree.count_internal(), 1);
    /// ```
    pub fn count_internal(&self) -> usize {
        let mut nodes = self.pre_order_traversal();
        let mut internal = 0;
        while let Some(node) = nodes.next_node() {
            if !node.is_leaf() {
                internal += 1;
            }
        }
        internal
    }

    /// The number of edges on the longest downward path from the node holding `key` to a leaf.
    /// A leaf has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = [(2, ()), (1, ()), (3, ()), (4, ())].into_iter().collect();
    /// assert_eq!(tree.height(&2), Some(2));
    /// assert_eq!(tree.height(&4), Some(0));
    /// assert_eq!(tree.height(&9), None);
    /// ```
    pub fn height(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.find_node(key).map(subtree_height)
    }

    /// The number of edges from the root to the node holding `key`. The root is at level 0.
    pub fn level(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        let mut level = 0;
        while let Some(node) = current {
            if *key == node.key {
                return Some(level);
            }
            current = node.next(key);
            level += 1;
        }
        None
    }

    /// One more than [`level`][Self::level]: the number of nodes on the path from the root to
    /// `key`, inclusive. This is not the child count of the node.
    pub fn degree(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.level(key).map(|level| level + 1)
    }

    /// The keys on the path from the root down to `key`, root first and `key` itself excluded.
    /// An absent key has no ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = [(5, ()), (3, ()), (4, ())].into_iter().collect();
    /// assert_eq!(tree.ancestor(&4), [&5, &3]);
    /// assert!(tree.ancestor(&5).is_empty());
    /// assert!(tree.ancestor(&6).is_empty());
    /// ```
    pub fn ancestor(&self, key: &K) -> Vec<&K>
    where
        K: Ord,
    {
        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *key == node.key {
                return path;
            }
            path.push(&node.key);
            current = node.next(key);
        }

        // Dead end: back out every key recorded on the way down. With the ordering intact this
        // only happens when `key` is absent.
        while path.pop().is_some() {}
        path
    }
}

/// Height of the subtree rooted at `root`, walked with an explicit stack.
fn subtree_height<K, V>(root: &Node<K, V>) -> usize {
    let mut stack = vec![(root, 0)];
    let mut height = 0;
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
        stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
    }
    height
}
