//! An unbalanced Binary Search Tree that owns its nodes outright. Every child slot is an
//! `Option<Box<Node>>` so each node has exactly one owner and the whole tree is freed by
//! dropping the root.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.search(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.search(&1), Some(&3));
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

/// An owned child slot. `None` marks the empty pointer at the bottom of a subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree mapping keys to values. Keys are unique: inserting an existing key
/// replaces its value. No rebalancing is ever performed, so inserting keys in sorted order
/// produces a tree shaped like a linked list.
pub struct OrderedTree<K, V> {
    pub(crate) root: Link<K, V>,
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with
/// that key. Either child may be empty.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// A node with no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child slot a search for `key` continues into. Only meaningful when `key` is not
    /// equal to this node's key.
    pub(crate) fn next(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        if *key < self.key {
            self.left.as_deref()
        } else {
            self.right.as_deref()
        }
    }
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for OrderedTree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Clone for OrderedTree<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Copies node for node, so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut pending: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
        if let Some(source) = self.root.as_deref() {
            pending.push((source, &mut root));
        }
        while let Some((source, slot)) = pending.pop() {
            let node = slot.insert(Node::new_boxed(source.key.clone(), source.value.clone()));
            let Node { left, right, .. } = &mut **node;
            if let Some(source_left) = source.left.as_deref() {
                pending.push((source_left, left));
            }
            if let Some(source_right) = source.right.as_deref() {
                pending.push((source_right, right));
            }
        }
        Self { root }
    }
}

impl<K, V> fmt::Debug for OrderedTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Discards every node, returning the tree to its initial empty state.
    ///
    /// Nodes are released from an explicit work list rather than by recursive `Drop` so a
    /// tree built from sorted input doesn't exhaust the call stack.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        let mut released = 0usize;
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            released += 1;
        }
        trace!(released, "cleared tree");
    }

    /// Returns `true` if the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of key/value pairs stored in the tree. This walks every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.find_node(key).map(|node| &node.value)
    }

    /// Like [`search`][Self::search] but hands back the value for in-place modification.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        self.slot_mut(key).as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns `true` if a node with the given key exists.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find_node(key).is_some()
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for
    /// an existing key overwrites its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.search(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.search(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let slot = self.slot_mut(&key);
        match slot {
            Some(node) => {
                trace!("replacing value of existing key");
                node.value = value;
            }
            None => *slot = Some(Node::new_boxed(key, value)),
        }
    }

    /// Deletes the node containing the given key and reports whether it was present. If the
    /// tree does not contain the key, nothing happens and `false` is returned.
    ///
    /// A node with two children is removed by merging: its right subtree is hung off the
    /// rightmost node of its left subtree and the left subtree takes the node's place. Every
    /// key on the left is smaller than every key on the right, so the ordering survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert!(tree.delete(&1));
    /// assert_eq!(tree.search(&1), None);
    /// assert!(!tree.delete(&1));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let slot = self.slot_mut(key);
        let Some(mut target) = slot.take() else {
            trace!("key not present");
            return false;
        };

        *slot = match (target.left.take(), target.right.take()) {
            (None, None) => {
                debug!("deleted leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!("deleted node with one child");
                Some(child)
            }
            (Some(mut left), Some(right)) => {
                // Find the in-order predecessor: the end of the left subtree's right spine.
                let mut spine = &mut left.right;
                while let Some(node) = spine {
                    spine = &mut node.right;
                }
                *spine = Some(right);
                debug!("deleted node with two children by merging subtrees");
                Some(left)
            }
        };
        true
    }

    /// Descends by key comparison and returns the node holding `key`, if any.
    pub(crate) fn find_node(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *key == node.key {
                return Some(node);
            }
            current = node.next(key);
        }
        None
    }

    /// Returns the slot where `key` lives: either the occupied slot holding it or the empty slot
    /// a new node for it would be attached to.
    fn slot_mut(&mut self, key: &K) -> &mut Link<K, V>
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return slot,
            };
            if ordering == Ordering::Equal {
                return slot;
            }
            if let Some(node) = slot {
                slot = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedTree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for OrderedTree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
