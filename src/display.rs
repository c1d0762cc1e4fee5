//! A sideways rendering of an [`OrderedTree`] for terminals. The tree is rotated 90°
//! counter-clockwise: right subtrees print above their parent, left subtrees below, and the root
//! sits flush against the left margin.
//!
//! ```text
//!      ┌───8
//! ┌───7
//! |    └───6
//! 5
//! |    ┌───4
//! └───3
//!      └───2
//! ```

use std::fmt;

use crate::tree::{Node, OrderedTree};

const RIGHT_BRANCH: &str = "┌───";
const LEFT_BRANCH: &str = "└───";
const BAR: &str = "|    ";
const GAP: &str = "     ";

impl<K, V> fmt::Display for OrderedTree<K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root.as_deref() else {
            return Ok(());
        };
        let mut indent = String::new();
        if let Some(right) = root.right.as_deref() {
            write_branch(f, right, true, &mut indent)?;
        }
        writeln!(f, "{}", root.key)?;
        if let Some(left) = root.left.as_deref() {
            write_branch(f, left, false, &mut indent)?;
        }
        Ok(())
    }
}

/// One pending piece of work while rendering a subtree.
enum Step<'a, K, V> {
    /// Extend the indent left at `parent_len` by `segment`, then lay out `node`.
    Enter {
        node: &'a Node<K, V>,
        is_right: bool,
        parent_len: usize,
        segment: &'static str,
    },
    /// Print `node` with the first `len` bytes of the indent, then lay out its left subtree.
    Emit {
        node: &'a Node<K, V>,
        is_right: bool,
        len: usize,
    },
}

/// Writes the subtree under `node`: right subtree first, then the node, then the left subtree.
/// A bar continues down the side facing the parent so siblings line up. Walked with an explicit
/// stack sharing one indent buffer, so a tree of any height renders.
fn write_branch<K, V>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K, V>,
    is_right: bool,
    indent: &mut String,
) -> fmt::Result
where
    K: fmt::Display,
{
    indent.clear();
    let mut stack = vec![Step::Enter {
        node,
        is_right,
        parent_len: 0,
        segment: "",
    }];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter {
                node,
                is_right,
                parent_len,
                segment,
            } => {
                indent.truncate(parent_len);
                indent.push_str(segment);
                let len = indent.len();
                stack.push(Step::Emit {
                    node,
                    is_right,
                    len,
                });
                if let Some(right) = node.right.as_deref() {
                    stack.push(Step::Enter {
                        node: right,
                        is_right: true,
                        parent_len: len,
                        segment: if is_right { GAP } else { BAR },
                    });
                }
            }
            Step::Emit {
                node,
                is_right,
                len,
            } => {
                indent.truncate(len);
                f.write_str(indent.as_str())?;
                f.write_str(if is_right { RIGHT_BRANCH } else { LEFT_BRANCH })?;
                writeln!(f, "{}", node.key)?;
                if let Some(left) = node.left.as_deref() {
                    stack.push(Step::Enter {
                        node: left,
                        is_right: false,
                        parent_len: len,
                        segment: if is_right { BAR } else { GAP },
                    });
                }
            }
        }
    }
    Ok(())
}
