//! An immutable binary tree. Every node owns its two children, so a tree can
//! never share a node with another tree and can never contain a cycle.
//!
//! # Examples
//!
//! ```
//! use tree_equiv::Tree;
//!
//! let tree: Tree<i64> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(tree.to_string(), "((1) 2 (3))");
//! ```

use std::cmp;
use std::fmt;
use std::mem;

/// A binary tree of values. Either empty (a [`Leaf`][Tree::Leaf]) or a
/// [`Node`] holding a value and two subtrees.
#[derive(Clone, Debug)]
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

/// A `Node` has a value and always has two children, although
/// those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops nodes from an explicit stack so that a deep tree cannot overflow
/// the call stack.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Self::Node(n) = self {
            stack.push(mem::take(&mut *n.left));
            stack.push(mem::take(&mut *n.right));
        }
        while let Some(mut tree) = stack.pop() {
            if let Self::Node(n) = &mut tree {
                stack.push(mem::take(&mut *n.left));
                stack.push(mem::take(&mut *n.right));
            }
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Builds a tree whose root holds `value` with the given subtrees.
    /// No ordering is imposed, so any shape can be expressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_equiv::Tree;
    ///
    /// // A left-leaning chain: 3 at the root, 2 below it, 1 at the bottom.
    /// let chain = Tree::node(Tree::node(Tree::leaf(1), 2, Tree::new()), 3, Tree::new());
    ///
    /// assert_eq!(chain.height(), 3);
    /// assert_eq!(chain.to_string(), "(((1) 2) 3)");
    /// ```
    pub fn node(left: Tree<T>, value: T, right: Tree<T>) -> Self {
        Self::Node(Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Builds a single-node tree.
    pub fn leaf(value: T) -> Self {
        Self::node(Self::new(), value, Self::new())
    }

    /// Returns a new tree that includes `value`, placed in binary search
    /// order. Values less than a node go to its left; equal or greater
    /// values go to its right, so duplicates are kept.
    pub fn insert(mut self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        let mut slot = &mut self;
        while let Self::Node(n) = slot {
            slot = match value.cmp(&n.value) {
                cmp::Ordering::Less => &mut *n.left,
                cmp::Ordering::Equal | cmp::Ordering::Greater => &mut *n.right,
            };
        }
        *slot = Self::leaf(value);
        self
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Number of nodes in this tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// How many levels are in this tree. An empty tree has a height of 0
    /// and a single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((tree, depth)) = stack.pop() {
            if let Self::Node(n) = tree {
                height = height.max(depth);
                stack.push((&*n.left, depth + 1));
                stack.push((&*n.right, depth + 1));
            }
        }
        height
    }

    /// The value at the root, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&n.value),
        }
    }

    /// The left subtree of the root, if the tree is not empty.
    pub fn left(&self) -> Option<&Tree<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&*n.left),
        }
    }

    /// The right subtree of the root, if the tree is not empty.
    pub fn right(&self) -> Option<&Tree<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&*n.right),
        }
    }

    /// Iterates over the values in order (left subtree, node, right
    /// subtree) on the current thread.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }
}

impl<T> Node<T> {
    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree, possibly a [`Leaf`][Tree::Leaf].
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The right subtree, possibly a [`Leaf`][Tree::Leaf].
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    /// Inserts every value in iteration order, so the resulting shape
    /// depends on the order of the input.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]. Keeps the path to the next node on
/// an explicit stack rather than recursing.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &*n.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

/// Formats the tree as nested parentheses: `()` for an empty tree,
/// otherwise `(left value right)` with empty subtrees omitted.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("()"),
            Self::Node(n) => {
                f.write_str("(")?;
                if !n.left.is_empty() {
                    write!(f, "{} ", n.left)?;
                }
                write!(f, "{}", n.value)?;
                if !n.right.is_empty() {
                    write!(f, " {}", n.right)?;
                }
                f.write_str(")")
            }
        }
    }
}
