//! An unbalanced BST. Values are kept in the order they were inserted in: nothing is ever
//! rotated, so inserting sorted values builds a chain.
//!
//! Every node remembers the path that leads to it from the root, which makes it possible to
//! look nodes up by path as well as by value.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{Direction, Tree};
//!
//! let tree = Tree::from_values([4, 2, 3, 1, 6, 5, 7]).unwrap();
//!
//! let seven = tree.find_value(&7).unwrap();
//! assert_eq!(&seven.path()[..], &[Direction::Right, Direction::Right]);
//!
//! let five = tree.find_path(&[Direction::Right, Direction::Left]).unwrap();
//! assert_eq!(*five.value(), 5);
//!
//! assert_eq!(*tree.min_node().unwrap().value(), 1);
//! assert_eq!(*tree.max_node().unwrap().value(), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{Node, NodeId, NodeRef};
use crate::{Direction, Error, Key, Path, Result};

/// An unbalanced Binary Search Tree. Duplicate values are silently ignored.
pub struct Tree<K> {
    // Nodes are never removed so ids stay valid for the lifetime of the tree. The root, when
    // present, is always the first node.
    nodes: Vec<Node<K>>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Builds a tree by inserting `values` one at a time, in order. Since the tree doesn't
    /// rebalance, the order decides the shape.
    ///
    /// Fails on the first value whose kind differs from the first value's.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Key,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels in the tree. An empty tree has a height of 0, a lone root a height of 1.
    pub fn height(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.path.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root_id().map(|id| NodeRef::new(self, id))
    }

    /// Inserts `value` into the tree. If an equal value is already present, nothing happens.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if `value`'s [kind][Key::kind] differs from the values already
    /// in the tree. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: K) -> Result<()>
    where
        K: Key,
    {
        let Some(mut current) = self.root_id() else {
            trace!(depth = 0, "inserted root");
            self.nodes.push(Node::new(value, None, Path::root()));
            return Ok(());
        };

        loop {
            let node = self.node(current);
            if value.kind() != node.value.kind() {
                debug!(
                    expected = node.value.kind(),
                    found = value.kind(),
                    "rejected value of a different kind"
                );
                return Err(Error::TypeMismatch {
                    expected: node.value.kind(),
                    found: value.kind(),
                });
            }

            let direction = match value.cmp(&node.value) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => {
                    debug!(depth = node.path.depth(), "ignored duplicate value");
                    return Ok(());
                }
            };

            match node.child(direction) {
                Some(child) => current = child,
                None => {
                    let path = node.path.child(direction);
                    trace!(depth = path.depth(), %direction, "inserted value");
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(Node::new(value, Some(current), path));

                    let parent = &mut self.nodes[current.0];
                    match direction {
                        Direction::Left => parent.left = Some(id),
                        Direction::Right => parent.right = Some(id),
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Searches for the node holding `value`.
    ///
    /// If the value isn't in the tree, the **root** is returned instead. `None` is only
    /// returned for an empty tree. Use [`Tree::get`] to tell hits and misses apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]).unwrap();
    ///
    /// assert_eq!(*tree.find_value(&3).unwrap().value(), 3);
    /// // Misses fall back to the root.
    /// assert_eq!(*tree.find_value(&42).unwrap().value(), 2);
    /// ```
    pub fn find_value(&self, value: &K) -> Option<NodeRef<'_, K>>
    where
        K: Ord,
    {
        self.get(value).or_else(|| self.root())
    }

    /// Searches for the node holding `value`, returning `None` if it isn't in the tree.
    pub fn get(&self, value: &K) -> Option<NodeRef<'_, K>>
    where
        K: Ord,
    {
        let mut current = self.root_id()?;
        loop {
            let node = self.node(current);
            let direction = match value.cmp(&node.value) {
                Ordering::Less => Direction::Left,
                Ordering::Equal => return Some(NodeRef::new(self, current)),
                Ordering::Greater => Direction::Right,
            };
            current = node.child(direction)?;
        }
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &K) -> bool
    where
        K: Ord,
    {
        self.get(value).is_some()
    }

    /// Follows `path` from the root.
    ///
    /// If the path leads off the tree, the **root** is returned instead. An empty path also
    /// yields the root. `None` is only returned for an empty tree. Use [`Tree::get_path`] to
    /// tell hits and misses apart.
    pub fn find_path(&self, path: &[Direction]) -> Option<NodeRef<'_, K>> {
        self.get_path(path).or_else(|| self.root())
    }

    /// Follows `path` from the root, returning `None` if it leads off the tree.
    pub fn get_path(&self, path: &[Direction]) -> Option<NodeRef<'_, K>> {
        let mut current = self.root_id()?;
        for &direction in path {
            current = self.node(current).child(direction)?;
        }
        Some(NodeRef::new(self, current))
    }

    /// The node holding the smallest value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no root.
    pub fn min_node(&self) -> Result<NodeRef<'_, K>> {
        self.extreme(Direction::Left)
    }

    /// The node holding the largest value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no root.
    pub fn max_node(&self) -> Result<NodeRef<'_, K>> {
        self.extreme(Direction::Right)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root_id());
        iter
    }

    /// Follows `direction` from the root for as long as possible.
    fn extreme(&self, direction: Direction) -> Result<NodeRef<'_, K>> {
        let mut current = self.root_id().ok_or(Error::EmptyTree)?;
        while let Some(child) = self.node(current).child(direction) {
            current = child;
        }
        Ok(NodeRef::new(self, current))
    }

    fn root_id(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the values of a [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<NodeId>,
}

impl<K> Iter<'_, K> {
    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.tree.node(id).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.push_left_spine(node.right);
        Some(&node.value)
    }
}
