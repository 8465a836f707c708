//! Nodes of a [`Tree`] and the paths that lead to them.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::{Error, Tree};

/// Which child to descend into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller values.
    Left,
    /// Towards larger values.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// The turns taken from the root to reach a node. The root's path is empty.
///
/// # Examples
///
/// ```
/// use unbalanced_bst::{Direction, Path};
///
/// let path: Path = "right,left".parse().unwrap();
/// assert_eq!(&path[..], &[Direction::Right, Direction::Left]);
/// assert_eq!(path.to_string(), "[Right, Left]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Direction>);

impl Path {
    /// The empty path, leading to the root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path that continues this one by one more turn. `self` is left untouched.
    pub fn child(&self, direction: Direction) -> Self {
        let mut turns = Vec::with_capacity(self.0.len() + 1);
        turns.extend_from_slice(&self.0);
        turns.push(direction);
        Self(turns)
    }

    /// Number of edges between the root and the node at the end of this path.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Horizontal skew from the root's column: the absolute difference between the
    /// number of right and left turns.
    pub fn displacement(&self) -> usize {
        let rights = self.0.iter().filter(|&&d| d == Direction::Right).count();
        rights.abs_diff(self.0.len() - rights)
    }
}

impl Deref for Path {
    type Target = [Direction];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Direction>> for Path {
    fn from(turns: Vec<Direction>) -> Self {
        Self(turns)
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, direction) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{direction}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::root());
        }
        s.split(',').map(str::parse::<Direction>).collect()
    }
}

/// Identifies a node within its tree. Only meaningful for the tree that handed it out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A node as stored in the tree's arena. The tree owns every node; `left` and `right`
/// are the owning links of the tree structure while `parent` only observes.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) value: K,
    pub(crate) path: Path,
    pub(crate) displacement: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Construct a childless node reached from `parent` via `path`.
    pub(crate) fn new(value: K, parent: Option<NodeId>, path: Path) -> Self {
        Self {
            value,
            displacement: path.displacement(),
            path,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// A borrowed view of one node of a [`Tree`]. This is what lookups return.
pub struct NodeRef<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
}

// Manual impls so `K` doesn't need to be `Clone`.
impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}
impl<K> Eq for NodeRef<'_, K> {}

impl<K> fmt::Debug for NodeRef<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("path", self.path())
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a Tree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node<K> {
        self.tree.node(self.id)
    }

    /// The identifier of this node within its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a K {
        &self.node().value
    }

    /// Number of edges from the root to this node. Always equal to `self.path().len()`.
    pub fn depth(&self) -> usize {
        self.node().path.depth()
    }

    /// Horizontal skew of this node from the root's column.
    pub fn displacement(&self) -> usize {
        self.node().displacement
    }

    /// The turns leading from the root to this node.
    pub fn path(&self) -> &'a Path {
        &self.node().path
    }

    /// The node this one hangs from, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| Self::new(self.tree, id))
    }

    /// The child holding smaller values, if any.
    pub fn left(&self) -> Option<Self> {
        self.child(Direction::Left)
    }

    /// The child holding larger values, if any.
    pub fn right(&self) -> Option<Self> {
        self.child(Direction::Right)
    }

    /// The child in the given direction, if any.
    pub fn child(&self, direction: Direction) -> Option<Self> {
        self.node()
            .child(direction)
            .map(|id| Self::new(self.tree, id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
}
