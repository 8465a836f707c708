//! An unbalanced Binary Search Tree (BST) whose nodes know where they are.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree never rebalances, so its shape is decided entirely by the order
//! values are inserted in. In exchange, each node records the path of
//! [`Direction`]s leading to it from the root, its depth, and its horizontal
//! displacement, and the whole tree can be drawn as ASCII art with
//! [`Tree::render`].
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let tree = Tree::from_values([4, 2, 3, 1, 6, 5, 7]).unwrap();
//! println!("{tree}");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod key;
mod node;
mod render;
mod tree;


pub use error::{Error, Result};
pub use key::{Key, Value};
pub use node::{Direction, NodeId, NodeRef, Path};
pub use tree::{Iter, Tree};
