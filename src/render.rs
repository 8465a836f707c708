//! Draws a [`Tree`] as ASCII art.
//!
//! Each subtree is laid out on its own and then glued under its parent's label:
//!
//! ```text
//!   _4_
//!  /   \
//!  2   6
//! / \ / \
//! 1 3 5 7
//! ```
//!
//! Every line of a subtree's drawing is padded to the same width so drawings can be placed
//! side by side.

use std::fmt;

use crate::node::NodeRef;
use crate::Tree;

/// A drawn subtree.
#[derive(Debug, PartialEq, Eq)]
struct Layout {
    lines: Vec<String>,
    /// Characters per line.
    width: usize,
    /// Number of lines.
    height: usize,
    /// Column of the middle of the subtree root's label.
    middle: usize,
}

impl<K> Tree<K>
where
    K: fmt::Display,
{
    /// Draws the tree, one `String` per line. An empty tree has no lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]).unwrap();
    /// assert_eq!(tree.render(), [" 2 ", "/ \\", "1 3"]);
    /// ```
    pub fn render(&self) -> Vec<String> {
        self.root().map(|root| layout(root).lines).unwrap_or_default()
    }
}

/// Writes the lines of [`Tree::render`] separated by newlines.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

fn underscores(n: usize) -> String {
    "_".repeat(n)
}

/// Recursively lays out the subtree rooted at `node`.
///
/// Recursion depth is the height of the subtree.
fn layout<K>(node: NodeRef<'_, K>) -> Layout
where
    K: fmt::Display,
{
    let label = node.value().to_string();
    let u = label.chars().count();

    match (node.left(), node.right()) {
        (None, None) => Layout {
            lines: vec![label],
            width: u,
            height: 1,
            middle: u / 2,
        },

        (Some(left), None) => {
            let Layout {
                lines,
                width: n,
                height: p,
                middle: x,
            } = layout(left);

            let first = spaces(x + 1) + &underscores(n.saturating_sub(x + 1)) + &label;
            let second = spaces(x) + "/" + &spaces((n + u).saturating_sub(x + 1));
            let mut out = vec![first, second];
            out.extend(lines.into_iter().map(|line| line + &spaces(u)));

            Layout {
                lines: out,
                width: n + u,
                height: p + 2,
                middle: n + u / 2,
            }
        }

        (None, Some(right)) => {
            let Layout {
                lines,
                width: n,
                height: p,
                middle: x,
            } = layout(right);

            let first = label + &underscores(x) + &spaces(n.saturating_sub(x));
            let second = spaces(u + x) + "\\" + &spaces(n.saturating_sub(x + 1));
            let mut out = vec![first, second];
            out.extend(lines.into_iter().map(|line| spaces(u) + &line));

            Layout {
                lines: out,
                width: n + u,
                height: p + 2,
                middle: u / 2,
            }
        }

        (Some(left), Some(right)) => {
            let Layout {
                lines: mut left,
                width: n,
                height: p,
                middle: x,
            } = layout(left);
            let Layout {
                lines: mut right,
                width: m,
                height: q,
                middle: y,
            } = layout(right);

            let first = spaces(x + 1)
                + &underscores(n.saturating_sub(x + 1))
                + &label
                + &underscores(y)
                + &spaces(m.saturating_sub(y));
            let second = spaces(x)
                + "/"
                + &spaces((n + u + y).saturating_sub(x + 1))
                + "\\"
                + &spaces(m.saturating_sub(y + 1));

            // Pad the shorter side so both sides have the same number of lines.
            left.resize(p.max(q), spaces(n));
            right.resize(p.max(q), spaces(m));

            let gap = spaces(u);
            let mut out = vec![first, second];
            out.extend(
                left.into_iter()
                    .zip(right)
                    .map(|(l, r)| l + &gap + &r),
            );

            Layout {
                lines: out,
                width: n + m + u,
                height: p.max(q) + 2,
                middle: n + u / 2,
            }
        }
    }
}
