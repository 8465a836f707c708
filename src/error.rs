use thiserror::Error;

/// Errors produced by [`Tree`][crate::Tree] operations and by the parsers in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value of a different kind than the ones already in the tree was inserted.
    #[error("values in the same tree must be of the same kind: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind of the values already stored in the tree.
        expected: &'static str,
        /// Kind of the rejected value.
        found: &'static str,
    },

    /// An operation that needs a root was called on an empty tree.
    #[error("tree is empty")]
    EmptyTree,

    /// A token couldn't be parsed as a [`Direction`][crate::Direction].
    #[error("invalid direction {0:?}, expected `left` or `right`")]
    InvalidDirection(String),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
