//! Values that can be stored in a [`Tree`][crate::Tree].
//!
//! A tree only ever holds values of a single kind. For ordinary Rust types
//! that is already enforced by the type parameter, so [`Key::kind`] falls
//! back to the type name and the check in `insert` can never fail. The
//! [`Value`] enum is different: it mixes integers and text in one type, and
//! reports a separate kind for each variant so that a tree of `Value`s
//! rejects a value whose kind differs from the ones it already holds.

use std::fmt;
use std::str::FromStr;

/// An ordered value with a runtime kind.
pub trait Key: Ord {
    /// A name for the kind of this value. Two values may only share a tree
    /// when their kinds are equal.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! impl_key {
    ($($t:ty),* $(,)?) => {
        $(impl Key for $t {})*
    };
}

impl_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, String,
);

impl Key for &str {}

/// A dynamically kinded value, as typed on a command line.
///
/// # Examples
///
/// ```
/// use unbalanced_bst::{Error, Tree, Value};
///
/// let mut tree = Tree::new();
/// tree.insert(Value::Int(4)).unwrap();
///
/// let err = tree.insert("four".parse::<Value>().unwrap()).unwrap_err();
/// assert_eq!(err, Error::TypeMismatch { expected: "int", found: "text" });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// A signed integer.
    Int(i64),
    /// Anything that isn't an integer.
    Text(String),
}

impl Key for Value {
    fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse()
            .map(Self::Int)
            .unwrap_or_else(|_| Self::Text(s.to_string())))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
