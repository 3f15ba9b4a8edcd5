use std::fmt;

/// Failures reported by the `checked_*` operations of
/// [`BinaryTree`][crate::BinaryTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No stored element compares equal to the one asked for.
    #[error("element not found in tree")]
    NotFound,
    /// One of the two elements of a lowest common ancestor query isn't stored.
    #[error("{0} operand of the lowest common ancestor query is not in the tree")]
    MissingOperand(Operand),
    /// The query needs at least one element.
    #[error("tree is empty")]
    Empty,
}

/// Names an argument of a two-element query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The first element passed.
    First,
    /// The second element passed.
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}
