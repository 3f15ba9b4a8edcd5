//! Orderings used to place elements in a [`BinaryTree`][crate::BinaryTree].

use std::cmp::Ordering;

/// A strict total order over `T`.
///
/// `Less` means `a` belongs to the left of `b`, `Greater` to the right, and
/// `Equal` means the two are the same element as far as the tree is concerned.
/// A tree keeps its comparator for its whole life, so every call against one
/// tree is ordered the same way.
pub trait Comparator<T> {
    /// Three-way comparison of `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
