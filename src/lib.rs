//! This crate exposes an unbalanced, comparator-driven Binary Search Tree (BST)
//! along with two traversal queries built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the element that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element that compares less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element that compares greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Ordering comes from a [`Comparator`] handed to the tree when it is built.
//! Any `Fn(&T, &T) -> Ordering` closure is a comparator, and [`Natural`] uses
//! the element's own `Ord` implementation.
//!
//! This tree never rebalances. Inserting already-sorted elements degrades it
//! into a linked list with `O(n)` operations, so pick an insertion order with
//! care.
//!
//! ## Queries
//!
//! - [`BinaryTree::level_with_max_sum`] walks the tree breadth first and
//!   reports the level whose elements weigh the most.
//! - [`BinaryTree::lca`] finds the lowest common ancestor of two elements.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! for x in [10, 5, 15, 1, 7] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.search(&7), Some(&7));
//! assert_eq!(tree.level_with_max_sum(|x| i64::from(*x)), Some(1));
//! assert_eq!(tree.lca(&1, &7), Some(&5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod accounting;
mod comparator;
mod error;
mod level_sum;
mod lca;
mod queue;
mod tree;


pub use accounting::SizeAccounting;
pub use comparator::{Comparator, Natural};
pub use error::{Error, Operand};
pub use tree::BinaryTree;
