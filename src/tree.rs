//! The unbalanced Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(1);
//! assert_eq!(tree.search(&1), Some(&1));
//! assert_eq!(tree.height(), 0);
//!
//! // Deleting an element hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.search(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::accounting::SizeAccounting;
use crate::comparator::{Comparator, Natural};
use crate::error::Error;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree ordered by the comparator `C`. This can be
/// used for inserting, searching for, and deleting elements.
///
/// Elements comparing equal to one already stored are dropped on insert. The
/// tree never rotates, so its height depends entirely on insertion order.
///
/// `size` is a cached counter whose bookkeeping is picked with
/// [`with_accounting`][BinaryTree::with_accounting].
// TODO stack based Clone
#[derive(Clone)]
pub struct BinaryTree<T, C = Natural> {
    root: Link<T>,
    size: usize,
    comparator: C,
    accounting: SizeAccounting,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: Ord> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for BinaryTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> fmt::Debug for BinaryTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("size", &self.size)
            .field("accounting", &self.accounting)
            .field("root", &self.root)
            .finish()
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Generate a new, empty `BinaryTree` ordered by `T`'s own `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> BinaryTree<T, C> {
    /// Generate a new, empty `BinaryTree` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// // 2 sorts before 1 so it hangs to the left of the root.
    /// assert_eq!(tree.lca(&1, &2), Some(&1));
    /// assert_eq!(tree.level_with_max_sum(|x| i64::from(*x)), Some(1));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            accounting: SizeAccounting::default(),
        }
    }

    /// Picks how [`size`][BinaryTree::size] is maintained from here on.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{BinaryTree, SizeAccounting};
    ///
    /// let mut tree = BinaryTree::new().with_accounting(SizeAccounting::Exact);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn with_accounting(mut self, accounting: SizeAccounting) -> Self {
        self.accounting = accounting;
        self
    }

    /// The size accounting policy in use.
    pub fn accounting(&self) -> SizeAccounting {
        self.accounting
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The cached element count. See [`SizeAccounting`] for how duplicate
    /// inserts and missed deletes affect it.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of edges on the longest path from the root down to a leaf. An
    /// empty tree has height `-1` and a lone root has height `0`.
    ///
    /// This walks the whole tree on every call.
    pub fn height(&self) -> isize {
        Node::height(&self.root)
    }

    /// Releases every node, children before their parent, and resets `size`
    /// to zero. Clearing an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// tree.clear();
    ///
    /// assert_eq!(tree.size(), 0);
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        let mut released = 0usize;
        while let Some(top) = stack.last_mut() {
            // Detach children one at a time so a node is only popped (and freed) once both of its
            // subtrees are gone.
            match top.left.take().or_else(|| top.right.take()) {
                Some(child) => stack.push(child),
                None => {
                    stack.pop();
                    released += 1;
                }
            }
        }

        if released > 0 {
            tracing::trace!(released, "released tree nodes");
        }
        self.size = 0;
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T, C> BinaryTree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `element` into the tree. Returns whether a new node was created.
    /// An element comparing equal to a stored one is dropped and the tree is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    ///
    /// // The default accounting counts the dropped duplicate too.
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let created = match self.root.as_mut() {
            Some(root) => root.insert(element, &self.comparator),
            None => {
                self.root = Some(Node::new_boxed(element));
                true
            }
        };

        if created {
            tracing::trace!(size = self.size, "inserted element");
        } else {
            tracing::trace!("dropped duplicate element");
            if self.accounting == SizeAccounting::Reference {
                tracing::debug!(
                    size = self.size,
                    "duplicate insert still counted by reference accounting"
                );
            }
        }
        self.size = self.accounting.after_insert(self.size, created);
        created
    }

    /// Finds the stored element comparing equal to `element`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, element: &T) -> Option<&T> {
        self.root()
            .and_then(|root| root.search(element, &self.comparator))
    }

    /// Deletes the node comparing equal to `element` and returns its element.
    /// If nothing matches, the tree is unchanged and `None` is returned.
    ///
    /// A node with two children takes the element of its in-order successor,
    /// and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, element: &T) -> Option<T> {
        let removed = Node::delete(&mut self.root, element, &self.comparator);
        if removed.is_none() && self.accounting == SizeAccounting::Reference {
            tracing::debug!(
                size = self.size,
                "missed delete still counted by reference accounting"
            );
        }
        self.size = self.accounting.after_delete(self.size, removed.is_some());
        removed
    }

    /// Like [`delete`][BinaryTree::delete] but reports a missing element as
    /// [`Error::NotFound`]. A failed call never changes `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{BinaryTree, Error};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.checked_delete(&2), Err(Error::NotFound));
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(tree.checked_delete(&1), Ok(1));
    /// ```
    pub fn checked_delete(&mut self, element: &T) -> Result<T, Error> {
        let removed =
            Node::delete(&mut self.root, element, &self.comparator).ok_or(Error::NotFound)?;
        self.size = self.accounting.after_delete(self.size, true);
        Ok(removed)
    }
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    fn insert<C>(&mut self, element: T, comparator: &C) -> bool
    where
        C: Comparator<T>,
    {
        let child = match comparator.compare(&element, &self.element) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(element, comparator),
            None => {
                *child = Some(Self::new_boxed(element));
                true
            }
        }
    }

    fn search<C>(&self, element: &T, comparator: &C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let child = match comparator.compare(element, &self.element) {
            Ordering::Less => &self.left,
            Ordering::Equal => return Some(&self.element),
            Ordering::Greater => &self.right,
        };
        child.as_deref()?.search(element, comparator)
    }

    /// Deletes the node comparing equal to `element` from the subtree hanging off `link`,
    /// relinking `link` when the subtree's root itself goes away.
    fn delete<C>(link: &mut Link<T>, element: &T, comparator: &C) -> Option<T>
    where
        C: Comparator<T>,
    {
        let node = link.as_mut()?;
        match comparator.compare(element, &node.element) {
            Ordering::Less => Self::delete(&mut node.left, element, comparator),
            Ordering::Greater => Self::delete(&mut node.right, element, comparator),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                // The successor is the leftmost node of the right subtree. It has no left child so
                // unlinking it is one of the simple cases below.
                let successor = Self::take_leftmost(&mut node.right)?;
                tracing::trace!("promoted in-order successor");
                Some(mem::replace(&mut node.element, successor))
            }
            Ordering::Equal => {
                let Node {
                    element,
                    left,
                    right,
                } = *link.take()?;
                *link = left.or(right);
                tracing::trace!("removed node");
                Some(element)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree hanging off `link`, returning its element.
    fn take_leftmost(link: &mut Link<T>) -> Option<T> {
        if link.as_ref()?.left.is_some() {
            return Self::take_leftmost(&mut link.as_mut()?.left);
        }

        let Node { element, right, .. } = *link.take()?;
        *link = right;
        Some(element)
    }

    fn height(link: &Link<T>) -> isize {
        match link {
            None => -1,
            Some(n) => 1 + Self::height(&n.left).max(Self::height(&n.right)),
        }
    }
}

#[cfg(test)]
impl<T, C> BinaryTree<T, C> {
    /// Elements in sorted order.
    pub(crate) fn in_order(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(n) = link {
                walk(&n.left, out);
                out.push(&n.element);
                walk(&n.right, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }
}
