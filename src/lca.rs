use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::error::{Error, Operand};
use crate::tree::{BinaryTree, Node};

impl<T, C> BinaryTree<T, C>
where
    C: Comparator<T>,
{
    /// Finds the lowest common ancestor of `a` and `b` with a postorder search.
    ///
    /// The search stops at the first node equal to either `a` or `b` without
    /// looking for the other one underneath it. When both are stored this is
    /// the real lowest common ancestor. When only one is stored, that one is
    /// returned; use [`checked_lca`][BinaryTree::checked_lca] to rule this
    /// out.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// for x in [20, 10, 30, 5, 15] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.lca(&5, &15), Some(&10));
    /// assert_eq!(tree.lca(&5, &30), Some(&20));
    ///
    /// // 99 isn't stored but 10 is.
    /// assert_eq!(tree.lca(&10, &99), Some(&10));
    /// assert_eq!(tree.lca(&98, &99), None);
    /// ```
    pub fn lca(&self, a: &T, b: &T) -> Option<&T> {
        self.root()
            .and_then(|root| root.lca(a, b, self.comparator()))
            .map(|node| &node.element)
    }

    /// Like [`lca`][BinaryTree::lca] but first makes sure both `a` and `b` are
    /// stored, failing with [`Error::MissingOperand`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{BinaryTree, Error, Operand};
    ///
    /// let mut tree = BinaryTree::new();
    /// for x in [20, 10, 30] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.checked_lca(&10, &30), Ok(&20));
    /// assert_eq!(tree.checked_lca(&10, &99), Err(Error::MissingOperand(Operand::Second)));
    /// ```
    pub fn checked_lca(&self, a: &T, b: &T) -> Result<&T, Error> {
        self.search(a).ok_or(Error::MissingOperand(Operand::First))?;
        self.search(b).ok_or(Error::MissingOperand(Operand::Second))?;
        self.lca(a, b).ok_or(Error::NotFound)
    }
}

impl<T> Node<T> {
    fn lca<C>(&self, a: &T, b: &T, comparator: &C) -> Option<&Self>
    where
        C: Comparator<T>,
    {
        if comparator.compare(a, &self.element) == Ordering::Equal
            || comparator.compare(b, &self.element) == Ordering::Equal
        {
            return Some(self);
        }

        let left = self
            .left
            .as_deref()
            .and_then(|n| n.lca(a, b, comparator));
        let right = self
            .right
            .as_deref()
            .and_then(|n| n.lca(a, b, comparator));
        match (left, right) {
            (Some(_), Some(_)) => Some(self),
            (found @ Some(_), None) | (None, found) => found,
        }
    }
}
