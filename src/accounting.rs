/// How a [`BinaryTree`][crate::BinaryTree] maintains its cached `size`.
///
/// The tree caches its element count instead of walking the nodes. The
/// historical counter this tree is compatible with is blind to the outcome of
/// each operation: it counts calls, not nodes. `Reference` keeps that
/// behaviour; `Exact` counts nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeAccounting {
    /// Every `insert` adds one, even when a duplicate is dropped. Every
    /// `delete` subtracts one, even when nothing matched (stopping at zero).
    #[default]
    Reference,
    /// `size` is always the number of nodes in the tree.
    Exact,
}

impl SizeAccounting {
    /// The size after an insert that did (or didn't) create a node.
    pub(crate) fn after_insert(self, size: usize, created: bool) -> usize {
        match (self, created) {
            (Self::Reference, _) | (Self::Exact, true) => size + 1,
            (Self::Exact, false) => size,
        }
    }

    /// The size after a delete that did (or didn't) remove a node.
    pub(crate) fn after_delete(self, size: usize, removed: bool) -> usize {
        match (self, removed) {
            (Self::Reference, _) | (Self::Exact, true) => size.saturating_sub(1),
            (Self::Exact, false) => size,
        }
    }
}
