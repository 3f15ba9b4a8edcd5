use crate::error::Error;
use crate::queue::Queue;
use crate::tree::{BinaryTree, Node};

impl<T, C> BinaryTree<T, C> {
    /// Walks the tree breadth first, weighing every element with `value_of`,
    /// and returns the level (the root is level `0`) whose weights add up to
    /// the most. Returns `None` for an empty tree.
    ///
    /// The earliest level wins a tie. The best sum starts at `0`, so when
    /// every level adds up to zero or less the root's level is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// for x in [10, 5, 15, 1, 7] {
    ///     tree.insert(x);
    /// }
    ///
    /// // Levels add up to 10, 20 and 8.
    /// assert_eq!(tree.level_with_max_sum(|x| i64::from(*x)), Some(1));
    /// ```
    pub fn level_with_max_sum<F>(&self, mut value_of: F) -> Option<usize>
    where
        F: FnMut(&T) -> i64,
    {
        let root = self.root()?;

        let mut queue: Queue<(&Node<T>, usize)> = Queue::new();
        queue.enqueue((root, 0));

        let mut current_level = 0;
        let mut level_sum = 0i64;
        let mut max_sum = 0i64;
        let mut best_level = 0;
        while let Some((node, level)) = queue.dequeue() {
            if level > current_level {
                if level_sum > max_sum {
                    max_sum = level_sum;
                    best_level = current_level;
                }
                current_level = level;
                level_sum = 0;
            }

            level_sum += value_of(&node.element);

            if let Some(left) = node.left.as_deref() {
                queue.enqueue((left, level + 1));
            }
            if let Some(right) = node.right.as_deref() {
                queue.enqueue((right, level + 1));
            }
        }

        // The deepest level never sees a deeper node, so fold it in here. Only the level matters
        // from now on.
        if level_sum > max_sum {
            best_level = current_level;
        }

        tracing::debug!(best_level, "found level with max sum");
        Some(best_level)
    }

    /// Like [`level_with_max_sum`][BinaryTree::level_with_max_sum] but reports
    /// an empty tree as [`Error::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::{BinaryTree, Error};
    ///
    /// let mut tree = BinaryTree::new();
    /// assert_eq!(tree.checked_level_with_max_sum(|x: &i32| i64::from(*x)), Err(Error::Empty));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.checked_level_with_max_sum(|x| i64::from(*x)), Ok(0));
    /// ```
    pub fn checked_level_with_max_sum<F>(&self, value_of: F) -> Result<usize, Error>
    where
        F: FnMut(&T) -> i64,
    {
        self.level_with_max_sum(value_of).ok_or(Error::Empty)
    }
}
