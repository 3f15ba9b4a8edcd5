use cmp_bst::{BinaryTree, Error, Operand};

use std::collections::{BTreeMap, HashSet};

/// Per-level sums computed by grouping elements by how many comparisons it
/// takes to find them.
fn level_sums(tree: &BinaryTree<i8>, xs: &HashSet<i8>) -> BTreeMap<usize, i64> {
    let mut sums = BTreeMap::new();
    for x in xs {
        // Depth of `x` is the number of strict ancestors, i.e. stored elements whose
        // lowest common ancestor with `x` is themselves.
        let depth = xs
            .iter()
            .filter(|y| *y != x && tree.lca(x, y) == Some(*y))
            .count();
        *sums.entry(depth).or_insert(0) += i64::from(*x);
    }
    sums
}

#[quickcheck]
fn level_with_max_sum_picks_first_best_level(xs: HashSet<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let expected = if xs.is_empty() {
        None
    } else {
        let mut best_level = 0;
        let mut max_sum = 0;
        for (level, sum) in level_sums(&tree, &xs) {
            if sum > max_sum {
                best_level = level;
                max_sum = sum;
            }
        }
        Some(best_level)
    };

    tree.level_with_max_sum(|x| i64::from(*x)) == expected
}

#[quickcheck]
fn lca_is_an_ancestor_of_both(xs: HashSet<i8>, a: i8, b: i8) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    match (xs.contains(&a), xs.contains(&b)) {
        (true, true) => {
            let Ok(lca) = tree.checked_lca(&a, &b) else {
                return false;
            };
            let (lo, hi) = (a.min(b), a.max(b));
            // In a BST the common ancestor sits between the two elements.
            lo <= *lca && *lca <= hi && tree.lca(&a, &b) == Some(lca)
        }
        (false, _) => tree.checked_lca(&a, &b) == Err(Error::MissingOperand(Operand::First)),
        (true, false) => tree.checked_lca(&a, &b) == Err(Error::MissingOperand(Operand::Second)),
    }
}

#[test]
fn level_sum_example() {
    let mut tree = BinaryTree::new();
    for x in [10, 5, 15, 1, 7] {
        tree.insert(x);
    }

    assert_eq!(tree.level_with_max_sum(|x| i64::from(*x)), Some(1));
}

#[test]
fn lca_example() {
    let mut tree = BinaryTree::new();
    for x in [20, 10, 30, 5, 15] {
        tree.insert(x);
    }

    assert_eq!(tree.lca(&5, &15), Some(&10));
    assert_eq!(tree.lca(&5, &30), Some(&20));

    assert_eq!(tree.delete(&20), Some(20));
    assert_eq!(tree.search(&20), None);
    assert_eq!(tree.lca(&5, &30), Some(&30));
}
