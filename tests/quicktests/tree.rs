use cmp_bst::{BinaryTree, Error, SizeAccounting};

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinaryTree<T>, set: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst.delete(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new().with_accounting(SizeAccounting::Exact);
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.size() == set.len()
        && (i8::MIN..=i8::MAX).all(|x| tree.search(&x).is_some() == set.contains(&x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn size_of_distinct_inserts_and_present_deletes(xs: HashSet<i16>, deletes: Vec<usize>) -> bool {
    let xs: Vec<i16> = xs.into_iter().collect();
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let mut deleted = HashSet::new();
    for i in deletes {
        if xs.is_empty() {
            break;
        }
        let x = xs[i % xs.len()];
        if deleted.insert(x) && tree.delete(&x) != Some(x) {
            return false;
        }
    }

    // No duplicates and no misses, so both accountings agree.
    tree.size() == xs.len() - deleted.len()
}

#[quickcheck]
fn checked_delete_matches_presence(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let size = tree.size();

    match tree.checked_delete(&x) {
        Ok(removed) => xs.contains(&x) && removed == x && tree.size() == size - 1,
        Err(Error::NotFound) => !xs.contains(&x) && tree.size() == size,
        Err(_) => false,
    }
}

#[quickcheck]
fn height_bounds(xs: HashSet<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let n = xs.len() as isize;
    tree.height() >= -1 && tree.height() <= n - 1 && (n == 0) == (tree.height() == -1)
}

#[quickcheck]
fn clear_twice(xs: Vec<i8>) -> bool {
    let mut tree = BinaryTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    tree.clear();
    tree.clear();

    tree.size() == 0 && tree.height() == -1 && xs.iter().all(|x| tree.search(x).is_none())
}
