use balanced_bst::{Tree, TreeError};

use std::collections::BTreeSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// The sorted, deduplicated version of `xs`. This is what an in-order walk of a tree built from
/// `xs` should produce.
fn sorted_unique(xs: &[i16]) -> Vec<i16> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

fn in_order(tree: &Tree<i16>) -> Vec<i16> {
    let mut values = Vec::new();
    tree.in_order(|node| values.push(*node.value()));
    values
}

#[quickcheck]
fn construction_is_sorted_and_unique(xs: Vec<i16>) -> bool {
    in_order(&Tree::new(xs.clone())) == sorted_unique(&xs)
}

#[quickcheck]
fn construction_is_balanced(xs: Vec<i16>) -> bool {
    let tree = Tree::new(xs);
    let expected_height = usize::BITS - tree.len().leading_zeros();

    tree.is_balanced() && tree.height() == expected_height as usize
}

#[quickcheck]
fn insert_absent(xs: Vec<i16>, x: i16) -> TestResult {
    let mut tree = Tree::new(xs.clone());
    if tree.is_empty() || tree.contains(&x) {
        return TestResult::discard();
    }

    let mut expected = xs;
    expected.push(x);

    TestResult::from_bool(
        tree.insert(x).is_ok() && tree.contains(&x) && in_order(&tree) == sorted_unique(&expected),
    )
}

#[quickcheck]
fn delete_present(xs: Vec<i16>, inserts: Vec<i16>, index: usize) -> TestResult {
    let mut tree = Tree::new(xs);
    for x in inserts {
        let _ = tree.insert(x);
    }
    let before = in_order(&tree);
    if before.len() < 2 {
        return TestResult::discard();
    }

    let root = *tree.root().unwrap().value();
    let x = before[index % before.len()];
    if x == root {
        return TestResult::from_bool(
            tree.delete(&x) == Err(TreeError::CannotDeleteRoot) && in_order(&tree) == before,
        );
    }

    let mut expected = before;
    expected.retain(|value| *value != x);

    TestResult::from_bool(
        tree.delete(&x) == Ok(x) && tree.find(&x).is_none() && in_order(&tree) == expected,
    )
}

#[quickcheck]
fn delete_absent_is_a_no_op(xs: Vec<i16>, x: i16) -> TestResult {
    let mut tree = Tree::new(xs);
    if tree.is_empty() || tree.contains(&x) {
        return TestResult::discard();
    }
    let before = tree.clone();

    TestResult::from_bool(tree.delete(&x) == Err(TreeError::NotFound) && tree.root() == before.root())
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i16>, inserts: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new(xs);
    for x in inserts {
        let _ = tree.insert(x);
    }
    for x in deletes {
        let _ = tree.delete(&x);
    }
    let before = in_order(&tree);

    tree.rebalance();

    tree.is_balanced() && in_order(&tree) == before
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
    let mut tree = Tree::new(xs);
    for x in inserts {
        let _ = tree.insert(x);
    }
    let expected = in_order(&tree);

    let mut level = Vec::new();
    tree.level_order(|node| level.push(*node.value()));
    let mut pre = Vec::new();
    tree.pre_order(|node| pre.push(*node.value()));
    let mut post = Vec::new();
    tree.post_order(|node| post.push(*node.value()));

    [level, pre, post].into_iter().all(|mut walked| {
        walked.sort_unstable();
        walked == expected
    })
}

#[test]
fn eleven_value_scenario() {
    let _ = pretty_env_logger::try_init();

    let mut tree = Tree::new([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
    assert_eq!(in_order(&tree), [1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]);
    assert_eq!(tree.height(), 4);
    assert!(tree.is_balanced());
    tree.pretty_print();

    let mut grown = tree.clone();

    for x in [67, 1, 324] {
        assert_eq!(tree.delete(&x), Ok(x));
        assert!(tree.find(&x).is_none());
    }
    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(in_order(&tree), [3, 4, 5, 7, 8, 9, 23, 6345]);

    grown.insert(1000).unwrap();
    grown.rebalance();
    assert!(grown.is_balanced());
    assert_eq!(in_order(&grown).len(), 12);
    assert!(grown.contains(&1000));
}
