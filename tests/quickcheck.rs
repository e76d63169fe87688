use avl_tree::{AvlTree, Error};
use quickcheck::{TestResult, quickcheck};
use std::collections::BTreeSet;

mod add {
    use avl_tree::AvlTree;
    use quickcheck::quickcheck;

    #[test]
    fn sets_len() {
        fn test(mut tree: AvlTree<u32>, value: u32) -> bool {
            let old_len = tree.len();

            if tree.add(value) {
                tree.len() == old_len + 1
            } else {
                tree.len() == old_len
            }
        }

        quickcheck(test as fn(AvlTree<u32>, u32) -> bool);
    }

    #[test]
    fn adds_value() {
        fn test(mut tree: AvlTree<u32>, value: u32) -> bool {
            tree.add(value);
            tree.contains(&value) && tree.get(&value) == Ok(&value)
        }

        quickcheck(test as fn(AvlTree<u32>, u32) -> bool);
    }

    #[test]
    fn reports_duplicates() {
        fn test(mut tree: AvlTree<u32>, value: u32) -> bool {
            let present = tree.contains(&value);
            tree.add(value) != present
        }

        quickcheck(test as fn(AvlTree<u32>, u32) -> bool);
    }

    #[test]
    fn affects_no_others() {
        fn test(values: Vec<u32>, value: u32) -> bool {
            let mut tree: AvlTree<u32> = values.iter().cloned().collect();
            tree.add(value);
            values.iter().all(|v| tree.get(v) == Ok(v))
        }

        quickcheck(test as fn(Vec<u32>, u32) -> bool);
    }
}

mod remove {
    use avl_tree::{AvlTree, Error};
    use quickcheck::{TestResult, quickcheck};

    #[test]
    fn removes_value() {
        fn test(mut tree: AvlTree<u32>, value: u32) -> TestResult {
            match tree.remove(&value) {
                Err(Error::NotFound) => TestResult::discard(),
                Err(_) => TestResult::failed(),
                Ok(removed) => TestResult::from_bool(
                    removed == value &&
                    !tree.contains(&value) &&
                    tree.get(&value) == Err(Error::NotFound)
                ),
            }
        }

        quickcheck(test as fn(AvlTree<u32>, u32) -> TestResult);
    }

    #[test]
    fn sets_len() {
        fn test(mut tree: AvlTree<u32>, value: u32) -> bool {
            let old_len = tree.len();

            match tree.remove(&value) {
                Ok(_) => tree.len() == old_len - 1,
                Err(_) => tree.len() == old_len,
            }
        }

        quickcheck(test as fn(AvlTree<u32>, u32) -> bool);
    }

    #[test]
    fn affects_no_others() {
        fn test(values: Vec<u32>, index: usize) -> TestResult {
            if values.is_empty() { return TestResult::discard(); }

            let mut tree: AvlTree<u32> = values.iter().cloned().collect();
            let value = values[index % values.len()];

            TestResult::from_bool(
                tree.remove(&value) == Ok(value) &&
                values.iter().filter(|&&v| v != value).all(|v| tree.get(v) == Ok(v))
            )
        }

        quickcheck(test as fn(Vec<u32>, usize) -> TestResult);
    }

    #[test]
    fn missing_value_leaves_tree_unchanged() {
        fn test(values: Vec<u8>, value: u8) -> TestResult {
            if values.contains(&value) { return TestResult::discard(); }

            let mut tree: AvlTree<u8> = values.iter().cloned().collect();
            let old_height = tree.height();
            let old_root = tree.root().cloned();

            TestResult::from_bool(
                tree.remove(&value) == Err(Error::NotFound) &&
                tree.height() == old_height &&
                tree.root().cloned() == old_root &&
                values.iter().all(|v| tree.contains(v))
            )
        }

        quickcheck(test as fn(Vec<u8>, u8) -> TestResult);
    }
}

#[test]
fn len_counts_distinct_values() {
    fn test(added: Vec<i16>, removed: Vec<i16>) -> bool {
        let mut tree = AvlTree::new();
        let mut set = BTreeSet::new();

        for value in added {
            assert_eq!(tree.add(value), set.insert(value));
        }

        for value in &removed {
            assert_eq!(tree.remove(value).is_ok(), set.remove(value));
        }

        tree.len() == set.len() && set.iter().all(|value| tree.contains(value))
    }

    quickcheck(test as fn(Vec<i16>, Vec<i16>) -> bool);
}

#[test]
fn add_then_remove_round_trips() {
    fn test(values: Vec<i16>, value: i16) -> TestResult {
        let mut tree: AvlTree<i16> = values.iter().cloned().collect();
        if tree.contains(&value) { return TestResult::discard(); }

        let old_len = tree.len();
        tree.add(value);

        TestResult::from_bool(
            tree.remove(&value) == Ok(value) &&
            tree.len() == old_len &&
            values.iter().all(|v| tree.get(v) == Ok(v))
        )
    }

    quickcheck(test as fn(Vec<i16>, i16) -> TestResult);
}

#[test]
fn height_is_logarithmic() {
    fn test(values: Vec<u32>) -> bool {
        let tree: AvlTree<u32> = values.into_iter().collect();
        let n = tree.len() as f64;

        (tree.height() as f64) <= 1.44 * (n + 2.0).log2()
    }

    quickcheck(test as fn(Vec<u32>) -> bool);
}

#[test]
fn height_stays_logarithmic_after_removals() {
    fn test(values: Vec<u16>, removed: Vec<u16>) -> bool {
        let mut tree: AvlTree<u16> = values.into_iter().collect();
        for value in &removed { let _ = tree.remove(value); }
        let n = tree.len() as f64;

        (tree.height() as f64) <= 1.44 * (n + 2.0).log2()
    }

    quickcheck(test as fn(Vec<u16>, Vec<u16>) -> bool);
}

#[test]
fn max_deepest_node_is_stored() {
    fn test(tree: AvlTree<u32>) -> bool {
        match tree.max_deepest_node() {
            None => tree.is_empty(),
            Some(value) => tree.contains(value),
        }
    }

    quickcheck(test as fn(AvlTree<u32>) -> bool);
}

#[test]
fn max_deepest_node_of_single_path_is_last_added() {
    fn test(a: u32, b: u32) -> TestResult {
        if a == b { return TestResult::discard(); }

        let tree: AvlTree<u32> = vec![a, b].into_iter().collect();
        TestResult::from_bool(tree.max_deepest_node() == Some(&b))
    }

    quickcheck(test as fn(u32, u32) -> TestResult);
}

#[test]
fn common_ancestor_lies_between_values() {
    fn test(values: Vec<u32>, i: usize, j: usize) -> TestResult {
        if values.is_empty() { return TestResult::discard(); }

        let tree: AvlTree<u32> = values.iter().cloned().collect();
        let a = values[i % values.len()];
        let b = values[j % values.len()];
        let (min, max) = if a < b { (a, b) } else { (b, a) };

        match tree.deepest_common_ancestor(&a, &b) {
            Ok(&ancestor) => TestResult::from_bool(min <= ancestor && ancestor <= max),
            Err(_) => TestResult::failed(),
        }
    }

    quickcheck(test as fn(Vec<u32>, usize, usize) -> TestResult);
}

#[test]
fn common_ancestor_is_symmetric() {
    fn test(tree: AvlTree<u8>, a: u8, b: u8) -> bool {
        tree.deepest_common_ancestor(&a, &b) == tree.deepest_common_ancestor(&b, &a)
    }

    quickcheck(test as fn(AvlTree<u8>, u8, u8) -> bool);
}

#[test]
fn common_ancestor_of_value_with_itself() {
    fn test(tree: AvlTree<u8>, value: u8) -> bool {
        match tree.deepest_common_ancestor(&value, &value) {
            Ok(&ancestor) => ancestor == value,
            Err(error) => error == Error::NotFound && !tree.contains(&value),
        }
    }

    quickcheck(test as fn(AvlTree<u8>, u8) -> bool);
}

#[test]
fn common_ancestor_with_root_is_root() {
    fn test(tree: AvlTree<u32>, value: u32) -> TestResult {
        let root = match tree.root() {
            Some(&root) => root,
            None => return TestResult::discard(),
        };

        if !tree.contains(&value) { return TestResult::discard(); }
        TestResult::from_bool(tree.deepest_common_ancestor(&root, &value) == Ok(&root))
    }

    quickcheck(test as fn(AvlTree<u32>, u32) -> TestResult);
}

#[test]
fn try_from_iter_agrees_with_collect() {
    fn test(values: Vec<Option<u8>>) -> bool {
        match AvlTree::<u8>::try_from_iter(values.clone()) {
            Ok(tree) => {
                let expected: AvlTree<u8> = values.into_iter().flatten().collect();
                tree.len() == expected.len() && tree.root() == expected.root()
            }
            Err(error) => error == Error::InvalidArgument && values.contains(&None),
        }
    }

    quickcheck(test as fn(Vec<Option<u8>>) -> bool);
}

#[test]
fn clear_empties_tree() {
    fn test(tree: AvlTree<u32>) -> bool {
        let mut tree = tree;
        tree.clear();

        tree.is_empty() &&
        tree.len() == 0 &&
        tree.height() == -1 &&
        tree.root().is_none() &&
        tree.max_deepest_node().is_none()
    }

    quickcheck(test as fn(AvlTree<u32>) -> bool);
}
