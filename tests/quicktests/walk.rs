use std::thread;

use quickcheck::TestResult;
use tree_equiv::{walk, Tree, WalkStatus};

use crate::Shaped;

/// Walks `tree` on another thread and collects everything it sends.
fn walked<T: Clone + Send + Sync>(tree: &Tree<T>) -> (Vec<T>, WalkStatus) {
    let (tx, rx) = walk::stream();
    thread::scope(|s| {
        let walker = s.spawn(|| walk::walk(tree, tx));
        let values = rx.iter().collect();
        (values, walker.join().unwrap())
    })
}

#[quickcheck]
fn length_is_node_count(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let (values, status) = walked(&tree);

    values.len() == tree.len()
        && values.len() == xs.len()
        && status == WalkStatus::Completed { emitted: xs.len() }
}

#[quickcheck]
fn search_tree_walks_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let (values, _) = walked(&tree);

    let mut sorted = xs;
    sorted.sort_unstable();
    values == sorted
}

#[quickcheck]
fn walk_is_in_order(shaped: Shaped) -> bool {
    let (values, _) = walked(&shaped.tree);

    values == shaped.values && shaped.tree.iter().copied().eq(values)
}

#[quickcheck]
fn stops_when_consumer_leaves(shaped: Shaped, take: usize) -> TestResult {
    let len = shaped.values.len();
    if len == 0 {
        return TestResult::discard();
    }
    let take = take % (len + 1);
    let (tx, rx) = walk::stream();

    let (received, status) = thread::scope(|s| {
        let walker = s.spawn(|| walk::walk(&shaped.tree, tx));
        let received: Vec<i8> = rx.iter().take(take).collect();
        drop(rx);
        (received, walker.join().unwrap())
    });

    let expected = if take == len {
        WalkStatus::Completed { emitted: len }
    } else {
        WalkStatus::Abandoned { emitted: take }
    };
    TestResult::from_bool(received[..] == shaped.values[..take] && status == expected)
}
