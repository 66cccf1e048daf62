//! Test that the same sequence of operations produces identical results.

use crate::e2e_tests::helpers::*;

fn run_sequence() -> (Vec<Fields>, usize, String) {
    let mut store = new_test_store(&[]);

    store.add("n1", "edge", "n2");
    store.add("n2", "edge", "n3");
    store.add("n3", "edge", "n1");
    store.add("n1", "label", "start");
    let removed = store.remove("*", "edge", "n1");
    store.add("n4", "edge", "n1");

    (fields(&store.query("*", "edge", "*")), removed, store.to_string())
}

#[test]
fn test_same_sequence_same_results() {
    let first = run_sequence();
    let second = run_sequence();
    assert_eq!(first, second);
    assert_eq!(first.1, 1);
    assert_eq!(
        first.0,
        vec![
            triple("n4", "edge", "n1"),
            triple("n1", "edge", "n2"),
            triple("n2", "edge", "n3"),
        ]
    );
}
