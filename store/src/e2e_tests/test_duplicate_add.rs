//! Test the add/duplicate/query/remove scenario for a single triple.

use crate::e2e_tests::helpers::*;

#[test]
fn test_duplicate_add_then_remove() {
    let mut store = new_test_store(&[]);

    assert!(store.add("alice", "knows", "bob"));
    assert!(!store.add("alice", "knows", "bob"));
    assert_eq!(store.len(), 1);

    let results = store.query("alice", "*", "bob");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].relation(), "knows");

    assert_eq!(store.remove("*", "knows", "*"), 1);
    assert!(store.query("*", "*", "*").is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_add_twice_grows_by_one() {
    let mut store = new_test_store(&[("x", "y", "z")]);
    for (e, r, p) in [("a", "b", "c"), ("", "", ""), ("a", "b", "c ")] {
        let before = store.len();
        assert!(store.add(e, r, p));
        assert!(!store.add(e, r, p));
        assert_eq!(store.len(), before + 1);
    }
    store.verify_indexes().unwrap();
}
