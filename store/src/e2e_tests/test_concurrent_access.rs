//! Test sharing one store between threads behind a single lock.

use std::sync::{Arc, Mutex};
use std::thread;

use crate::store::TripleStore;

#[test]
fn test_locked_store_across_threads() {
    let store = Arc::new(Mutex::new(TripleStore::new()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..100 {
                    let (e, p) = (format!("t{t}"), format!("p{i}"));
                    let mut guard = store.lock().unwrap();
                    assert!(guard.add(e.as_str(), "wrote", p.as_str()));
                    if i % 10 == 0 {
                        assert_eq!(guard.remove(e.as_str(), "wrote", p.as_str()), 1);
                    }
                    drop(guard);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = store.lock().unwrap();
    assert_eq!(store.len(), 4 * 90);
    assert_eq!(store.query("t2", "*", "*").len(), 90);
    store.verify_indexes().unwrap();
}
