use std::cell::RefCell;

use super::*;

#[test]
fn failure_is_contained() {
    let ran = RefCell::new(Vec::new());
    let results: Vec<bool> = ["a", "b", "c"]
        .iter()
        .map(|name| {
            run_isolated(name, || {
                ran.borrow_mut().push(*name);
                if *name == "b" { Err(DomError::MissingElement("cardScene")) } else { Ok(()) }
            })
        })
        .collect();
    assert_eq!(results, vec![true, false, true]);
    assert_eq!(*ran.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn loader_mounts_after_its_listeners() {
    let pos = |n: &str| FEATURES.iter().position(|f| *f == n);
    assert!(pos("reveal") < pos("loader"));
    assert!(pos("counters") < pos("loader"));
    assert_eq!(pos("loader"), Some(FEATURES.len() - 1));
}
