//! Common test utilities
#![allow(dead_code)]

use cvxr::prelude::*;

/// Build a label set from string literals
pub fn labels(names: &[&str]) -> LabelSet {
    LabelSet::new(names.iter().copied()).unwrap()
}

/// Assert two f64 slices are exactly equal, with element context on failure
pub fn assert_entries_eq(got: &[f64], expected: &[f64], msg: &str) {
    assert_eq!(got.len(), expected.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in got.iter().zip(expected.iter()).enumerate() {
        assert!(
            x == y,
            "{}: element {} differs: {} vs {}",
            msg,
            i,
            x,
            y
        );
    }
}
