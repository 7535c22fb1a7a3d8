//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Cursor;

use sortlab::{run_session, SessionOptions, SessionOutcome};

// Re-export canonical test utilities from sortlab::testing
pub use sortlab::testing::{ascending, descending, merge_steps, same_multiset, selection_steps};

/// The worked example: five elements, every method sorts it to `1..=5`.
pub const SAMPLE: [i32; 5] = [3, 1, 4, 5, 2];

/// Assert `after` is the sorted rearrangement of `before`.
pub fn assert_sorted_permutation(before: &[i32], after: &[i32]) {
    assert!(
        after.windows(2).all(|w| w[0] <= w[1]),
        "not sorted: {:?}",
        after
    );
    assert!(
        same_multiset(before, after),
        "values changed: {:?} -> {:?}",
        before,
        after
    );
}

/// Run a session against scripted stdin, returning the outcome and transcript.
pub fn transcript(stdin: &str, options: &SessionOptions) -> (SessionOutcome, String) {
    let mut out = Vec::new();
    let outcome = run_session(Cursor::new(stdin.as_bytes().to_vec()), &mut out, options)
        .expect("session failed");
    (outcome, String::from_utf8(out).expect("non-utf8 output"))
}
