// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the five sorting routines.
//!
//! Any input must come back sorted, with the same values, within the
//! worst-case step bound. `run_sort` also runs the debug contracts.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sortlab::contracts::max_steps;
use sortlab::{is_sorted, run_sort, SortMethod};

fuzz_target!(|vals: Vec<i32>| {
    // Keep quadratic methods fast enough for the fuzzer
    if vals.len() > 2048 {
        return;
    }

    let mut expected = vals.clone();
    expected.sort_unstable();

    for method in SortMethod::ALL {
        let mut actual = vals.clone();
        let report = run_sort(method, &mut actual);

        assert!(is_sorted(&actual), "{} left input unsorted", method);
        assert_eq!(actual, expected, "{} changed the values", method);
        assert!(report.steps <= max_steps(method, actual.len()));
    }
});
