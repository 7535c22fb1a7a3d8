// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for sort results.
//!
//! Debug-mode assertions run by the engine after every instrumented sort.
//! They compile to nothing in release builds. A failure here is a bug in a
//! sorting routine, never a user error, so these panic instead of returning
//! `Result`.
//!
//! | Contract            | Property                                         |
//! |---------------------|--------------------------------------------------|
//! | `check_sorted`      | output is non-decreasing                         |
//! | `check_permutation` | output holds exactly the input's multiset        |
//! | `check_steps_bound` | step count never exceeds the algorithm's maximum |

use crate::types::SortMethod;

/// Check that `vals` is in non-decreasing order.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order.
#[inline]
pub fn check_sorted(vals: &[i32]) {
    if cfg!(debug_assertions) {
        for i in 1..vals.len() {
            debug_assert!(
                vals[i - 1] <= vals[i],
                "Contract violation: output unsorted at {} ({} > {})",
                i,
                vals[i - 1],
                vals[i]
            );
        }
    }
}

/// Check that `after` is a rearrangement of `before`.
///
/// # Panics (debug builds only)
/// Panics if lengths differ or any value's multiplicity changed.
#[inline]
pub fn check_permutation(before: &[i32], after: &[i32]) {
    if cfg!(debug_assertions) {
        debug_assert_eq!(
            before.len(),
            after.len(),
            "Contract violation: sort changed the length"
        );
        let mut expected = before.to_vec();
        let mut actual = after.to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        debug_assert!(
            expected == actual,
            "Contract violation: sort created or destroyed values"
        );
    }
}

/// Upper bound on the steps `method` may take for `n` elements.
pub fn max_steps(method: SortMethod, n: usize) -> u64 {
    let n = n as u64;
    if n < 2 {
        return 0;
    }
    let pairs = n * (n - 1) / 2;
    match method {
        // The pass that places the last pair is also the verifying pass.
        SortMethod::Bubble => (n - 1) * (n - 1),
        SortMethod::Selection => (n - 1) + pairs,
        SortMethod::Insertion => (n - 1) + pairs,
        // Every one of ceil(log2 n) levels places each element once.
        SortMethod::Merge => n * u64::from(n.next_power_of_two().trailing_zeros()),
        SortMethod::Quick => pairs,
    }
}

/// Check that a reported step count is within the algorithm's maximum.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_steps_bound(method: SortMethod, n: usize, steps: u64) {
    debug_assert!(
        steps <= max_steps(method, n),
        "Contract violation: {} sort took {} steps for {} elements (max {})",
        method,
        steps,
        n,
        max_steps(method, n)
    );
}
