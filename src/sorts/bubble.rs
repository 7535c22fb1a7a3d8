// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bubble sort with trailing verification.
//!
//! Termination is decided by a full sortedness check after each pass rather
//! than a "no swap happened" flag. Sorted input therefore still costs one full
//! pass, and every pass costs exactly `n - 1` steps. This is a known
//! inefficiency kept on purpose: reported step counts depend on it.

use super::is_sorted;
use crate::types::StepCounter;

/// Sort `vals` ascending in place; one step per adjacent pair examined.
pub fn bubble_sort(vals: &mut [i32]) -> u64 {
    let mut steps = StepCounter::new();
    let n = vals.len();
    let mut passes = 0u64;

    loop {
        for i in 0..n.saturating_sub(1) {
            steps.tick();
            if vals[i] > vals[i + 1] {
                vals.swap(i, i + 1);
            }
        }
        passes += 1;
        tracing::trace!(pass = passes, steps = steps.get(), "bubble pass");

        if is_sorted(vals) {
            break;
        }
    }

    steps.finish()
}
