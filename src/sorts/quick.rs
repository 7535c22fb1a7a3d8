// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quicksort with a Lomuto partition around the last element.
//!
//! Sorted input is the worst case (`n(n-1)/2` comparisons). The recursion
//! only ever descends into the smaller side and loops on the larger one, so
//! stack depth stays logarithmic even then.

use crate::types::StepCounter;

/// Sort `vals` ascending in place; one step per pivot comparison. Not stable.
pub fn quick_sort(vals: &mut [i32]) -> u64 {
    let mut steps = StepCounter::new();
    sort_range(vals, &mut steps);
    steps.finish()
}

fn sort_range(mut range: &mut [i32], steps: &mut StepCounter) {
    while range.len() > 1 {
        let pivot_idx = partition(range, steps);
        let (left, rest) = std::mem::take(&mut range).split_at_mut(pivot_idx);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            sort_range(left, steps);
            range = right;
        } else {
            sort_range(right, steps);
            range = left;
        }
    }
}

/// Partition around `range[last]`; returns the pivot's final index.
///
/// Afterwards everything before the index is `< pivot` and everything after
/// is `>= pivot`.
fn partition(range: &mut [i32], steps: &mut StepCounter) -> usize {
    let last = range.len() - 1;
    let pivot = range[last];
    let mut store = 0;

    for j in 0..last {
        steps.tick();
        if range[j] < pivot {
            range.swap(store, j);
            store += 1;
        }
    }
    range.swap(store, last);
    store
}
