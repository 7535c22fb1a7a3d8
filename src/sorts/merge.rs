// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-down merge sort.
//!
//! Runs are halved until they hold at most one element, then adjacent runs
//! are merged back. Only the left run is copied into the scratch buffer; the
//! merge writes into the original slice from the front, which never overtakes
//! the unread part of the right run.

use crate::types::StepCounter;

/// Sort `vals` ascending; one step per element placed during a merge.
///
/// Stable: on equal keys the element from the left run is taken first.
pub fn merge_sort(vals: &mut [i32]) -> u64 {
    merge_sort_by(vals, |a, b| a < b)
}

/// Merge sort ordered by `less`. Ties (`!less(right, left)`) favour the left run.
pub fn merge_sort_by<T, F>(vals: &mut [T], less: F) -> u64
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    let mut steps = StepCounter::new();
    let mut scratch = Vec::with_capacity(vals.len() / 2 + 1);
    sort_run(vals, &mut scratch, &less, &mut steps);
    steps.finish()
}

fn sort_run<T, F>(run: &mut [T], scratch: &mut Vec<T>, less: &F, steps: &mut StepCounter)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    if run.len() <= 1 {
        return;
    }
    let mid = run.len() / 2;
    sort_run(&mut run[..mid], scratch, less, steps);
    sort_run(&mut run[mid..], scratch, less, steps);
    merge(run, mid, scratch, less, steps);
}

/// Merge the sorted halves `run[..mid]` and `run[mid..]`.
fn merge<T, F>(run: &mut [T], mid: usize, scratch: &mut Vec<T>, less: &F, steps: &mut StepCounter)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    scratch.clear();
    scratch.extend_from_slice(&run[..mid]);

    let (mut left, mut right, mut out) = (0, mid, 0);
    while left < scratch.len() && right < run.len() {
        if less(&run[right], &scratch[left]) {
            run[out] = run[right];
            right += 1;
        } else {
            run[out] = scratch[left];
            left += 1;
        }
        out += 1;
        steps.tick();
    }

    while left < scratch.len() {
        run[out] = scratch[left];
        left += 1;
        out += 1;
        steps.tick();
    }

    // Whatever remains of the right run is already in its final place.
    steps.add((run.len() - right) as u64);
}
