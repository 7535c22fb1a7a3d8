// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::StepCounter;

/// Sort `vals` ascending in place by repeated minimum selection.
///
/// Cost is data independent: `n - 1` outer picks plus `n(n-1)/2` inner
/// comparisons. The swap into position `i` happens even when the minimum is
/// already there.
pub fn selection_sort(vals: &mut [i32]) -> u64 {
    let mut steps = StepCounter::new();
    let n = vals.len();

    for i in 0..n.saturating_sub(1) {
        steps.tick();
        let mut min_idx = i;
        for j in i + 1..n {
            if vals[j] < vals[min_idx] {
                min_idx = j;
            }
            steps.tick();
        }
        vals.swap(i, min_idx);
    }

    steps.finish()
}
